//! # Cart Events
//!
//! The notification seam between the store and the host's toast layer.
//!
//! One event exists: a successful `add` resolution. Everything else the host
//! needs arrives through snapshots ([`crate::store::CartStore::subscribe`]).

use namecart_core::Domain;

/// Trait for receiving cart notifications (implemented by the host UI
/// integration).
pub trait CartEventEmitter: Send + Sync {
    /// Called once per resolved `add`, with the entry that was appended.
    /// Carries both the normalized name and the availability verdict so a
    /// toast can say "example.com is available!" or "example.com is taken".
    fn domain_added(&self, domain: &Domain);
}

/// No-op event emitter for hosts without a notification surface, and for
/// testing.
pub struct NoOpEmitter;

impl CartEventEmitter for NoOpEmitter {
    fn domain_added(&self, _domain: &Domain) {}
}
