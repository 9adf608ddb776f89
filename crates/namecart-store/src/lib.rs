//! # namecart-store: Async Cart State Container
//!
//! The stateful half of NameCart: owns the cart, serializes mutations,
//! consults the availability oracle, and feeds the host UI snapshots and
//! notifications.
//!
//! ## Control Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      NameCart Store Control Flow                        │
//! │                                                                         │
//! │  Host UI ──► CartStore::add(raw)                                       │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │          validate_domain_name (namecart-core, pure)                    │
//! │                    │ ok                                                 │
//! │                    ▼                                                    │
//! │          duplicate / cap check (under the store lock)                  │
//! │                    │ ok                                                 │
//! │                    ▼                                                    │
//! │          AvailabilityOracle::is_domain_available  ◄── the only await   │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │          append + clear error/input + publish snapshot                 │
//! │                    │                                                    │
//! │                    ├──► CartEventEmitter::domain_added  (toast)        │
//! │                    └──► watch::Receiver<CartSnapshot>   (re-render)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`store`] - The [`CartStore`] container and [`AddOutcome`]
//! - [`oracle`] - The [`AvailabilityOracle`] port and [`StaticOracle`]
//! - [`events`] - The [`CartEventEmitter`] notification seam
//! - [`snapshot`] - The [`CartSnapshot`] view DTO
//! - [`config`] - Host-supplied [`StoreConfig`]
//! - [`error`] - [`StoreError`] / [`OracleError`]

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod events;
pub mod oracle;
pub mod snapshot;
pub mod store;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use config::StoreConfig;
pub use error::{OracleError, StoreError, StoreResult};
pub use events::{CartEventEmitter, NoOpEmitter};
pub use oracle::{AvailabilityOracle, StaticOracle};
pub use snapshot::CartSnapshot;
pub use store::{AddOutcome, CartStore};
