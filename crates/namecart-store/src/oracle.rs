//! # Availability Oracle
//!
//! The external capability the store consumes: "given a domain name,
//! asynchronously report whether it is available."
//!
//! ## Boundary
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Availability Boundary                              │
//! │                                                                         │
//! │   namecart-store                      implementor's world               │
//! │   ──────────────                      ──────────────────                │
//! │                                                                         │
//! │   CartStore::add ──► is_domain_available(name) ──► registrar API,      │
//! │        ▲                                           WHOIS, cache,        │
//! │        │                                           rate limiting, ...   │
//! │        └──────────────── bool / OracleError ◄──────────────────────     │
//! │                                                                         │
//! │   The store never sees HOW the answer was produced. Lookup internals    │
//! │   (network, caching, retries) live entirely behind this trait.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::OracleError;

/// Async capability answering "is this domain registrable?".
///
/// Implementations must eventually resolve; the store has no timeout and a
/// stalled lookup leaves the add attempt in flight indefinitely.
#[async_trait]
pub trait AvailabilityOracle: Send + Sync {
    /// Reports whether `name` (normalized, suffix-validated) is available.
    async fn is_domain_available(&self, name: &str) -> Result<bool, OracleError>;
}

// =============================================================================
// Static Oracle
// =============================================================================

/// Deterministic in-memory oracle for tests and demos.
///
/// Answers from a fixed verdict table, falling back to a default for names
/// not listed. Never fails.
#[derive(Debug, Clone, Default)]
pub struct StaticOracle {
    verdicts: HashMap<String, bool>,
    default_verdict: bool,
}

impl StaticOracle {
    /// Creates an oracle that answers `default_verdict` for every name not
    /// explicitly listed.
    pub fn new(default_verdict: bool) -> Self {
        StaticOracle {
            verdicts: HashMap::new(),
            default_verdict,
        }
    }

    /// Pins the verdict for one name.
    pub fn with_verdict(mut self, name: impl Into<String>, available: bool) -> Self {
        self.verdicts.insert(name.into(), available);
        self
    }
}

#[async_trait]
impl AvailabilityOracle for StaticOracle {
    async fn is_domain_available(&self, name: &str) -> Result<bool, OracleError> {
        Ok(self
            .verdicts
            .get(name)
            .copied()
            .unwrap_or(self.default_verdict))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_oracle_default_verdict() {
        let oracle = StaticOracle::new(true);
        assert!(oracle.is_domain_available("anything.com").await.unwrap());

        let oracle = StaticOracle::new(false);
        assert!(!oracle.is_domain_available("anything.com").await.unwrap());
    }

    #[tokio::test]
    async fn test_static_oracle_pinned_verdicts() {
        let oracle = StaticOracle::new(true)
            .with_verdict("taken.com", false)
            .with_verdict("open.xyz", true);

        assert!(!oracle.is_domain_available("taken.com").await.unwrap());
        assert!(oracle.is_domain_available("open.xyz").await.unwrap());
        assert!(oracle.is_domain_available("unlisted.app").await.unwrap());
    }
}
