//! # Store Error Types
//!
//! Error types for the async store layer.
//!
//! ## What Is and Is Not an Error
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   Store Error Taxonomy                                  │
//! │                                                                         │
//! │  NOT errors (AddOutcome values, recoverable, shown as pending error):  │
//! │  ├── RejectedInvalidFormat  - bad suffix or pasted URL                 │
//! │  ├── RejectedDuplicate      - name already in cart                     │
//! │  └── RejectedCartFull       - hard cap enabled and reached             │
//! │                                                                         │
//! │  Errors (StoreError, returned as Err):                                 │
//! │  ├── Closed         - operation after teardown; nothing was mutated    │
//! │  ├── Oracle         - availability lookup failed; nothing was mutated  │
//! │  └── InvalidConfig  - store constructed with unusable configuration    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! An oracle failure has no safe availability verdict to fall back on, so
//! this crate surfaces it instead of guessing. See DESIGN.md.

use thiserror::Error;

// =============================================================================
// Oracle Error
// =============================================================================

/// Failure reported by an [`crate::oracle::AvailabilityOracle`]
/// implementation.
#[derive(Debug, Clone, Error)]
pub enum OracleError {
    /// The lookup could not produce a verdict.
    #[error("availability lookup failed: {reason}")]
    LookupFailed { reason: String },
}

impl OracleError {
    /// Convenience constructor for implementors.
    pub fn lookup_failed(reason: impl Into<String>) -> Self {
        OracleError::LookupFailed {
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Store Error
// =============================================================================

/// Errors returned by [`crate::store::CartStore`] operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store was closed; the operation (or a late oracle resolution)
    /// was discarded without mutating anything.
    #[error("cart store is closed")]
    Closed,

    /// The availability oracle failed while checking `name`. The cart,
    /// input, and pending error are untouched.
    #[error("could not check availability of {name}: {source}")]
    Oracle {
        name: String,
        #[source]
        source: OracleError,
    },

    /// The store was constructed with unusable configuration.
    #[error("invalid store config: {0}")]
    InvalidConfig(String),
}

impl StoreError {
    /// Returns true if the same call can be retried as-is.
    ///
    /// Oracle failures are transient from the store's point of view; a
    /// closed store never comes back.
    pub fn is_retryable(&self) -> bool {
        matches!(self, StoreError::Oracle { .. })
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::Oracle {
            name: "example.com".to_string(),
            source: OracleError::lookup_failed("registrar timeout"),
        };
        assert_eq!(
            err.to_string(),
            "could not check availability of example.com: availability lookup failed: registrar timeout"
        );

        assert_eq!(StoreError::Closed.to_string(), "cart store is closed");
    }

    #[test]
    fn test_retryable_classification() {
        let oracle = StoreError::Oracle {
            name: "example.com".to_string(),
            source: OracleError::lookup_failed("flaky network"),
        };
        assert!(oracle.is_retryable());

        assert!(!StoreError::Closed.is_retryable());
        assert!(!StoreError::InvalidConfig("required count".into()).is_retryable());
    }
}
