//! # Validation Module
//!
//! Candidate domain name validation for NameCart.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Host UI                                                      │
//! │  ├── Live input feedback while the user types                          │
//! │  └── Renders the pending error message                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (pure format check)                              │
//! │  ├── Normalize: trim + lowercase                                       │
//! │  ├── Reject pasted URLs (https:// prefix)                              │
//! │  └── Require a registered suffix (.com / .xyz / .app)                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: CartStore (stateful checks)                                  │
//! │  ├── Duplicate check against the cart                                  │
//! │  └── Availability lookup via the oracle                                │
//! │                                                                         │
//! │  Only Layer 2 lives in this crate: pure, deterministic, no state.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use namecart_core::validation::validate_domain_name;
//!
//! // Normalizes before checking
//! assert_eq!(validate_domain_name("  Example.COM ").unwrap(), "example.com");
//!
//! // Pasted URLs are rejected outright
//! assert!(validate_domain_name("https://example.com").is_err());
//! ```

use crate::error::ValidationError;
use crate::types::Suffix;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a candidate domain name and returns its normalized form.
///
/// ## Rules
/// - Normalization: surrounding whitespace is trimmed, the rest lowercased
/// - Must not contain the literal substring `https://` anywhere
/// - Must end in one of the registered suffixes (`.com`, `.xyz`, `.app`);
///   this is a trailing-string match, not TLD parsing
///
/// ## Example
/// ```rust
/// use namecart_core::validation::validate_domain_name;
///
/// assert!(validate_domain_name("example.com").is_ok());
/// assert!(validate_domain_name("example.org").is_err());
/// assert!(validate_domain_name("https://example.com").is_err());
/// ```
pub fn validate_domain_name(raw: &str) -> ValidationResult<String> {
    let normalized = raw.trim().to_lowercase();

    if normalized.contains("https://") {
        return Err(ValidationError::ContainsProtocol { input: normalized });
    }

    if Suffix::of(&normalized).is_none() {
        return Err(ValidationError::UnsupportedSuffix { input: normalized });
    }

    Ok(normalized)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_registered_suffixes() {
        assert_eq!(validate_domain_name("example.com").unwrap(), "example.com");
        assert_eq!(validate_domain_name("example.xyz").unwrap(), "example.xyz");
        assert_eq!(validate_domain_name("example.app").unwrap(), "example.app");
    }

    #[test]
    fn test_normalizes_case_and_whitespace() {
        assert_eq!(validate_domain_name("Example.Com").unwrap(), "example.com");
        assert_eq!(validate_domain_name("  cool.APP  ").unwrap(), "cool.app");
    }

    #[test]
    fn test_rejects_protocol_prefix() {
        let err = validate_domain_name("https://example.com").unwrap_err();
        assert!(matches!(err, ValidationError::ContainsProtocol { .. }));

        // Anywhere in the string, not just the front
        let err = validate_domain_name("oops https://example.com").unwrap_err();
        assert!(matches!(err, ValidationError::ContainsProtocol { .. }));
    }

    #[test]
    fn test_rejects_unsupported_suffixes() {
        for raw in ["example.org", "example.net", "example", "example.com.br"] {
            let err = validate_domain_name(raw).unwrap_err();
            assert!(
                matches!(err, ValidationError::UnsupportedSuffix { .. }),
                "{raw} should fail the suffix check"
            );
        }
    }

    #[test]
    fn test_rejects_empty_input() {
        assert!(validate_domain_name("").is_err());
        assert!(validate_domain_name("   ").is_err());
    }

    #[test]
    fn test_protocol_check_runs_before_suffix_check() {
        // A pasted URL ends in .com, so it would pass the suffix check;
        // the protocol rejection must win
        let err = validate_domain_name("https://example.com").unwrap_err();
        assert!(matches!(err, ValidationError::ContainsProtocol { .. }));
    }
}
