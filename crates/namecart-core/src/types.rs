//! # Domain Types
//!
//! Core domain types used throughout NameCart.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────────────────────────────┐     │
//! │  │     Suffix      │   │               Domain                    │     │
//! │  │  ─────────────  │   │  ─────────────────────────────────────  │     │
//! │  │  Com  (rank 0)  │   │  name         (normalized, validated)   │     │
//! │  │  App  (rank 1)  │   │  is_available (frozen at insertion)     │     │
//! │  │  Xyz  (rank 2)  │   │  added_at     (frozen at insertion)     │     │
//! │  └─────────────────┘   └─────────────────────────────────────────┘     │
//! │                                                                         │
//! │  Suffix ranking drives auto-selection: when the cart holds more        │
//! │  names than the user needs, `.com` names win over `.app`, which win    │
//! │  over any other registered suffix.                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Suffix
// =============================================================================

/// A registered domain suffix.
///
/// ## Matching Semantics
/// Matching is a literal trailing-string comparison against an already
/// normalized (trimmed, lowercased) name - not generic TLD parsing. This is
/// intentional: the product sells names under a fixed suffix set.
///
/// ## Ranking
/// Variant order doubles as selection rank: `.com` sorts before `.app`,
/// which sorts before `.xyz`. The derived `Ord` relies on this order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Suffix {
    /// `.com` - always preferred.
    Com,
    /// `.app` - preferred over everything but `.com`.
    App,
    /// `.xyz` - the remaining registered suffix.
    Xyz,
}

impl Suffix {
    /// Every suffix the product registers names under.
    pub const REGISTERED: [Suffix; 3] = [Suffix::Com, Suffix::Xyz, Suffix::App];

    /// Returns the literal suffix text, dot included.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Suffix::Com => ".com",
            Suffix::App => ".app",
            Suffix::Xyz => ".xyz",
        }
    }

    /// Selection rank: lower is better.
    #[inline]
    pub const fn rank(&self) -> u8 {
        match self {
            Suffix::Com => 0,
            Suffix::App => 1,
            Suffix::Xyz => 2,
        }
    }

    /// Matches the trailing suffix of a normalized name.
    ///
    /// Expects lowercased input; `"EXAMPLE.COM"` does not match. Use
    /// [`crate::validation::validate_domain_name`] to normalize first.
    pub fn of(name: &str) -> Option<Suffix> {
        Suffix::REGISTERED
            .into_iter()
            .find(|suffix| name.ends_with(suffix.as_str()))
    }
}

impl std::fmt::Display for Suffix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Domain
// =============================================================================

/// A domain name in the cart, with the availability the oracle reported
/// when it was added.
///
/// ## Design Notes
/// - `name`: normalized (trimmed, lowercased) and suffix-validated
/// - `is_available`: frozen at insertion time. Availability is not
///   rechecked while the name sits in the cart; a recheck would replace the
///   entry, never mutate it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    /// Normalized domain name - the cart's identity key.
    pub name: String,

    /// Whether the availability oracle reported the name registrable.
    pub is_available: bool,

    /// When this entry was appended to the cart.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl Domain {
    /// Creates a cart entry for a normalized name, freezing the availability
    /// verdict and the insertion instant.
    pub fn new(name: impl Into<String>, is_available: bool) -> Self {
        Domain {
            name: name.into(),
            is_available,
            added_at: Utc::now(),
        }
    }

    /// The registered suffix of this name.
    ///
    /// `None` only if the entry was constructed from an unvalidated name;
    /// entries that went through the validator always resolve.
    pub fn suffix(&self) -> Option<Suffix> {
        Suffix::of(&self.name)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_trailing_match() {
        assert_eq!(Suffix::of("example.com"), Some(Suffix::Com));
        assert_eq!(Suffix::of("example.xyz"), Some(Suffix::Xyz));
        assert_eq!(Suffix::of("example.app"), Some(Suffix::App));

        assert_eq!(Suffix::of("example.org"), None);
        assert_eq!(Suffix::of("example.com.br"), None);
        // Literal match only; normalization is the validator's job
        assert_eq!(Suffix::of("EXAMPLE.COM"), None);
    }

    #[test]
    fn test_suffix_rank_ordering() {
        assert!(Suffix::Com.rank() < Suffix::App.rank());
        assert!(Suffix::App.rank() < Suffix::Xyz.rank());

        // Derived Ord agrees with rank()
        assert!(Suffix::Com < Suffix::App);
        assert!(Suffix::App < Suffix::Xyz);
    }

    #[test]
    fn test_suffix_display() {
        assert_eq!(Suffix::Com.to_string(), ".com");
        assert_eq!(Suffix::App.to_string(), ".app");
        assert_eq!(Suffix::Xyz.to_string(), ".xyz");
    }

    #[test]
    fn test_domain_freezes_availability() {
        let domain = Domain::new("example.com", true);
        assert_eq!(domain.name, "example.com");
        assert!(domain.is_available);
        assert_eq!(domain.suffix(), Some(Suffix::Com));
    }

    #[test]
    fn test_domain_serializes_camel_case() {
        let domain = Domain::new("example.app", false);
        let json = serde_json::to_value(&domain).unwrap();
        assert_eq!(json["name"], "example.app");
        assert_eq!(json["isAvailable"], false);
        assert!(json["addedAt"].is_string());
    }
}
