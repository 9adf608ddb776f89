//! # Error Types
//!
//! Domain-specific error types for namecart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  namecart-core errors (this file)                                      │
//! │  ├── CoreError        - Cart invariant violations                      │
//! │  └── ValidationError  - Domain name format failures                    │
//! │                                                                         │
//! │  namecart-store errors (separate crate)                                │
//! │  └── StoreError       - Closed store, oracle failures                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → host UI              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending input in error messages
//! 3. Errors are enum variants, never String
//! 4. Each variant's display string doubles as the user-facing message the
//!    store surfaces as its pending error

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Cart invariant errors.
///
/// These represent violations of the cart's structural rules. They are
/// recoverable: the cart is left unchanged and the message is shown to the
/// user.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The cart already holds an entry with this normalized name.
    ///
    /// ## When This Occurs
    /// - `Cart::insert` is called with a name already present
    /// - Two in-flight add attempts race on the same name and the loser's
    ///   append is rejected
    #[error("{name} is already in your cart")]
    DuplicateName { name: String },

    /// Validation error (wraps ValidationError).
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Domain name format errors.
///
/// These occur when a candidate string does not parse as a cartable domain
/// name. Checked before any availability lookup runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Input contains a protocol prefix; users paste full URLs by accident.
    #[error("enter just the domain name, without https://")]
    ContainsProtocol { input: String },

    /// Input does not end in one of the registered suffixes.
    #[error("domain must end in .com, .xyz, or .app")]
    UnsupportedSuffix { input: String },
}

impl ValidationError {
    /// The normalized input that failed validation.
    pub fn input(&self) -> &str {
        match self {
            ValidationError::ContainsProtocol { input } => input,
            ValidationError::UnsupportedSuffix { input } => input,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
