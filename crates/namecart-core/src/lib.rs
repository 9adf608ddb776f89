//! # namecart-core: Pure Domain Logic for NameCart
//!
//! This crate is the **heart** of NameCart. It contains the cart algebra and
//! the domain-selection rules as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        NameCart Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     Host UI (out of scope)                      │   │
//! │  │    Input field ──► Cart list ──► Bulk buttons ──► Purchase     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ snapshots / events                     │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    namecart-store                               │   │
//! │  │    CartStore, AvailabilityOracle, CartEventEmitter             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ namecart-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   cart    │  │validation │  │   error   │  │   │
//! │  │   │  Suffix   │  │   Cart    │  │  format   │  │  typed    │  │   │
//! │  │   │  Domain   │  │  ranking  │  │  checks   │  │  errors   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO ORACLE • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Suffix, Domain)
//! - [`cart`] - The Cart collection and the ranking algorithm
//! - [`validation`] - Candidate name format validation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, and oracle access is FORBIDDEN here
//! 3. **Frozen Availability**: An entry's availability is fixed when it enters
//!    the cart; rechecking would replace the entry, never mutate it
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use namecart_core::cart::Cart;
//! use namecart_core::types::Domain;
//! use namecart_core::validation::validate_domain_name;
//!
//! // Validate and normalize a candidate name
//! let name = validate_domain_name("  Example.COM ").unwrap();
//! assert_eq!(name, "example.com");
//!
//! // Assemble a cart and auto-select the best two names
//! let mut cart = Cart::new();
//! cart.insert(Domain::new(name, true)).unwrap();
//! cart.insert(Domain::new("fallback.xyz", true)).unwrap();
//! cart.insert(Domain::new("backup.app", true)).unwrap();
//! cart.rank_and_truncate(2);
//!
//! // .com beats .app beats .xyz
//! assert_eq!(cart.entries()[0].name, "example.com");
//! assert_eq!(cart.entries()[1].name, "backup.app");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use namecart_core::Cart` instead of
// `use namecart_core::cart::Cart`

pub use cart::Cart;
pub use error::{CoreError, CoreResult, ValidationError};
pub use types::{Domain, Suffix};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default number of domain names a cart is assembled toward.
///
/// The required count is host-supplied configuration; this default exists so
/// `StoreConfig::default()` and tests agree on a value. The cart itself never
/// reads it - `rank_and_truncate` takes the count as a parameter.
pub const DEFAULT_REQUIRED_COUNT: usize = 3;
