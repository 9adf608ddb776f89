//! # Cart
//!
//! The ordered, duplicate-free collection of domain names a user is
//! assembling.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cart Operations                                   │
//! │                                                                         │
//! │  User Intent              Operation               Entry List Change     │
//! │  ───────────              ─────────               ─────────────────     │
//! │                                                                         │
//! │  Add a name ─────────────► insert() ────────────► entries.push(d)      │
//! │                                                                         │
//! │  Remove one name ────────► remove() ────────────► retain(!= name)      │
//! │                                                                         │
//! │  Start over ─────────────► clear() ─────────────► entries.clear()      │
//! │                                                                         │
//! │  Drop taken names ───────► prune_unavailable() ─► retain(available)    │
//! │                                                                         │
//! │  Auto-select best set ───► rank_and_truncate() ─► sort + truncate      │
//! │                                                                         │
//! │  NOTE: insert() is the only entry point that can grow the cart, and    │
//! │        it refuses names already present. The uniqueness invariant      │
//! │        therefore holds across every operation.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, CoreResult};
use crate::types::{Domain, Suffix};

/// The domain name cart.
///
/// ## Invariants
/// - Entries are unique by normalized name (case-insensitive)
/// - Order is insertion order, except after [`Cart::rank_and_truncate`],
///   which reorders and truncates destructively
#[derive(Debug, Clone, Default)]
pub struct Cart {
    /// Entries in display order. Private: every mutation goes through the
    /// methods below so the uniqueness invariant cannot be bypassed.
    entries: Vec<Domain>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            entries: Vec::new(),
        }
    }

    /// Appends a domain to the cart.
    ///
    /// ## Behavior
    /// - Rejects the entry with [`CoreError::DuplicateName`] if the cart
    ///   already holds the name (case-insensitive)
    /// - Otherwise appends at the end (insertion order)
    pub fn insert(&mut self, domain: Domain) -> CoreResult<()> {
        if self.contains(&domain.name) {
            return Err(CoreError::DuplicateName { name: domain.name });
        }

        self.entries.push(domain);
        Ok(())
    }

    /// Checks whether a name is already in the cart, ignoring ASCII case.
    pub fn contains(&self, name: &str) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.name.eq_ignore_ascii_case(name))
    }

    /// Removes the entry with the matching name.
    ///
    /// Idempotent: removing an absent name is a no-op.
    pub fn remove(&mut self, name: &str) {
        self.entries
            .retain(|entry| !entry.name.eq_ignore_ascii_case(name));
    }

    /// Clears all entries from the cart.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Retains only entries the oracle reported available, preserving
    /// relative order.
    pub fn prune_unavailable(&mut self) {
        self.entries.retain(|entry| entry.is_available);
    }

    /// Reorders the cart to the best `required_count` names and drops the
    /// rest.
    ///
    /// ## Ranking
    /// - Primary key: suffix rank (`.com` before `.app` before `.xyz`)
    /// - Secondary key: name length, shorter first
    /// - Ties beyond these keys keep their pre-sort relative order (the
    ///   sort is stable, so repeated runs are reproducible)
    ///
    /// Truncates to `min(required_count, len)` entries. Destructive: the
    /// original insertion order is overwritten. Use [`Cart::ranked`] for a
    /// read-only projection.
    pub fn rank_and_truncate(&mut self, required_count: usize) {
        self.entries.sort_by_key(Self::selection_key);
        self.entries.truncate(required_count.min(self.entries.len()));
    }

    /// The selection a [`Cart::rank_and_truncate`] call would keep, without
    /// committing it.
    pub fn ranked(&self, required_count: usize) -> Vec<Domain> {
        let mut preview = self.entries.clone();
        preview.sort_by_key(Self::selection_key);
        preview.truncate(required_count.min(preview.len()));
        preview
    }

    /// Sort key for auto-selection. Entries constructed from unvalidated
    /// names (no registered suffix) sort last.
    fn selection_key(entry: &Domain) -> (u8, usize) {
        let suffix_rank = entry.suffix().map(|s| s.rank()).unwrap_or(u8::MAX);
        (suffix_rank, entry.name.len())
    }

    /// Entries in display order.
    pub fn entries(&self) -> &[Domain] {
        &self.entries
    }

    /// Iterates over entries in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Domain> {
        self.entries.iter()
    }

    /// Number of entries in the cart.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether every entry was reported available.
    ///
    /// True for an empty cart; the purchase gate also requires the count to
    /// match, so the vacuous case never enables a purchase.
    pub fn all_available(&self) -> bool {
        self.entries.iter().all(|entry| entry.is_available)
    }

    /// Number of entries reported available.
    pub fn available_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.is_available)
            .count()
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a Domain;
    type IntoIter = std::slice::Iter<'a, Domain>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
