//! # Cart Store
//!
//! The stateful container a host UI drives. Owns the cart exclusively,
//! serializes every mutation, and publishes snapshots.
//!
//! ## Add Attempt State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      One add() Attempt                                  │
//! │                                                                         │
//! │   Idle ──► Validating ──┬──► Rejected (invalid / duplicate / full)     │
//! │                         │         pending error set, cart unchanged    │
//! │                         │                                               │
//! │                         └──► Checking (oracle await, lock released)    │
//! │                                   │                                     │
//! │                   ┌───────────────┼────────────────┐                   │
//! │                   ▼               ▼                ▼                    │
//! │               Added         Discarded          Rejected                 │
//! │          entry appended,   store closed     a concurrent add            │
//! │          error + input     mid-flight,      appended the same           │
//! │          cleared, event    nothing is       name first                  │
//! │          emitted           mutated                                      │
//! │                                                                         │
//! │   No retries, no timeout: a stalled oracle leaves the attempt in       │
//! │   Checking indefinitely.                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! State sits behind a single `std::sync::Mutex`; the oracle await is the
//! only suspension point and runs with the lock released. Concurrent add
//! calls therefore proceed independently and append in resolution order,
//! not call order. The append path re-checks the duplicate invariant under
//! the lock, so two in-flight adds of the same name cannot both land.

use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::watch;
use tracing::{debug, info, warn};

use namecart_core::{validation::validate_domain_name, Cart, CoreError, Domain};

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::events::{CartEventEmitter, NoOpEmitter};
use crate::oracle::AvailabilityOracle;
use crate::snapshot::CartSnapshot;

// =============================================================================
// Add Outcome
// =============================================================================

/// Result of a completed `add` attempt.
///
/// Rejections are outcomes, not errors: the cart is unchanged and the
/// reason is surfaced through the pending error message. Only oracle
/// failures and a closed store produce `Err` (see
/// [`crate::error::StoreError`]).
#[derive(Debug, Clone)]
pub enum AddOutcome {
    /// The name was appended to the cart with this entry.
    Added(Domain),

    /// The input failed format validation; pending error set.
    RejectedInvalidFormat,

    /// The cart already holds the name; pending error set. The oracle is
    /// not queried for duplicates.
    RejectedDuplicate,

    /// The hard cap is enabled and the cart is at the required count;
    /// pending error set.
    RejectedCartFull,
}

impl AddOutcome {
    /// True if the attempt appended an entry.
    pub fn is_added(&self) -> bool {
        matches!(self, AddOutcome::Added(_))
    }
}

// =============================================================================
// Store Internals
// =============================================================================

/// Mutable state behind the store mutex.
#[derive(Debug)]
struct StoreInner {
    /// The cart. Owned exclusively; the view layer only ever sees clones
    /// inside snapshots.
    cart: Cart,

    /// In-progress input text, cleared when an add resolves successfully.
    input: String,

    /// The single active user-visible error message.
    pending_error: Option<String>,

    /// Set by `close()`; once true, every mutation (including late oracle
    /// resolutions) is refused.
    closed: bool,
}

// =============================================================================
// Cart Store
// =============================================================================

/// The cart state container.
///
/// Hosts hold it in an `Arc`, drive it with the operations below, and
/// observe it through [`CartStore::snapshot`] / [`CartStore::subscribe`].
pub struct CartStore {
    /// Immutable host-supplied configuration.
    config: StoreConfig,

    /// The external availability capability.
    oracle: Arc<dyn AvailabilityOracle>,

    /// Toast notification seam.
    emitter: Arc<dyn CartEventEmitter>,

    /// All mutable state, mutex-serialized.
    inner: Mutex<StoreInner>,

    /// Snapshot publication channel; `subscribe()` hands out receivers.
    snapshot_tx: watch::Sender<CartSnapshot>,
}

impl CartStore {
    /// Creates a store with no event emitter.
    pub fn new(config: StoreConfig, oracle: Arc<dyn AvailabilityOracle>) -> StoreResult<Self> {
        Self::with_emitter(config, oracle, Arc::new(NoOpEmitter))
    }

    /// Creates a store with a custom event emitter.
    pub fn with_emitter(
        config: StoreConfig,
        oracle: Arc<dyn AvailabilityOracle>,
        emitter: Arc<dyn CartEventEmitter>,
    ) -> StoreResult<Self> {
        config.validate()?;

        let inner = StoreInner {
            cart: Cart::new(),
            input: String::new(),
            pending_error: None,
            closed: false,
        };
        let initial = CartSnapshot::capture(&inner.cart, &inner.input, None, &config);
        let (snapshot_tx, _) = watch::channel(initial);

        Ok(CartStore {
            config,
            oracle,
            emitter,
            inner: Mutex::new(inner),
            snapshot_tx,
        })
    }

    // -------------------------------------------------------------------------
    // Input & Add
    // -------------------------------------------------------------------------

    /// Records the in-progress input text on behalf of the view.
    ///
    /// An explicit edit also clears the pending error: the user is typing a
    /// new attempt, the old message no longer applies.
    pub fn set_input(&self, text: &str) -> StoreResult<()> {
        let mut inner = self.checked_lock()?;
        inner.input = text.to_string();
        inner.pending_error = None;
        self.publish(&inner);
        Ok(())
    }

    /// Validates `raw`, checks it against the cart, asks the oracle, and
    /// appends on resolution.
    ///
    /// ## Behavior
    /// 1. Validate format; on failure set the pending error and return
    ///    [`AddOutcome::RejectedInvalidFormat`]
    /// 2. Reject names already in the cart (case-insensitive) without
    ///    querying the oracle
    /// 3. With the hard cap enabled, reject once the cart holds the
    ///    required count
    /// 4. Await the oracle with the lock released, then append
    ///    `{name, availability}`, clear the pending error and the input,
    ///    emit the `domain_added` notification, and publish a snapshot
    ///
    /// The pending error is cleared at append time, not at validation time:
    /// an attempt that validates but dies in the oracle leaves the previous
    /// message standing.
    ///
    /// ## Errors
    /// - [`StoreError::Closed`] if the store is closed, before or during
    ///   the attempt (a late resolution is discarded, never applied)
    /// - [`StoreError::Oracle`] if the lookup fails; cart, input, and
    ///   pending error are untouched
    pub async fn add(&self, raw: &str) -> StoreResult<AddOutcome> {
        // Phase 1: synchronous checks under the lock
        let name = {
            let mut inner = self.checked_lock()?;

            let name = match validate_domain_name(raw) {
                Ok(name) => name,
                Err(err) => {
                    debug!(input = raw, error = %err, "add rejected: invalid format");
                    inner.pending_error = Some(err.to_string());
                    self.publish(&inner);
                    return Ok(AddOutcome::RejectedInvalidFormat);
                }
            };

            if inner.cart.contains(&name) {
                debug!(name = %name, "add rejected: duplicate");
                inner.pending_error =
                    Some(CoreError::DuplicateName { name }.to_string());
                self.publish(&inner);
                return Ok(AddOutcome::RejectedDuplicate);
            }

            if self.config.enforce_required_count
                && inner.cart.len() >= self.config.required_count
            {
                debug!(name = %name, "add rejected: cart at required count");
                inner.pending_error = Some(format!(
                    "your cart already holds {} names",
                    self.config.required_count
                ));
                self.publish(&inner);
                return Ok(AddOutcome::RejectedCartFull);
            }

            name
        };

        // Phase 2: the only suspension point; the lock is released so other
        // operations (and other add calls) proceed meanwhile
        debug!(name = %name, "checking availability");
        let is_available = self
            .oracle
            .is_domain_available(&name)
            .await
            .map_err(|source| StoreError::Oracle {
                name: name.clone(),
                source,
            })?;

        // Phase 3: apply the resolution under the lock
        let mut inner = self.lock();
        if inner.closed {
            warn!(name = %name, "discarding oracle resolution: store closed mid-flight");
            return Err(StoreError::Closed);
        }

        let domain = Domain::new(name, is_available);
        if let Err(err) = inner.cart.insert(domain.clone()) {
            // A concurrent add for the same name resolved first
            debug!(name = %domain.name, "add rejected: duplicate appended mid-flight");
            inner.pending_error = Some(err.to_string());
            self.publish(&inner);
            return Ok(AddOutcome::RejectedDuplicate);
        }

        inner.pending_error = None;
        inner.input.clear();
        self.publish(&inner);
        drop(inner);

        info!(name = %domain.name, available = domain.is_available, "domain added to cart");
        self.emitter.domain_added(&domain);
        Ok(AddOutcome::Added(domain))
    }

    // -------------------------------------------------------------------------
    // Bulk Operations
    // -------------------------------------------------------------------------

    /// Removes the entry with the matching name. No-op if absent.
    pub fn remove(&self, name: &str) -> StoreResult<()> {
        let mut inner = self.checked_lock()?;
        debug!(name = name, "remove");
        inner.cart.remove(name.trim());
        self.publish(&inner);
        Ok(())
    }

    /// Empties the cart unconditionally.
    pub fn clear(&self) -> StoreResult<()> {
        let mut inner = self.checked_lock()?;
        debug!("clear cart");
        inner.cart.clear();
        self.publish(&inner);
        Ok(())
    }

    /// Drops every entry the oracle reported taken, preserving order.
    pub fn prune_unavailable(&self) -> StoreResult<()> {
        let mut inner = self.checked_lock()?;
        let before = inner.cart.len();
        inner.cart.prune_unavailable();
        debug!(removed = before - inner.cart.len(), "pruned unavailable entries");
        self.publish(&inner);
        Ok(())
    }

    /// Auto-selects the best `required_count` names and drops the rest.
    ///
    /// Destructive: the stored order becomes the ranked order. See
    /// [`Cart::rank_and_truncate`] for the ranking keys and
    /// [`Cart::ranked`] for a non-committing preview.
    pub fn rank_and_truncate(&self, required_count: usize) -> StoreResult<()> {
        let mut inner = self.checked_lock()?;
        debug!(required_count, "rank and truncate");
        inner.cart.rank_and_truncate(required_count);
        self.publish(&inner);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Purchase Gates
    // -------------------------------------------------------------------------

    /// The count gate: the cart holds exactly the required count. Ignores
    /// availability; suited to a button's disabled state.
    pub fn purchase_enabled(&self) -> bool {
        self.with_inner(|inner| inner.cart.len() == self.config.required_count)
    }

    /// The full purchase gate: required count reached AND every entry
    /// available.
    ///
    /// The two gates are separate policies on purpose (a button's disabled
    /// state vs. a checkout-time block); both stay exposed rather than
    /// merged. See DESIGN.md.
    pub fn purchase_readiness(&self) -> bool {
        self.with_inner(|inner| {
            inner.cart.len() == self.config.required_count && inner.cart.all_available()
        })
    }

    // -------------------------------------------------------------------------
    // Observation
    // -------------------------------------------------------------------------

    /// Current state. Readable even after `close()`.
    pub fn snapshot(&self) -> CartSnapshot {
        self.snapshot_tx.borrow().clone()
    }

    /// Subscribes to snapshot publications. A snapshot is published after
    /// every mutation; the receiver always starts with the current state.
    pub fn subscribe(&self) -> watch::Receiver<CartSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// The configured target cart size.
    pub fn required_count(&self) -> usize {
        self.config.required_count
    }

    /// The store's configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Teardown
    // -------------------------------------------------------------------------

    /// Closes the store. Idempotent.
    ///
    /// Every subsequent mutation fails with [`StoreError::Closed`], and any
    /// oracle resolution still in flight is discarded instead of applied.
    /// Reads (`snapshot`, `subscribe`, the purchase gates) keep answering
    /// from the final state.
    pub fn close(&self) {
        let mut inner = self.lock();
        if !inner.closed {
            info!("cart store closed");
            inner.closed = true;
        }
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        self.inner.lock().expect("cart store mutex poisoned")
    }

    /// Locks the store, refusing mutations once closed.
    fn checked_lock(&self) -> StoreResult<MutexGuard<'_, StoreInner>> {
        let inner = self.lock();
        if inner.closed {
            return Err(StoreError::Closed);
        }
        Ok(inner)
    }

    fn with_inner<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&StoreInner) -> R,
    {
        let inner = self.lock();
        f(&inner)
    }

    fn publish(&self, inner: &StoreInner) {
        self.snapshot_tx.send_replace(CartSnapshot::capture(
            &inner.cart,
            &inner.input,
            inner.pending_error.as_ref(),
            &self.config,
        ));
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
