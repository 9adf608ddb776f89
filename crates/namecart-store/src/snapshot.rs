//! # Cart Snapshot
//!
//! The serialized view of store state handed to the host UI layer.
//!
//! ## Snapshot Contents
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        CartSnapshot                                     │
//! │                                                                         │
//! │  domains          ── the cart entries, display order                   │
//! │  input            ── in-progress input text the store holds            │
//! │  pending_error    ── the single active user-visible message, if any    │
//! │  required_count   ── target cart size (host configuration, echoed)     │
//! │  purchase_enabled ── count matches the target                          │
//! │  purchase_ready   ── count matches AND every entry is available        │
//! │                                                                         │
//! │  purchase_enabled and purchase_ready deliberately diverge when the     │
//! │  cart is full but holds an unavailable name: enabling a button and     │
//! │  committing a checkout are separate policies. Hosts choose which       │
//! │  gate to wire where.                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use namecart_core::{Cart, Domain};

use crate::config::StoreConfig;

/// Immutable snapshot of store state, published after every mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    /// Cart entries in display order.
    pub domains: Vec<Domain>,

    /// The in-progress input text.
    pub input: String,

    /// The single active user-visible error message, if any.
    pub pending_error: Option<String>,

    /// Target cart size, echoed from configuration.
    pub required_count: usize,

    /// The count gate: the cart holds exactly the target number of names.
    /// Suited to a button's disabled state.
    pub purchase_enabled: bool,

    /// The full purchase gate: count equals target and every entry is
    /// available.
    pub purchase_ready: bool,
}

impl CartSnapshot {
    /// Captures the current store state.
    pub(crate) fn capture(
        cart: &Cart,
        input: &str,
        pending_error: Option<&String>,
        config: &StoreConfig,
    ) -> Self {
        let purchase_enabled = cart.len() == config.required_count;
        CartSnapshot {
            domains: cart.entries().to_vec(),
            input: input.to_string(),
            pending_error: pending_error.cloned(),
            required_count: config.required_count,
            purchase_enabled,
            purchase_ready: purchase_enabled && cart.all_available(),
        }
    }

    /// How many more names the user needs to reach the target. Zero when
    /// the cart is at or over the target.
    pub fn remaining(&self) -> usize {
        self.required_count.saturating_sub(self.domains.len())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
