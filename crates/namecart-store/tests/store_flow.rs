//! End-to-end store flows: concurrency, teardown, and the full user
//! journey from empty cart to purchase readiness.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;

use namecart_core::Domain;
use namecart_store::{
    AddOutcome, AvailabilityOracle, CartEventEmitter, CartStore, OracleError, StaticOracle,
    StoreConfig, StoreError,
};

/// Oracle that resolves after a per-name delay, for pinning down
/// resolution-order behavior.
struct DelayedOracle {
    delays: HashMap<String, Duration>,
    verdict: bool,
}

impl DelayedOracle {
    fn new(verdict: bool) -> Self {
        DelayedOracle {
            delays: HashMap::new(),
            verdict,
        }
    }

    fn with_delay(mut self, name: &str, millis: u64) -> Self {
        self.delays
            .insert(name.to_string(), Duration::from_millis(millis));
        self
    }
}

#[async_trait]
impl AvailabilityOracle for DelayedOracle {
    async fn is_domain_available(&self, name: &str) -> Result<bool, OracleError> {
        if let Some(delay) = self.delays.get(name) {
            sleep(*delay).await;
        }
        Ok(self.verdict)
    }
}

#[derive(Default)]
struct CollectingEmitter {
    events: Mutex<Vec<(String, bool)>>,
}

impl CollectingEmitter {
    fn events(&self) -> Vec<(String, bool)> {
        self.events.lock().unwrap().clone()
    }
}

impl CartEventEmitter for CollectingEmitter {
    fn domain_added(&self, domain: &Domain) {
        self.events
            .lock()
            .unwrap()
            .push((domain.name.clone(), domain.is_available));
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn config(required_count: usize) -> StoreConfig {
    StoreConfig {
        required_count,
        ..Default::default()
    }
}

fn names(store: &CartStore) -> Vec<String> {
    store
        .snapshot()
        .domains
        .iter()
        .map(|d| d.name.clone())
        .collect()
}

#[tokio::test]
async fn concurrent_adds_append_in_resolution_order() {
    init_tracing();

    // slow.com is asked first but resolves last; the cart reflects
    // resolution order, not call order
    let oracle = DelayedOracle::new(true)
        .with_delay("slow.com", 120)
        .with_delay("fast.xyz", 10);
    let store = CartStore::new(config(2), Arc::new(oracle)).unwrap();

    let (slow, fast) = tokio::join!(store.add("slow.com"), store.add("fast.xyz"));

    assert!(slow.unwrap().is_added());
    assert!(fast.unwrap().is_added());
    assert_eq!(names(&store), ["fast.xyz", "slow.com"]);
}

#[tokio::test]
async fn same_name_concurrent_adds_keep_cart_unique() {
    init_tracing();

    // Both attempts pass the pre-oracle duplicate check; the append-time
    // re-check lets exactly one land
    let oracle = DelayedOracle::new(true).with_delay("dup.com", 20);
    let store = CartStore::new(config(2), Arc::new(oracle)).unwrap();

    let (first, second) = tokio::join!(store.add("dup.com"), store.add("dup.com"));
    let outcomes = [first.unwrap(), second.unwrap()];

    let added = outcomes.iter().filter(|o| o.is_added()).count();
    let rejected = outcomes
        .iter()
        .filter(|o| matches!(o, AddOutcome::RejectedDuplicate))
        .count();

    assert_eq!(added, 1);
    assert_eq!(rejected, 1);
    assert_eq!(names(&store), ["dup.com"]);
}

#[tokio::test]
async fn close_discards_in_flight_resolution() {
    init_tracing();

    let oracle = DelayedOracle::new(true).with_delay("slow.com", 150);
    let emitter = Arc::new(CollectingEmitter::default());
    let store = Arc::new(
        CartStore::with_emitter(config(1), Arc::new(oracle), emitter.clone()).unwrap(),
    );

    let pending = {
        let store = store.clone();
        tokio::spawn(async move { store.add("slow.com").await })
    };

    // Let the attempt reach the oracle, then tear the store down
    sleep(Duration::from_millis(30)).await;
    store.close();

    let result = pending.await.unwrap();
    assert!(matches!(result, Err(StoreError::Closed)));

    // The late resolution mutated nothing and emitted nothing
    assert!(store.snapshot().domains.is_empty());
    assert!(emitter.events().is_empty());
}

#[tokio::test]
async fn full_journey_to_purchase_readiness() {
    init_tracing();

    let oracle = StaticOracle::new(true).with_verdict("taken.xyz", false);
    let emitter = Arc::new(CollectingEmitter::default());
    let store =
        CartStore::with_emitter(config(2), Arc::new(oracle), emitter.clone()).unwrap();

    // The user types and adds a few candidates; one turns out taken
    store.set_input("Shiny.COM").unwrap();
    assert!(store.add("Shiny.COM").await.unwrap().is_added());
    assert!(store.add("taken.xyz").await.unwrap().is_added());
    assert!(store.add("backup.app").await.unwrap().is_added());

    // A stray re-add of a resolved name is refused
    let outcome = store.add("shiny.com").await.unwrap();
    assert!(matches!(outcome, AddOutcome::RejectedDuplicate));

    // Over target and holding a taken name: neither gate opens
    assert!(!store.purchase_enabled());
    assert!(!store.purchase_readiness());

    // Drop the taken name, then auto-select down to the target
    store.prune_unavailable().unwrap();
    store.rank_and_truncate(store.required_count()).unwrap();

    assert_eq!(names(&store), ["shiny.com", "backup.app"]);
    assert!(store.purchase_enabled());
    assert!(store.purchase_readiness());

    // One toast per resolved add, in resolution order
    assert_eq!(
        emitter.events(),
        [
            ("shiny.com".to_string(), true),
            ("taken.xyz".to_string(), false),
            ("backup.app".to_string(), true),
        ]
    );

    let snapshot = store.snapshot();
    assert_eq!(snapshot.remaining(), 0);
    assert_eq!(snapshot.pending_error, None);
}
