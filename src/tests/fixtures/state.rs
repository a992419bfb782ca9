use crate::modules::material_tracking::adapters::outbound::order_store_in_memory::InMemoryOrderStore;
use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
use crate::shell::state::AppState;
use crate::tests::fixtures::orders::{order_a, order_b};
use std::sync::Arc;

pub const TEST_TOPIC: &str = "material-tracking";

pub fn make_test_state() -> AppState {
    AppState::in_memory(
        Arc::new(InMemoryOrderStore::new()),
        Arc::new(InMemoryDomainOutbox::new()),
        TEST_TOPIC,
    )
}

pub fn make_offline_store_state() -> AppState {
    let mut store = InMemoryOrderStore::new();
    store.toggle_offline();
    AppState::in_memory(
        Arc::new(store),
        Arc::new(InMemoryDomainOutbox::new()),
        TEST_TOPIC,
    )
}

/// State holding orders A and B.
pub async fn make_seeded_state() -> AppState {
    let state = make_test_state();
    state.store.insert(order_a()).await.unwrap();
    state.store.insert(order_b()).await.unwrap();
    state
}
