use crate::modules::material_tracking::adapters::outbound::order_store_in_memory::InMemoryOrderStore;
use crate::modules::material_tracking::core::order::PurchaseOrder;
use anyhow::Context;
use std::path::Path;

/// Loads a JSON array of purchase orders into the store and returns how many
/// were inserted.
pub async fn load_seed(path: &Path, store: &InMemoryOrderStore) -> anyhow::Result<usize> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading seed file {}", path.display()))?;
    let orders: Vec<PurchaseOrder> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing seed file {}", path.display()))?;
    let count = orders.len();
    for order in orders {
        store.insert(order).await?;
    }
    Ok(count)
}
