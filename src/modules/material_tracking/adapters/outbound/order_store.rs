// Ports for the document store that holds purchase orders.
//
// Purpose
// - OrderStore: read-by-id, whole-array material replacement, and listing by
//   order-level status exclusion.
// - OrderChangeFeed: per-order stream of full-document snapshots.
//
// Boundaries
// - The store has no partial-array update. Writers replace the entire
//   material list they last read, so concurrent writers to one order race.

use crate::modules::material_tracking::core::order::{MaterialRecord, PurchaseOrder};
use crate::modules::material_tracking::core::status::OrderStatus;
use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc::UnboundedReceiver;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderStoreError {
    #[error("order {0} not found")]
    NotFound(String),

    #[error("backend error: {0}")]
    Backend(String),
}

/// Full document as observed by a change feed subscriber.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderSnapshot {
    Missing,
    Present(PurchaseOrder),
}

#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn ping(&self) -> Result<(), OrderStoreError>;

    async fn load(&self, order_id: &str) -> Result<Option<PurchaseOrder>, OrderStoreError>;

    async fn replace_materials(
        &self,
        order_id: &str,
        materials: Vec<MaterialRecord>,
    ) -> Result<(), OrderStoreError>;

    async fn list_excluding(&self, status: OrderStatus)
    -> Result<Vec<PurchaseOrder>, OrderStoreError>;
}

#[async_trait]
pub trait OrderChangeFeed: Send + Sync {
    /// Yields the current snapshot immediately, then one snapshot per committed
    /// write to the order, in commit order. Dropping the receiver ends the watch.
    async fn watch(
        &self,
        order_id: &str,
    ) -> Result<UnboundedReceiver<OrderSnapshot>, OrderStoreError>;
}
