// In memory implementation of the OrderStore and OrderChangeFeed ports.
//
// Purpose
// - Support handler tests and local development without a hosted document store.
//
// Responsibilities
// - Store purchase orders keyed by id.
// - Replace an order's whole material list on write, with no version check.
// - Push a full snapshot to every watcher of an order after each committed write.

use crate::modules::material_tracking::adapters::outbound::order_store::{
    OrderChangeFeed, OrderSnapshot, OrderStore, OrderStoreError,
};
use crate::modules::material_tracking::core::order::{MaterialRecord, PurchaseOrder};
use crate::modules::material_tracking::core::status::OrderStatus;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

#[derive(Default)]
struct Documents {
    orders: HashMap<String, PurchaseOrder>,
    watchers: HashMap<String, Vec<UnboundedSender<OrderSnapshot>>>,
}

impl Documents {
    fn snapshot(&self, order_id: &str) -> OrderSnapshot {
        match self.orders.get(order_id) {
            Some(order) => OrderSnapshot::Present(order.clone()),
            None => OrderSnapshot::Missing,
        }
    }

    // Runs under the write lock, so watchers observe writes in commit order.
    fn notify(&mut self, order_id: &str) {
        let snapshot = self.snapshot(order_id);
        if let Some(watchers) = self.watchers.get_mut(order_id) {
            watchers.retain(|tx| tx.send(snapshot.clone()).is_ok());
            if watchers.is_empty() {
                self.watchers.remove(order_id);
            }
        }
    }
}

#[derive(Default)]
pub struct InMemoryOrderStore {
    documents: RwLock<Documents>,
    is_offline: bool,
    delay_replace_ms: AtomicU64,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Delay applied before each material write commits. Lets tests widen the
    /// window between a writer's read and its write.
    pub fn set_delay_replace_ms(&self, ms: u64) {
        self.delay_replace_ms.store(ms, Ordering::Relaxed);
    }

    /// Creates or overwrites a whole order document.
    pub async fn insert(&self, order: PurchaseOrder) -> Result<(), OrderStoreError> {
        self.ensure_online()?;
        let mut documents = self.documents.write().await;
        let order_id = order.order_id.clone();
        documents.orders.insert(order_id.clone(), order);
        documents.notify(&order_id);
        Ok(())
    }

    pub async fn watcher_count(&self, order_id: &str) -> usize {
        self.documents
            .read()
            .await
            .watchers
            .get(order_id)
            .map(|watchers| watchers.iter().filter(|tx| !tx.is_closed()).count())
            .unwrap_or(0)
    }

    fn ensure_online(&self) -> Result<(), OrderStoreError> {
        if self.is_offline {
            return Err(OrderStoreError::Backend("Order store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn ping(&self) -> Result<(), OrderStoreError> {
        self.ensure_online()
    }

    async fn load(&self, order_id: &str) -> Result<Option<PurchaseOrder>, OrderStoreError> {
        self.ensure_online()?;
        Ok(self.documents.read().await.orders.get(order_id).cloned())
    }

    async fn replace_materials(
        &self,
        order_id: &str,
        materials: Vec<MaterialRecord>,
    ) -> Result<(), OrderStoreError> {
        self.ensure_online()?;
        let delay = self.delay_replace_ms.load(Ordering::Relaxed);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        let mut documents = self.documents.write().await;
        let order = documents
            .orders
            .get_mut(order_id)
            .ok_or_else(|| OrderStoreError::NotFound(order_id.to_string()))?;
        order.materials = materials;
        documents.notify(order_id);
        Ok(())
    }

    async fn list_excluding(
        &self,
        status: OrderStatus,
    ) -> Result<Vec<PurchaseOrder>, OrderStoreError> {
        self.ensure_online()?;
        Ok(self
            .documents
            .read()
            .await
            .orders
            .values()
            .filter(|order| order.status != status)
            .cloned()
            .collect())
    }
}

#[async_trait::async_trait]
impl OrderChangeFeed for InMemoryOrderStore {
    async fn watch(
        &self,
        order_id: &str,
    ) -> Result<UnboundedReceiver<OrderSnapshot>, OrderStoreError> {
        self.ensure_online()?;
        let mut documents = self.documents.write().await;
        let (tx, rx) = mpsc::unbounded_channel();
        // The receiver is held right here, so the initial send cannot fail.
        let _ = tx.send(documents.snapshot(order_id));
        let watchers = documents.watchers.entry(order_id.to_string()).or_default();
        // Watchers of an order that is never written are otherwise kept forever.
        watchers.retain(|tx| !tx.is_closed());
        watchers.push(tx);
        Ok(rx)
    }
}
