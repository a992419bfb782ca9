use crate::modules::material_tracking::adapters::outbound::order_store::OrderStore;
use crate::modules::material_tracking::core::order::PurchaseOrder;
use crate::modules::material_tracking::core::status::OrderStatus;
use crate::modules::material_tracking::use_cases::list_material_tracking::projection::{
    OrderedMaterialView, StatusCounts, aggregate, project,
};
use crate::modules::material_tracking::use_cases::list_material_tracking::queries_port::TrackingQueries;
use crate::modules::material_tracking::use_cases::list_material_tracking::query::{
    TrackingFilter, TrackingSort,
};
use async_trait::async_trait;
use std::sync::Arc;

/// Re-reads every non-cancelled order from the store on each call.
pub struct TrackingProjection<TStore>
where
    TStore: OrderStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> TrackingProjection<TStore>
where
    TStore: OrderStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    async fn active_orders(&self) -> anyhow::Result<Vec<PurchaseOrder>> {
        Ok(self.store.list_excluding(OrderStatus::Cancelled).await?)
    }
}

#[async_trait]
impl<TStore> TrackingQueries for TrackingProjection<TStore>
where
    TStore: OrderStore + Send + Sync + 'static,
{
    async fn list(
        &self,
        filter: &TrackingFilter,
        sort: TrackingSort,
    ) -> anyhow::Result<Vec<OrderedMaterialView>> {
        let orders = self.active_orders().await?;
        Ok(project(&orders, filter, sort))
    }

    async fn aggregate(&self) -> anyhow::Result<StatusCounts> {
        let orders = self.active_orders().await?;
        Ok(aggregate(&orders))
    }
}

#[cfg(test)]
mod tracking_projection_handler_tests {
    use super::*;
    use crate::modules::material_tracking::adapters::outbound::order_store_in_memory::InMemoryOrderStore;
    use crate::modules::material_tracking::core::status::MaterialStatus;
    use crate::tests::fixtures::orders::{PurchaseOrderBuilder, material, order_a, order_b};
    use rstest::rstest;

    async fn seeded_store() -> InMemoryOrderStore {
        let store = InMemoryOrderStore::new();
        store.insert(order_a()).await.unwrap();
        store.insert(order_b()).await.unwrap();
        store
            .insert(
                PurchaseOrderBuilder::new()
                    .order_id("ord-cancelled")
                    .status(OrderStatus::Cancelled)
                    .materials(vec![material("Pasir", MaterialStatus::Pending, 500)])
                    .build(),
            )
            .await
            .unwrap();
        store
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_exclude_cancelled_orders_from_list_and_counts() {
        let projection = TrackingProjection::new(Arc::new(seeded_store().await));

        let views = projection
            .list(&TrackingFilter::default(), TrackingSort::default())
            .await
            .unwrap();
        assert!(views.iter().all(|v| v.order_id != "ord-cancelled"));

        let counts = projection.aggregate().await.unwrap();
        assert_eq!(counts.total, 3);
        assert_eq!(counts.pending, 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_when_the_store_is_offline() {
        let mut store = seeded_store().await;
        store.toggle_offline();
        let projection = TrackingProjection::new(Arc::new(store));
        assert!(projection.aggregate().await.is_err());
        assert!(
            projection
                .list(&TrackingFilter::default(), TrackingSort::default())
                .await
                .is_err()
        );
    }
}
