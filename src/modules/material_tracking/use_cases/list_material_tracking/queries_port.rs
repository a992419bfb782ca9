use crate::modules::material_tracking::use_cases::list_material_tracking::projection::{
    OrderedMaterialView, StatusCounts,
};
use crate::modules::material_tracking::use_cases::list_material_tracking::query::{
    TrackingFilter, TrackingSort,
};
use async_trait::async_trait;

#[async_trait]
pub trait TrackingQueries {
    async fn list(
        &self,
        filter: &TrackingFilter,
        sort: TrackingSort,
    ) -> anyhow::Result<Vec<OrderedMaterialView>>;

    async fn aggregate(&self) -> anyhow::Result<StatusCounts>;
}
