use async_graphql::{Context, Enum, Object, Result as GqlResult, SimpleObject};
use std::num::TryFromIntError;

use crate::modules::material_tracking::adapters::inbound::graphql::{GqlMaterial, GqlMaterialStatus};
use crate::modules::material_tracking::use_cases::list_material_tracking::projection::{
    OrderedMaterialView, StatusCounts, TrackedMaterial,
};
use crate::modules::material_tracking::use_cases::list_material_tracking::query::{
    SortBy, SortOrder, TrackingFilter, TrackingSort,
};
use crate::shell::state::AppState;

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
#[graphql(name = "SortBy")]
pub enum GqlSortBy {
    Date,
    Status,
}

impl From<GqlSortBy> for SortBy {
    fn from(v: GqlSortBy) -> Self {
        match v {
            GqlSortBy::Date => SortBy::Date,
            GqlSortBy::Status => SortBy::Status,
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
#[graphql(name = "SortOrder")]
pub enum GqlSortOrder {
    Asc,
    Desc,
}

impl From<GqlSortOrder> for SortOrder {
    fn from(v: GqlSortOrder) -> Self {
        match v {
            GqlSortOrder::Asc => SortOrder::Asc,
            GqlSortOrder::Desc => SortOrder::Desc,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(name = "TrackedMaterial")]
pub struct GqlTrackedMaterial {
    pub selection_key: String,
    pub material_index: u32,
    pub material: GqlMaterial,
}

impl TryFrom<TrackedMaterial> for GqlTrackedMaterial {
    type Error = TryFromIntError;

    fn try_from(v: TrackedMaterial) -> Result<Self, Self::Error> {
        Ok(Self {
            selection_key: v.selection_key,
            material_index: u32::try_from(v.material_index)?,
            material: v.material.into(),
        })
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(name = "OrderedMaterialView")]
pub struct GqlOrderedMaterialView {
    pub order_id: String,
    pub customer_name: String,
    pub house_name: String,
    pub purchased_at: i64,
    pub total_amount: f64,
    pub materials: Vec<GqlTrackedMaterial>,
}

impl TryFrom<OrderedMaterialView> for GqlOrderedMaterialView {
    type Error = TryFromIntError;

    fn try_from(v: OrderedMaterialView) -> Result<Self, Self::Error> {
        Ok(Self {
            order_id: v.order_id,
            customer_name: v.customer_name,
            house_name: v.house_name,
            purchased_at: v.purchased_at,
            total_amount: v.total_amount,
            materials: v
                .materials
                .into_iter()
                .map(TryInto::try_into)
                .collect::<Result<_, _>>()?,
        })
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(name = "StatusCounts")]
pub struct GqlStatusCounts {
    pub total: u64,
    pub pending: u64,
    pub processing: u64,
    pub shipped: u64,
    pub delivered: u64,
}

impl TryFrom<StatusCounts> for GqlStatusCounts {
    type Error = TryFromIntError;

    fn try_from(v: StatusCounts) -> Result<Self, Self::Error> {
        Ok(Self {
            total: u64::try_from(v.total)?,
            pending: u64::try_from(v.pending)?,
            processing: u64::try_from(v.processing)?,
            shipped: u64::try_from(v.shipped)?,
            delivered: u64::try_from(v.delivered)?,
        })
    }
}

#[derive(Default)]
pub struct TrackingQuery;

#[Object]
impl TrackingQuery {
    async fn material_tracking(
        &self,
        context: &Context<'_>,
        search: Option<String>,
        status: Option<GqlMaterialStatus>,
        sort_by: Option<GqlSortBy>,
        order: Option<GqlSortOrder>,
    ) -> GqlResult<Vec<GqlOrderedMaterialView>> {
        let state = context.data_unchecked::<AppState>();
        let filter = TrackingFilter {
            search_text: search,
            status: status.map(Into::into),
        };
        let sort = TrackingSort {
            by: sort_by.map(Into::into).unwrap_or_default(),
            order: order.map(Into::into).unwrap_or_default(),
        };
        let views = state.queries.list(&filter, sort).await?;
        let views = views
            .into_iter()
            .map(GqlOrderedMaterialView::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(views)
    }

    async fn material_tracking_stats(&self, context: &Context<'_>) -> GqlResult<GqlStatusCounts> {
        let state = context.data_unchecked::<AppState>();
        Ok(GqlStatusCounts::try_from(state.queries.aggregate().await?)?)
    }
}
