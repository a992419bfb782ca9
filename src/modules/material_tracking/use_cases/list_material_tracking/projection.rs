// Read-side view over purchase orders. Derived on every call, never stored.

use crate::modules::material_tracking::core::order::{MaterialRecord, PurchaseOrder};
use crate::modules::material_tracking::core::selection_key::SelectionKey;
use crate::modules::material_tracking::core::status::MaterialStatus;
use crate::modules::material_tracking::use_cases::list_material_tracking::query::{
    SortBy, SortOrder, TrackingFilter, TrackingSort,
};
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackedMaterial {
    pub selection_key: String,
    pub material_index: usize,
    #[serde(flatten)]
    pub material: MaterialRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderedMaterialView {
    pub order_id: String,
    pub customer_name: String,
    pub house_name: String,
    pub purchased_at: i64,
    pub total_amount: f64,
    pub materials: Vec<TrackedMaterial>,
}

impl OrderedMaterialView {
    /// Most recent `updated_at` of the order. Independent of sort direction,
    /// so a descending list is the exact reverse of an ascending one.
    fn last_touched_at(&self) -> i64 {
        self.materials
            .iter()
            .map(|m| m.material.updated_at)
            .max()
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub total: usize,
    pub pending: usize,
    pub processing: usize,
    pub shipped: usize,
    pub delivered: usize,
}

impl StatusCounts {
    fn add(mut self, status: MaterialStatus) -> Self {
        self.total += 1;
        match status {
            MaterialStatus::Pending => self.pending += 1,
            MaterialStatus::Processing => self.processing += 1,
            MaterialStatus::Shipped => self.shipped += 1,
            MaterialStatus::Delivered => self.delivered += 1,
        }
        self
    }
}

fn to_view(order: &PurchaseOrder) -> OrderedMaterialView {
    OrderedMaterialView {
        order_id: order.order_id.clone(),
        customer_name: order.customer_name.clone(),
        house_name: order.house_name.clone(),
        purchased_at: order.purchased_at,
        total_amount: order.total_amount,
        materials: order
            .materials
            .iter()
            .enumerate()
            .map(|(index, material)| TrackedMaterial {
                selection_key: SelectionKey::new(order.order_id.as_str(), index).to_string(),
                material_index: index,
                material: material.clone(),
            })
            .collect(),
    }
}

fn compare_materials(by: SortBy, a: &TrackedMaterial, b: &TrackedMaterial) -> Ordering {
    let key = match by {
        SortBy::Date => a.material.updated_at.cmp(&b.material.updated_at),
        SortBy::Status => a.material.status.rank().cmp(&b.material.status.rank()),
    };
    key.then(a.material_index.cmp(&b.material_index))
}

fn directed(order: SortOrder, ordering: Ordering) -> Ordering {
    match order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}

/// Filters and sorts the given orders. Callers pass orders that are already
/// free of cancelled ones. Orders without materials are left out.
pub fn project(
    orders: &[PurchaseOrder],
    filter: &TrackingFilter,
    sort: TrackingSort,
) -> Vec<OrderedMaterialView> {
    let mut views: Vec<OrderedMaterialView> = orders
        .iter()
        .filter(|order| !order.materials.is_empty() && filter.matches(order))
        .map(to_view)
        .collect();

    for view in &mut views {
        view.materials
            .sort_by(|a, b| directed(sort.order, compare_materials(sort.by, a, b)));
    }
    views.sort_by(|a, b| {
        let ordering = a
            .last_touched_at()
            .cmp(&b.last_touched_at())
            .then_with(|| a.order_id.cmp(&b.order_id));
        directed(sort.order, ordering)
    });
    views
}

/// Counts every material of every given order by status.
pub fn aggregate(orders: &[PurchaseOrder]) -> StatusCounts {
    orders
        .iter()
        .flat_map(|order| order.materials.iter())
        .fold(StatusCounts::default(), |counts, m| counts.add(m.status))
}
