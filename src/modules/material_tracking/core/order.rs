// Purchase order document and its embedded material list.
//
// Boundaries
// - Framework-free, no input or output.
// - All i64 timestamps are epoch milliseconds.
// - A material's position in `materials` is its identity within the order and
//   must stay stable for the lifetime of the order.

use crate::modules::material_tracking::core::status::{MaterialStatus, OrderStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRecord {
    pub name: String,
    pub status: MaterialStatus,
    pub quantity: f64,
    pub unit: String,
    #[serde(default)]
    pub estimated_arrival: Option<NaiveDate>,
    #[serde(default)]
    pub notes: Option<String>,
    pub updated_at: i64,
}

impl MaterialRecord {
    /// Copy of this record with status and last-updated rewritten together.
    pub fn with_status(&self, status: MaterialStatus, updated_at: i64) -> Self {
        Self {
            status,
            updated_at,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub order_id: String,
    pub customer_name: String,
    pub house_name: String,
    pub status: OrderStatus,
    pub purchased_at: i64,
    pub total_amount: f64,
    #[serde(default)]
    pub materials: Vec<MaterialRecord>,
}

impl PurchaseOrder {
    pub fn is_cancelled(&self) -> bool {
        self.status == OrderStatus::Cancelled
    }
}
