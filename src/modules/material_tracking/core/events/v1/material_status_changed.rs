// Event payload: MaterialStatusChangedV1.
//
// Records that one material of one order moved to a new status. Emitted once per
// successful transition and published through the domain outbox.

use crate::modules::material_tracking::core::status::MaterialStatus;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct MaterialStatusChangedV1 {
    pub event_id: String,
    pub order_id: String,
    pub material_index: usize,
    pub status: MaterialStatus,
    pub previous_status: MaterialStatus,
    pub occurred_at: i64,
}
