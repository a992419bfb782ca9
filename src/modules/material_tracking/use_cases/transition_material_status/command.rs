use crate::modules::material_tracking::core::status::MaterialStatus;

/// Move one material of one order to `status`.
///
/// `requested_at` becomes the material's new last-updated timestamp and
/// `event_id` identifies the resulting change event; both are stamped at the
/// edge so the decider stays pure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionMaterialStatus {
    pub order_id: String,
    pub material_index: usize,
    pub status: MaterialStatus,
    pub requested_at: i64,
    pub event_id: String,
}
