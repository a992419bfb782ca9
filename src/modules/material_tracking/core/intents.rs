use crate::modules::material_tracking::core::events::v1::material_status_changed::MaterialStatusChangedV1;

/// Domain intents produced by the decider as part of an Accepted decision.
/// The outbound intent_outbox adapter translates these into OutboxRows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackingIntent {
    PublishMaterialStatusChanged { payload: MaterialStatusChangedV1 },
}
