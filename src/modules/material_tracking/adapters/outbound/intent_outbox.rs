use crate::modules::material_tracking::core::intents::TrackingIntent;
use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxError, OutboxRow};

/// Translate a list of domain intents into outbox rows and enqueue them.
/// Rows are keyed by event id, so re-dispatching the same intent is rejected.
pub async fn dispatch_intents(
    outbox: &impl DomainOutbox,
    topic: &str,
    intents: Vec<TrackingIntent>,
) -> Result<(), OutboxError> {
    for intent in intents {
        match intent {
            TrackingIntent::PublishMaterialStatusChanged { payload } => {
                let json = serde_json::to_value(&payload)
                    .map_err(|e| OutboxError::Validation(e.to_string()))?;
                outbox
                    .enqueue(OutboxRow {
                        topic: topic.to_string(),
                        event_type: "MaterialStatusChanged".to_string(),
                        event_version: 1,
                        event_id: payload.event_id,
                        stream_id: payload.order_id,
                        occurred_at: payload.occurred_at,
                        payload: json,
                    })
                    .await?;
            }
        }
    }
    Ok(())
}
