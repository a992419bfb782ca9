use crate::modules::material_tracking::adapters::outbound::intent_outbox::dispatch_intents;
use crate::modules::material_tracking::adapters::outbound::order_store::{
    OrderStore, OrderStoreError,
};
use crate::modules::material_tracking::core::events::v1::material_status_changed::MaterialStatusChangedV1;
use crate::modules::material_tracking::core::order::MaterialRecord;
use crate::modules::material_tracking::core::status::InvalidStatus;
use crate::modules::material_tracking::use_cases::transition_material_status::command::TransitionMaterialStatus;
use crate::modules::material_tracking::use_cases::transition_material_status::decide::decide_transition;
use crate::modules::material_tracking::use_cases::transition_material_status::decision::{
    DecideError, Decision,
};
use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxError};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationError {
    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    InvalidStatus(#[from] InvalidStatus),

    #[error("order {0} is cancelled")]
    Cancelled(String),

    #[error("transport error: {0}")]
    Transport(String),
}

impl From<OrderStoreError> for ApplicationError {
    fn from(error: OrderStoreError) -> Self {
        match error {
            OrderStoreError::NotFound(_) => ApplicationError::NotFound(error.to_string()),
            OrderStoreError::Backend(message) => ApplicationError::Transport(message),
        }
    }
}

impl From<OutboxError> for ApplicationError {
    fn from(error: OutboxError) -> Self {
        ApplicationError::Transport(error.to_string())
    }
}

impl From<DecideError> for ApplicationError {
    fn from(reason: DecideError) -> Self {
        match reason {
            DecideError::MaterialNotFound { .. } => ApplicationError::NotFound(reason.to_string()),
            DecideError::Cancelled(order_id) => ApplicationError::Cancelled(order_id),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdatedMaterial {
    pub order_id: String,
    pub material_index: usize,
    pub material: MaterialRecord,
    pub event: MaterialStatusChangedV1,
}

pub struct TransitionMaterialStatusHandler<TStore, TOutbox>
where
    TStore: OrderStore + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    topic: String,
    store: Arc<TStore>,
    outbox: Arc<TOutbox>,
}

impl<TStore, TOutbox> TransitionMaterialStatusHandler<TStore, TOutbox>
where
    TStore: OrderStore + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    pub fn new(topic: impl Into<String>, store: Arc<TStore>, outbox: Arc<TOutbox>) -> Self {
        Self {
            topic: topic.into(),
            store,
            outbox,
        }
    }

    /// Reads the order, splices the new status into its material list and
    /// writes the whole list back. Two transitions racing on the same order
    /// both write full lists, and the later commit wins.
    pub async fn handle(
        &self,
        command: TransitionMaterialStatus,
    ) -> Result<UpdatedMaterial, ApplicationError> {
        let order = self.store.load(&command.order_id).await?.ok_or_else(|| {
            ApplicationError::from(OrderStoreError::NotFound(command.order_id.clone()))
        })?;

        match decide_transition(&order, command) {
            Decision::Accepted {
                materials,
                event,
                intents,
            } => {
                let material = materials[event.material_index].clone();
                self.store
                    .replace_materials(&event.order_id, materials)
                    .await?;
                // The write is already committed here. An outbox failure still
                // reports Transport, and the new status stays persisted.
                dispatch_intents(&*self.outbox, &self.topic, intents)
                    .await
                    .inspect_err(|e| {
                        tracing::warn!(
                            order_id = %event.order_id,
                            error = %e,
                            "status persisted but change event not enqueued"
                        )
                    })?;
                tracing::info!(
                    order_id = %event.order_id,
                    material_index = event.material_index,
                    from = %event.previous_status,
                    to = %event.status,
                    "material status updated"
                );
                Ok(UpdatedMaterial {
                    order_id: event.order_id.clone(),
                    material_index: event.material_index,
                    material,
                    event,
                })
            }
            Decision::Rejected { reason } => {
                tracing::warn!(%reason, "material status transition rejected");
                Err(reason.into())
            }
        }
    }
}
