use crate::modules::material_tracking::adapters::outbound::order_store::OrderStore;
use crate::modules::material_tracking::core::selection_key::SelectionKey;
use crate::modules::material_tracking::core::status::MaterialStatus;
use crate::modules::material_tracking::use_cases::apply_batch_status::result::{
    BatchError, BatchResult,
};
use crate::modules::material_tracking::use_cases::apply_batch_status::selection::Selection;
use crate::modules::material_tracking::use_cases::transition_material_status::command::TransitionMaterialStatus;
use crate::modules::material_tracking::use_cases::transition_material_status::handler::{
    ApplicationError, TransitionMaterialStatusHandler,
};
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::task::JoinSet;
use uuid::Uuid;

/// Applies one status to many selected materials. Every key is transitioned
/// as its own task; a failing key never stops the others and nothing is
/// rolled back.
pub struct ApplyBatchStatusHandler<TStore, TOutbox>
where
    TStore: OrderStore + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    store: Arc<TStore>,
    transition: Arc<TransitionMaterialStatusHandler<TStore, TOutbox>>,
}

impl<TStore, TOutbox> ApplyBatchStatusHandler<TStore, TOutbox>
where
    TStore: OrderStore + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    pub fn new(
        store: Arc<TStore>,
        transition: Arc<TransitionMaterialStatusHandler<TStore, TOutbox>>,
    ) -> Self {
        Self { store, transition }
    }

    /// The selection is drained once dispatch starts. If the store cannot be
    /// reached beforehand the batch fails as a whole and the selection is
    /// left as it was.
    pub async fn handle(
        &self,
        selection: &mut Selection,
        status: MaterialStatus,
        requested_at: i64,
    ) -> Result<BatchResult, BatchError> {
        self.store
            .ping()
            .await
            .map_err(|e| BatchError::Unavailable(e.to_string()))?;

        let keys = selection.take();
        let mut result = BatchResult::default();
        let mut pending = BTreeSet::new();
        let mut tasks = JoinSet::new();

        for raw in keys {
            let key = match raw.parse::<SelectionKey>() {
                Ok(key) => key,
                Err(e) => {
                    result.record(raw, Err(ApplicationError::NotFound(e.to_string())));
                    continue;
                }
            };
            let transition = self.transition.clone();
            let command = TransitionMaterialStatus {
                order_id: key.order_id,
                material_index: key.index,
                status,
                requested_at,
                event_id: Uuid::now_v7().to_string(),
            };
            pending.insert(raw.clone());
            tasks.spawn(async move {
                let outcome = transition.handle(command).await.map(|_| ());
                (raw, outcome)
            });
        }

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((key, outcome)) => {
                    pending.remove(&key);
                    result.record(key, outcome);
                }
                Err(e) => tracing::error!(error = %e, "batch transition task was lost"),
            }
        }
        for key in pending {
            result.record(
                key,
                Err(ApplicationError::Transport(
                    "transition task ended without a result".into(),
                )),
            );
        }

        result.sort();
        tracing::info!(%status, summary = %result.summary(), "batch status applied");
        Ok(result)
    }
}
