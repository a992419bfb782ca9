use crate::modules::material_tracking::adapters::outbound::order_store_in_memory::InMemoryOrderStore;
use crate::modules::material_tracking::use_cases::apply_batch_status::handler::ApplyBatchStatusHandler;
use crate::modules::material_tracking::use_cases::list_material_tracking::handler::TrackingProjection;
use crate::modules::material_tracking::use_cases::list_material_tracking::queries_port::TrackingQueries;
use crate::modules::material_tracking::use_cases::transition_material_status::handler::TransitionMaterialStatusHandler;
use crate::modules::material_tracking::use_cases::watch_order_materials::handler::MaterialSync;
use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<InMemoryOrderStore>,
    pub queries: Arc<dyn TrackingQueries + Send + Sync>,
    pub transition_handler:
        Arc<TransitionMaterialStatusHandler<InMemoryOrderStore, InMemoryDomainOutbox>>,
    pub batch_handler: Arc<ApplyBatchStatusHandler<InMemoryOrderStore, InMemoryDomainOutbox>>,
    pub sync: Arc<MaterialSync<InMemoryOrderStore>>,
}

impl AppState {
    /// Wires every use case against one in-memory store and outbox.
    pub fn in_memory(
        store: Arc<InMemoryOrderStore>,
        outbox: Arc<InMemoryDomainOutbox>,
        topic: &str,
    ) -> Self {
        let transition_handler = Arc::new(TransitionMaterialStatusHandler::new(
            topic,
            store.clone(),
            outbox,
        ));
        let batch_handler = Arc::new(ApplyBatchStatusHandler::new(
            store.clone(),
            transition_handler.clone(),
        ));
        Self {
            queries: Arc::new(TrackingProjection::new(store.clone())),
            sync: Arc::new(MaterialSync::new(store.clone())),
            store,
            transition_handler,
            batch_handler,
        }
    }
}
