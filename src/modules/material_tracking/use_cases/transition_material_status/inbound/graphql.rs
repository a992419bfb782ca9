use async_graphql::{Context, Object, Result as GqlResult};
use chrono::Utc;
use uuid::Uuid;

use crate::modules::material_tracking::adapters::inbound::graphql::{GqlMaterial, GqlMaterialStatus};
use crate::modules::material_tracking::use_cases::transition_material_status::command::TransitionMaterialStatus;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct TransitionMutation;

#[Object]
impl TransitionMutation {
    async fn transition_material_status(
        &self,
        context: &Context<'_>,
        order_id: String,
        material_index: u32,
        status: GqlMaterialStatus,
    ) -> GqlResult<GqlMaterial> {
        let state = context.data_unchecked::<AppState>();
        let material_index = usize::try_from(material_index)
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        let command = TransitionMaterialStatus {
            order_id,
            material_index,
            status: status.into(),
            requested_at: Utc::now().timestamp_millis(),
            event_id: Uuid::now_v7().to_string(),
        };

        let updated = state
            .transition_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(updated.material.into())
    }
}
