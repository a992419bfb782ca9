use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};
use chrono::Utc;

use crate::modules::material_tracking::adapters::inbound::graphql::GqlMaterialStatus;
use crate::modules::material_tracking::use_cases::apply_batch_status::result::BatchResult;
use crate::modules::material_tracking::use_cases::apply_batch_status::selection::Selection;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
#[graphql(name = "BatchFailure")]
pub struct GqlBatchFailure {
    pub key: String,
    pub error: String,
}

#[derive(SimpleObject, Clone)]
#[graphql(name = "BatchResult")]
pub struct GqlBatchResult {
    pub succeeded: Vec<String>,
    pub failed: Vec<GqlBatchFailure>,
    pub summary: String,
}

impl From<BatchResult> for GqlBatchResult {
    fn from(v: BatchResult) -> Self {
        let summary = v.summary();
        Self {
            succeeded: v.succeeded,
            failed: v
                .failed
                .into_iter()
                .map(|f| GqlBatchFailure {
                    key: f.key,
                    error: f.error.to_string(),
                })
                .collect(),
            summary,
        }
    }
}

#[derive(Default)]
pub struct BatchMutation;

#[Object]
impl BatchMutation {
    async fn apply_batch_status(
        &self,
        context: &Context<'_>,
        keys: Vec<String>,
        status: GqlMaterialStatus,
    ) -> GqlResult<GqlBatchResult> {
        let state = context.data_unchecked::<AppState>();
        let mut selection: Selection = keys.into_iter().collect();
        let result = state
            .batch_handler
            .handle(&mut selection, status.into(), Utc::now().timestamp_millis())
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(result.into())
    }
}
