use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::modules::material_tracking::core::status::MaterialStatus;
use crate::modules::material_tracking::use_cases::apply_batch_status::result::{
    BatchError, BatchResult,
};
use crate::modules::material_tracking::use_cases::apply_batch_status::selection::Selection;
use crate::modules::material_tracking::use_cases::transition_material_status::handler::ApplicationError;
use crate::modules::material_tracking::use_cases::transition_material_status::inbound::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ApplyBatchStatusBody {
    pub keys: Vec<String>,
    pub status: String,
}

#[derive(Serialize)]
pub struct ApplyBatchStatusResponse {
    #[serde(flatten)]
    pub result: BatchResult,
    pub summary: String,
}

impl IntoResponse for BatchError {
    fn into_response(self) -> Response {
        error_response(StatusCode::SERVICE_UNAVAILABLE, self.to_string())
    }
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<ApplyBatchStatusBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            return error_response(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text());
        }
    };

    let status: MaterialStatus = match body.status.parse() {
        Ok(status) => status,
        Err(e) => return ApplicationError::from(e).into_response(),
    };

    let mut selection: Selection = body.keys.into_iter().collect();
    match state
        .batch_handler
        .handle(&mut selection, status, Utc::now().timestamp_millis())
        .await
    {
        Ok(result) => {
            let summary = result.summary();
            Json(ApplyBatchStatusResponse { result, summary }).into_response()
        }
        Err(e) => e.into_response(),
    }
}
