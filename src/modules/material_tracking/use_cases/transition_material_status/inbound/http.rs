use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::material_tracking::core::order::MaterialRecord;
use crate::modules::material_tracking::core::status::MaterialStatus;
use crate::modules::material_tracking::use_cases::transition_material_status::command::TransitionMaterialStatus;
use crate::modules::material_tracking::use_cases::transition_material_status::handler::ApplicationError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct TransitionMaterialStatusBody {
    pub status: String,
}

#[derive(Serialize)]
pub struct TransitionMaterialStatusResponse {
    pub order_id: String,
    pub material_index: usize,
    pub material: MaterialRecord,
    pub event_id: String,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApplicationError::NotFound(_) => StatusCode::NOT_FOUND,
            ApplicationError::InvalidStatus(_) => StatusCode::BAD_REQUEST,
            ApplicationError::Cancelled(_) => StatusCode::CONFLICT,
            ApplicationError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        error_response(status, self.to_string())
    }
}

pub async fn handle(
    State(state): State<AppState>,
    path: Result<Path<(String, usize)>, PathRejection>,
    body: Result<Json<TransitionMaterialStatusBody>, JsonRejection>,
) -> Response {
    // An index that is not a non-negative integer cannot address a material.
    let Path((order_id, material_index)) = match path {
        Ok(p) => p,
        Err(rejection) => {
            return ApplicationError::NotFound(format!(
                "material not found: {}",
                rejection.body_text()
            ))
            .into_response();
        }
    };

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

    let command = TransitionMaterialStatus {
        order_id,
        material_index,
        status,
        requested_at: Utc::now().timestamp_millis(),
        event_id: Uuid::now_v7().to_string(),
    };

    match state.transition_handler.handle(command).await {
        Ok(updated) => (
            StatusCode::OK,
            Json(TransitionMaterialStatusResponse {
                order_id: updated.order_id,
                material_index: updated.material_index,
                material: updated.material,
                event_id: updated.event.event_id,
            }),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}
