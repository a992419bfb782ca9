use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::material_tracking::core::status::{InvalidStatus, MaterialStatus};
use crate::modules::material_tracking::use_cases::list_material_tracking::query::{
    SortBy, SortOrder, TrackingFilter, TrackingSort,
};
use crate::modules::material_tracking::use_cases::transition_material_status::handler::ApplicationError;
use crate::modules::material_tracking::use_cases::transition_material_status::inbound::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize, Default)]
pub struct TrackingParams {
    pub search: Option<String>,
    pub status: Option<String>,
    pub sort_by: Option<SortBy>,
    pub order: Option<SortOrder>,
}

impl TrackingParams {
    pub fn into_query(self) -> Result<(TrackingFilter, TrackingSort), InvalidStatus> {
        let status = match self.status.as_deref() {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<MaterialStatus>()?),
        };
        Ok((
            TrackingFilter {
                search_text: self.search,
                status,
            },
            TrackingSort {
                by: self.sort_by.unwrap_or_default(),
                order: self.order.unwrap_or_default(),
            },
        ))
    }
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<TrackingParams>,
) -> Response {
    let (filter, sort) = match params.into_query() {
        Ok(query) => query,
        Err(e) => return ApplicationError::from(e).into_response(),
    };
    match state.queries.list(&filter, sort).await {
        Ok(views) => Json(views).into_response(),
        Err(e) => error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}

pub async fn handle_stats(State(state): State<AppState>) -> Response {
    match state.queries.aggregate().await {
        Ok(counts) => Json(counts).into_response(),
        Err(e) => error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}
