use axum::{
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::Utc;

use crate::modules::material_tracking::use_cases::export_material_tracking::serializer::{
    file_name, serialize,
};
use crate::modules::material_tracking::use_cases::list_material_tracking::inbound::http::TrackingParams;
use crate::modules::material_tracking::use_cases::transition_material_status::handler::ApplicationError;
use crate::modules::material_tracking::use_cases::transition_material_status::inbound::http::error_response;
use crate::shell::state::AppState;

/// Downloads the filtered and sorted projection as CSV.
pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<TrackingParams>,
) -> Response {
    let (filter, sort) = match params.into_query() {
        Ok(query) => query,
        Err(e) => return ApplicationError::from(e).into_response(),
    };
    let views = match state.queries.list(&filter, sort).await {
        Ok(views) => views,
        Err(e) => return error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    };

    let disposition = format!(
        "attachment; filename=\"{}\"",
        file_name(Utc::now().date_naive())
    );
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        serialize(&views),
    )
        .into_response()
}
