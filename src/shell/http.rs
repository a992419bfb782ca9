use async_graphql_axum::GraphQLSubscription;
use axum::{
    Extension, Router,
    routing::{get, post},
};

use crate::modules::material_tracking::use_cases::apply_batch_status::inbound::http as batch_http;
use crate::modules::material_tracking::use_cases::export_material_tracking::inbound::http as export_http;
use crate::modules::material_tracking::use_cases::list_material_tracking::inbound::http as list_http;
use crate::modules::material_tracking::use_cases::transition_material_status::inbound::http as transition_http;
use crate::shell::graphql::{build_schema, graphiql, graphql};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());
    Router::new()
        .route(
            "/orders/{order_id}/materials/{material_index}/status",
            post(transition_http::handle),
        )
        .route(
            "/material-tracking/batch-status",
            post(batch_http::handle),
        )
        .route("/material-tracking", get(list_http::handle))
        .route("/material-tracking/stats", get(list_http::handle_stats))
        .route("/material-tracking/export", get(export_http::handle))
        .route("/gql", get(graphiql).post(graphql))
        .route_service("/gql/ws", GraphQLSubscription::new(schema.clone()))
        .layer(Extension(schema))
        .with_state(state)
}
