use async_graphql::http::GraphiQLSource;
use async_graphql::{MergedObject, MergedSubscription, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

use crate::modules::material_tracking::use_cases::apply_batch_status::inbound::graphql::BatchMutation;
use crate::modules::material_tracking::use_cases::list_material_tracking::inbound::graphql::TrackingQuery;
use crate::modules::material_tracking::use_cases::transition_material_status::inbound::graphql::TransitionMutation;
use crate::modules::material_tracking::use_cases::watch_order_materials::inbound::graphql::MaterialSubscription;
use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(TrackingQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(TransitionMutation, BatchMutation);

#[derive(MergedSubscription, Default)]
pub struct SubscriptionRoot(MaterialSubscription);

pub type AppSchema = Schema<QueryRoot, MutationRoot, SubscriptionRoot>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        SubscriptionRoot::default(),
    )
    .data(state)
    .finish()
}

pub async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> Html<String> {
    Html(
        GraphiQLSource::build()
            .endpoint("/gql")
            .subscription_endpoint("/gql/ws")
            .finish(),
    )
}

#[cfg(test)]
mod app_schema_tests {
    use super::*;
    use crate::tests::fixtures::state::{make_offline_store_state, make_seeded_state};
    use futures_util::StreamExt;
    use std::time::Duration;

    #[tokio::test]
    async fn it_should_answer_the_stats_query() {
        let schema = build_schema(make_seeded_state().await);
        let response = schema
            .execute("{ materialTrackingStats { total pending processing shipped delivered } }")
            .await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let json = response.data.into_json().unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "materialTrackingStats": {
                    "total": 3, "pending": 1, "processing": 0, "shipped": 1, "delivered": 1
                }
            })
        );
    }

    #[tokio::test]
    async fn it_should_list_materials_with_their_index() {
        let schema = build_schema(make_seeded_state().await);
        let response = schema
            .execute(
                r#"{ materialTracking(sortBy: DATE, order: ASC) { orderId materials { selectionKey materialIndex } } }"#,
            )
            .await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let json = response.data.into_json().unwrap();
        let order_a = json["materialTracking"]
            .as_array()
            .unwrap()
            .iter()
            .find(|view| view["orderId"] == "ord-a")
            .unwrap();
        assert_eq!(order_a["materials"][1]["selectionKey"], "ord-a-1");
        assert_eq!(order_a["materials"][1]["materialIndex"], 1);
    }

    #[tokio::test]
    async fn it_should_transition_through_the_mutation() {
        let schema = build_schema(make_seeded_state().await);
        let response = schema
            .execute(
                r#"mutation { transitionMaterialStatus(orderId: "ord-a", materialIndex: 0, status: DELIVERED) { name status } }"#,
            )
            .await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let json = response.data.into_json().unwrap();
        assert_eq!(json["transitionMaterialStatus"]["status"], "DELIVERED");
    }

    #[tokio::test]
    async fn it_should_surface_a_missing_order_as_a_graphql_error() {
        let schema = build_schema(make_seeded_state().await);
        let response = schema
            .execute(
                r#"mutation { transitionMaterialStatus(orderId: "nope", materialIndex: 0, status: SHIPPED) { name } }"#,
            )
            .await;
        assert_eq!(response.errors[0].message, "order nope not found");
    }

    #[tokio::test]
    async fn it_should_report_batch_outcomes() {
        let schema = build_schema(make_seeded_state().await);
        let response = schema
            .execute(
                r#"mutation { applyBatchStatus(keys: ["ord-b-0", "bad"], status: PENDING) { succeeded summary failed { key } } }"#,
            )
            .await;
        let json = response.data.into_json().unwrap();
        assert_eq!(json["applyBatchStatus"]["summary"], "1 succeeded, 1 failed");
        assert_eq!(json["applyBatchStatus"]["failed"][0]["key"], "bad");
    }

    #[tokio::test]
    async fn it_should_stream_the_materials_of_an_order() {
        let schema = build_schema(make_seeded_state().await);
        let mut stream = schema.execute_stream(
            r#"subscription { orderMaterials(orderId: "ord-b") { found materials { name status } } }"#,
        );
        let first = stream.next().await.unwrap();
        assert!(first.errors.is_empty(), "{:?}", first.errors);
        let json = first.data.into_json().unwrap();
        assert_eq!(json["orderMaterials"]["found"], true);
        assert_eq!(json["orderMaterials"]["materials"][0]["name"], "Cat");
    }

    #[tokio::test]
    async fn it_should_end_the_stream_after_reporting_an_unreachable_store() {
        let schema = build_schema(make_offline_store_state());
        let mut stream = schema.execute_stream(
            r#"subscription { orderMaterials(orderId: "ord-a") { found error } }"#,
        );
        let first = stream.next().await.unwrap();
        let json = first.data.into_json().unwrap();
        assert_eq!(json["orderMaterials"]["found"], false);
        assert_eq!(
            json["orderMaterials"]["error"],
            "backend error: Order store offline"
        );

        let next = tokio::time::timeout(Duration::from_millis(300), stream.next())
            .await
            .expect("stream should end instead of staying open");
        assert!(next.is_none());
    }
}
