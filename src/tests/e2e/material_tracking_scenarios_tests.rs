use crate::modules::material_tracking::adapters::outbound::order_store::OrderStore;
use crate::modules::material_tracking::core::status::MaterialStatus;
use crate::modules::material_tracking::use_cases::apply_batch_status::selection::Selection;
use crate::modules::material_tracking::use_cases::export_material_tracking::serializer::serialize;
use crate::modules::material_tracking::use_cases::list_material_tracking::projection::StatusCounts;
use crate::modules::material_tracking::use_cases::list_material_tracking::query::{
    SortOrder, TrackingFilter, TrackingSort,
};
use crate::modules::material_tracking::use_cases::watch_order_materials::feed::MaterialFeed;
use crate::tests::fixtures::commands::TransitionMaterialStatusBuilder;
use crate::tests::fixtures::state::make_seeded_state;
use chrono::Utc;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::mpsc;

#[tokio::test]
async fn transition_updates_the_counters_and_the_subscriber() {
    let state = make_seeded_state().await;
    assert_eq!(
        state.queries.aggregate().await.unwrap(),
        StatusCounts {
            total: 3,
            pending: 1,
            processing: 0,
            shipped: 1,
            delivered: 1,
        }
    );

    let (tx, mut rx) = mpsc::unbounded_channel();
    let _subscription = state
        .sync
        .subscribe("ord-a", move |feed| {
            let _ = tx.send(feed);
        })
        .await;
    assert!(matches!(rx.recv().await, Some(MaterialFeed::Materials(_))));

    let before = Utc::now().timestamp_millis();
    state
        .transition_handler
        .handle(
            TransitionMaterialStatusBuilder::new()
                .order_id("ord-a")
                .material_index(0)
                .status(MaterialStatus::Delivered)
                .requested_at(Utc::now().timestamp_millis())
                .build(),
        )
        .await
        .unwrap();

    let reread = state.store.load("ord-a").await.unwrap().unwrap();
    assert_eq!(reread.materials[0].status, MaterialStatus::Delivered);
    assert!(reread.materials[0].updated_at >= before);

    match rx.recv().await {
        Some(MaterialFeed::Materials(materials)) => {
            assert_eq!(materials[0].status, MaterialStatus::Delivered)
        }
        other => panic!("unexpected feed value: {other:?}"),
    }

    assert_eq!(
        state.queries.aggregate().await.unwrap(),
        StatusCounts {
            total: 3,
            pending: 0,
            processing: 0,
            shipped: 1,
            delivered: 2,
        }
    );
}

#[tokio::test]
async fn a_detached_subscriber_is_never_called_again() {
    let state = make_seeded_state().await;
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let subscription = state
        .sync
        .subscribe("ord-b", move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .await;
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    subscription.unsubscribe();
    state
        .transition_handler
        .handle(
            TransitionMaterialStatusBuilder::new()
                .order_id("ord-b")
                .status(MaterialStatus::Pending)
                .build(),
        )
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(20)).await;

    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn a_backward_transition_succeeds() {
    let state = make_seeded_state().await;
    let updated = state
        .transition_handler
        .handle(
            TransitionMaterialStatusBuilder::new()
                .order_id("ord-b")
                .material_index(0)
                .status(MaterialStatus::Pending)
                .build(),
        )
        .await
        .unwrap();
    assert_eq!(updated.event.previous_status, MaterialStatus::Delivered);
    assert_eq!(updated.material.status, MaterialStatus::Pending);
}

#[tokio::test]
async fn batch_then_export_reflects_every_successful_key() {
    let state = make_seeded_state().await;
    let mut selection: Selection = ["ord-a-0", "ord-b-0", "ord-b-5"].into_iter().collect();

    let result = state
        .batch_handler
        .handle(&mut selection, MaterialStatus::Shipped, Utc::now().timestamp_millis())
        .await
        .unwrap();
    assert_eq!(result.summary(), "2 succeeded, 1 failed");
    assert!(selection.is_empty());

    let counts = state.queries.aggregate().await.unwrap();
    assert_eq!(counts.shipped, 3);

    let views = state
        .queries
        .list(
            &TrackingFilter::default(),
            TrackingSort {
                order: SortOrder::Asc,
                ..TrackingSort::default()
            },
        )
        .await
        .unwrap();
    let csv = serialize(&views);
    assert_eq!(csv.lines().count(), 1 + counts.total);
    assert_eq!(
        csv.lines().skip(1).filter(|row| row.contains(",shipped,")).count(),
        3
    );
}
