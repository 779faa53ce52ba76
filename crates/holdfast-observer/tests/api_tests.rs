//! Integration tests for the admin balance API endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server. This validates handler logic and routing
//! without needing a live network connection.

#![allow(clippy::unwrap_used)]

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use holdfast_observer::router::build_router;
use holdfast_observer::state::AppState;
use holdfast_types::{
    DailySnapshot, EventCatalog, EventDefinition, EventOption, SnapshotEvent, StatDeltas,
    WorldStats,
};
use serde_json::Value;
use tower::ServiceExt;

fn day(
    date: &str,
    morale: i64,
    supplies: i64,
    threat: i64,
    category: Option<&str>,
) -> DailySnapshot {
    DailySnapshot {
        est_date: date.to_owned(),
        world: WorldStats {
            morale,
            supplies,
            threat,
        },
        event: category.map(|c| SnapshotEvent {
            category: Some(c.to_owned()),
            headline: Some(String::from("Test Event")),
        }),
        chosen_option: Some(String::from("a")),
        tally: BTreeMap::new(),
    }
}

fn option(key: &str, morale: i64, supplies: i64, threat: i64) -> EventOption {
    EventOption {
        key: key.to_owned(),
        label: key.to_owned(),
        description: None,
        deltas: StatDeltas {
            morale,
            supplies,
            threat,
        },
    }
}

async fn make_test_state() -> Arc<AppState> {
    let state = Arc::new(AppState::new());

    let history = vec![
        day("2026-08-01", 50, 50, 50, Some("crisis")),
        day("2026-08-02", 60, 50, 48, None),
        day("2026-08-03", 55, 50, 47, Some("opportunity")),
    ];

    let catalog = EventCatalog {
        builtin: vec![EventDefinition {
            id: String::from("crisis_1"),
            headline: String::from("Raiders Sighted"),
            description: None,
            category: String::from("crisis"),
            options: vec![option("fight", -10, 0, -5), option("hide", -20, -4, 5)],
            is_builtin: true,
        }],
        custom: vec![EventDefinition {
            id: String::from("7"),
            headline: String::from("Traveling Merchant"),
            description: None,
            category: String::from("opportunity"),
            options: vec![option("trade", 8, 6, 0)],
            is_builtin: false,
        }],
        total: 2,
    };

    state.replace(history, catalog).await;
    state
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =========================================================================
// Tests
// =========================================================================

#[tokio::test]
async fn test_index_returns_html() {
    let state = make_test_state().await;
    let router = build_router(state);

    let response = router
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.contains("text/html"));
}

#[tokio::test]
async fn test_history_is_served_as_fetched() {
    let state = make_test_state().await;
    let router = build_router(state);

    let response = router
        .oneshot(
            Request::get("/api/admin/history")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json.as_array().unwrap().len(), 3);
    assert_eq!(json[0]["est_date"], "2026-08-01");
    assert_eq!(json[1]["world"]["morale"], 60);
}

#[tokio::test]
async fn test_events_catalog() {
    let state = make_test_state().await;
    let router = build_router(state);

    let response = router
        .oneshot(
            Request::get("/api/admin/events")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["total"], 2);
    assert_eq!(json["builtin"][0]["category"], "crisis");
    assert_eq!(json["custom"][0]["is_builtin"], false);
}

#[tokio::test]
async fn test_drift_summary() {
    let state = make_test_state().await;
    let router = build_router(state);

    let response = router
        .oneshot(
            Request::get("/api/admin/balance/drift")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["available"], true);
    // Morale 50 -> 60 -> 55: mean delta 2.5 across 2 days.
    assert_eq!(json["summary"]["days"], 2);
    assert_eq!(json["summary"]["avg_morale"], 2.5);
    assert_eq!(json["labels"]["morale"], "rising");
    assert_eq!(json["labels"]["supplies"], "stable");
    assert_eq!(json["labels"]["threat"], "falling");
}

#[tokio::test]
async fn test_drift_unavailable_without_history() {
    let state = Arc::new(AppState::new());
    let router = build_router(state);

    let response = router
        .oneshot(
            Request::get("/api/admin/balance/drift")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["available"], false);
}

#[tokio::test]
async fn test_mix_counts_categories() {
    let state = make_test_state().await;
    let router = build_router(state);

    let response = router
        .oneshot(
            Request::get("/api/admin/balance/mix")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["available"], true);
    assert_eq!(json["total"], 3);

    // BTreeMap iteration: crisis, opportunity, unknown.
    assert_eq!(json["categories"].as_array().unwrap().len(), 3);
    assert_eq!(json["categories"][0]["category"], "crisis");
    assert_eq!(json["categories"][0]["count"], 1);
    assert_eq!(json["categories"][2]["category"], "unknown");
}

#[tokio::test]
async fn test_mix_respects_window() {
    let state = make_test_state().await;
    let router = build_router(state);

    let response = router
        .oneshot(
            Request::get("/api/admin/balance/mix?days=1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["total"], 1);
    assert_eq!(json["categories"].as_array().unwrap().len(), 1);
    assert_eq!(json["categories"][0]["category"], "opportunity");
}

#[tokio::test]
async fn test_mix_rejects_zero_window() {
    let state = make_test_state().await;
    let router = build_router(state);

    let response = router
        .oneshot(
            Request::get("/api/admin/balance/mix?days=0")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_mix_unavailable_without_history() {
    let state = Arc::new(AppState::new());
    let router = build_router(state);

    let response = router
        .oneshot(
            Request::get("/api/admin/balance/mix")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["available"], false);
}

#[tokio::test]
async fn test_category_balance() {
    let state = make_test_state().await;
    let router = build_router(state);

    let response = router
        .oneshot(
            Request::get("/api/admin/balance/categories")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["count"], 2);

    // Built-in crisis event first, custom opportunity second.
    assert_eq!(json["categories"][0]["category"], "crisis");
    assert_eq!(json["categories"][0]["event_count"], 1);
    assert_eq!(json["categories"][0]["avg_morale"], -15.0);
    assert_eq!(json["categories"][1]["category"], "opportunity");
    assert_eq!(json["categories"][1]["avg_morale"], 8.0);
}

#[tokio::test]
async fn test_category_balance_empty_catalog_is_empty_list() {
    let state = Arc::new(AppState::new());
    let router = build_router(state);

    let response = router
        .oneshot(
            Request::get("/api/admin/balance/categories")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["count"], 0);
    assert!(json["categories"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_nonexistent_route_returns_404() {
    let state = make_test_state().await;
    let router = build_router(state);

    let response = router
        .oneshot(
            Request::get("/api/nonexistent")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
