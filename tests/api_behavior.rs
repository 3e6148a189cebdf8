//! Behavior-driven tests for the HTTP API surface.
//!
//! Requests are driven through the router in-process via `tower::ServiceExt`;
//! no socket is bound.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use findash_tests::sample_dataset;
use findash_web::{router, AppState};

fn app() -> Router {
    router(AppState::new(sample_dataset()))
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let response = app()
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("infallible");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn index_serves_the_dashboard_page() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("infallible");

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let html = String::from_utf8(bytes.to_vec()).expect("utf-8");
    assert!(html.contains("Financial Data Dashboard"));
}

#[tokio::test]
async fn meta_reports_summary_sectors_and_slider_domain() {
    let (status, body) = get("/api/meta").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"]["total_records"], 6);
    assert_eq!(
        body["sectors"],
        serde_json::json!(["Finance", "Health", "Tech"])
    );
    assert_eq!(body["slider"]["min"], 1000.0);
    assert_eq!(body["slider"]["max"], 3000.0);
    assert_eq!(body["slider"]["marks"].as_array().expect("marks").len(), 5);
}

#[tokio::test]
async fn when_the_sector_filter_matches_nothing_the_chart_gets_an_empty_marker() {
    let (status, body) = get("/api/price-distribution?sector=Utilities").await;

    // Not an error: the page renders a "no data" state from the marker.
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["kind"], "empty");
}

#[tokio::test]
async fn empty_sector_parameter_is_equivalent_to_no_filter() {
    let (_, with_empty_param) = get("/api/performance?sector=").await;
    let (_, without_param) = get("/api/performance").await;

    assert_eq!(with_empty_param, without_param);
    assert_eq!(
        with_empty_param["points"].as_array().expect("points").len(),
        5
    );
}

#[tokio::test]
async fn trends_echo_the_render_kind_without_changing_the_counts() {
    let (line_status, line) = get("/api/trends?sector=Finance&kind=line").await;
    let (bar_status, bar) = get("/api/trends?sector=Finance&kind=bar").await;

    assert_eq!(line_status, StatusCode::OK);
    assert_eq!(bar_status, StatusCode::OK);
    assert_eq!(line["kind"], "line");
    assert_eq!(bar["kind"], "bar");
    assert_eq!(line["points"], bar["points"]);

    let periods: Vec<&str> = line["points"]
        .as_array()
        .expect("points")
        .iter()
        .map(|p| p["period"].as_str().expect("period"))
        .collect();
    assert_eq!(periods, ["2023-02"]);
}

#[tokio::test]
async fn invalid_chart_kind_is_rejected_with_a_clear_message() {
    let (status, body) = get("/api/trends?kind=scatter").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["error"]
            .as_str()
            .expect("error message")
            .contains("chart kind"),
        "error should name the bad parameter: {body}"
    );
}

#[tokio::test]
async fn value_distribution_defaults_to_the_dataset_maximum() {
    let (status, body) = get("/api/value-distribution").await;

    assert_eq!(status, StatusCode::OK);
    let total: u64 = body["counts"]
        .as_array()
        .expect("counts")
        .iter()
        .map(|c| c.as_u64().expect("count"))
        .sum();
    // Every record with a portfolio value survives at the default threshold.
    assert_eq!(total, 5);
}

#[tokio::test]
async fn value_distribution_threshold_is_inclusive() {
    let (_, body) = get("/api/value-distribution?max_value=1500").await;

    let total: u64 = body["counts"]
        .as_array()
        .expect("counts")
        .iter()
        .map(|c| c.as_u64().expect("count"))
        .sum();
    assert_eq!(total, 2, "records at exactly the threshold must survive");
}

#[tokio::test]
async fn non_numeric_slider_value_is_rejected() {
    let (status, _) = get("/api/value-distribution?max_value=lots").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
