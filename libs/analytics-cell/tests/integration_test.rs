use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use analytics_cell::create_analytics_router;
use shared_utils::test_utils::{TestConfig, TestDirectory};

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_mfa_trend_endpoint() {
    let app = create_analytics_router(TestDirectory::standard());
    let (status, json) = get_json(app, "/mfa-trend").await;

    assert_eq!(status, StatusCode::OK);
    let points = json.as_array().unwrap();
    assert_eq!(points.len(), 30);

    for point in points {
        let date = point["date"].as_str().unwrap();
        assert_eq!(date.len(), 10);
        let pct = point["mfa_percentage"].as_f64().unwrap();
        assert!((55.0..=85.0).contains(&pct));
    }
}

#[tokio::test]
async fn test_top_risks_endpoint() {
    let app = create_analytics_router(TestConfig::default().directory());
    let (status, json) = get_json(app, "/top-risks").await;

    assert_eq!(status, StatusCode::OK);
    let leaders = json.as_array().unwrap();
    assert!(leaders.len() <= 10);

    let scores: Vec<i64> = leaders
        .iter()
        .map(|l| l["risk_score"].as_i64().unwrap())
        .collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));

    let first = &leaders[0];
    assert!(first.get("email").is_some());
    assert!(first.get("name").is_some());
    assert!(first.get("department").is_some());
}

#[tokio::test]
async fn test_top_risks_empty_directory() {
    let app = create_analytics_router(TestDirectory::empty());
    let (status, json) = get_json(app, "/top-risks").await;

    assert_eq!(status, StatusCode::OK);
    assert!(json.as_array().unwrap().is_empty());
}
