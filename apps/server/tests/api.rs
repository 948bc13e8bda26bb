use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
};
use league_core::diversification::AllocationTier;
use league_core::settings::ScoringSettings;
use league_server::{
    api::app_router,
    build_state,
    config::{Config, LogFormat},
};
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_config(scoring: ScoringSettings) -> Config {
    Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(5),
        log_format: LogFormat::Text,
        scoring,
    }
}

fn build_test_router() -> axum::Router {
    let config = test_config(ScoringSettings::default());
    app_router(build_state(&config), &config)
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn post(app: axum::Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

fn assert_number(value: &Value, expected: f64) {
    let actual = value.as_f64().unwrap_or(f64::NAN);
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {value}"
    );
}

fn balanced_holdings() -> Value {
    json!([
        {"symbol": "VTI", "sector": "US Stocks", "allocation": 45},
        {"symbol": "VXUS", "sector": "International", "allocation": 25},
        {"symbol": "BND", "sector": "Bonds", "allocation": 20},
        {"symbol": "BNDX", "sector": "Intl Bond", "allocation": 10}
    ])
}

#[tokio::test]
async fn healthz_works() {
    let response = build_test_router()
        .oneshot(
            Request::builder()
                .uri("/api/v1/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn lists_tiers_in_order() {
    let (status, body) = get(build_test_router(), "/api/v1/tiers").await;

    assert_eq!(status, StatusCode::OK);
    let tiers: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["tier"].as_str().unwrap())
        .collect();
    assert_eq!(tiers, ["cautious", "moderate", "aggressive"]);
    assert_number(&body[1]["target"]["usStocks"], 45.0);
}

#[tokio::test]
async fn unknown_tier_is_bad_request() {
    let (status, body) = get(build_test_router(), "/api/v1/tiers/reckless").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], json!(400));
    assert!(body["message"].as_str().unwrap().contains("reckless"));
}

#[tokio::test]
async fn exposes_configured_settings() {
    let config = test_config(ScoringSettings {
        default_tier: AllocationTier::Aggressive,
        diversification_enabled: false,
    });
    let app = app_router(build_state(&config), &config);

    let (status, body) = get(app, "/api/v1/settings").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["defaultTier"], json!("aggressive"));
    assert_eq!(body["diversificationEnabled"], json!(false));
}

#[tokio::test]
async fn diversification_of_single_tech_holding() {
    let (status, body) = post(
        build_test_router(),
        "/api/v1/diversification",
        json!({
            "holdings": [{"symbol": "AAPL", "sector": "Tech", "allocation": 100, "isActive": true}]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["worstBucket"], json!("US Stocks"));
    assert_number(&body["worstDeviation"], 55.0);
    assert_number(&body["modifier"], 0.75);
    assert_eq!(body["buckets"].as_array().unwrap().len(), 4);
    assert_number(&body["buckets"][0]["actual"], 100.0);
}

#[tokio::test]
async fn diversification_rejects_bad_custom_target() {
    let (status, body) = post(
        build_test_router(),
        "/api/v1/diversification",
        json!({
            "holdings": balanced_holdings(),
            "target": {"usStocks": 80, "intlStocks": 25, "usBonds": 20, "intlBonds": 10}
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("sum to 100"));
}

#[tokio::test]
async fn out_of_range_allocation_is_bad_request() {
    let holdings = json!([
        {"symbol": "AAPL", "sector": "Tech", "allocation": 250},
        {"symbol": "BND", "sector": "Bonds", "allocation": 20}
    ]);

    let (status, body) = post(
        build_test_router(),
        "/api/v1/diversification",
        json!({"holdings": holdings}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("must be between 0 and 100"));

    let (status, body) = post(
        build_test_router(),
        "/api/v1/scores",
        json!({"holdings": holdings, "rawGrowthPct": 2}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], json!(400));
}

#[tokio::test]
async fn modifier_lookup() {
    let (status, body) = post(
        build_test_router(),
        "/api/v1/diversification/modifier",
        json!({"deviation": 12.5}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_number(&body["modifier"], 0.9);

    let (status, _) = post(
        build_test_router(),
        "/api/v1/diversification/modifier",
        json!({"deviation": -1}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn scores_portfolio_with_requested_tier() {
    let (status, body) = post(
        build_test_router(),
        "/api/v1/scores",
        json!({
            "holdings": balanced_holdings(),
            "rawGrowthPct": 4,
            "tier": "aggressive"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tier"], json!("aggressive"));
    assert_number(&body["modifier"], 0.9);
    assert_number(&body["gameScore"], 3.6);
}

#[tokio::test]
async fn settles_matchup() {
    let (status, body) = post(
        build_test_router(),
        "/api/v1/matchups",
        json!({
            "home": {"memberName": "Alice", "holdings": balanced_holdings(), "rawGrowthPct": 3},
            "away": {
                "memberName": "Bob",
                "holdings": [{"symbol": "NVDA", "sector": "Tech", "allocation": 100}],
                "rawGrowthPct": 3.8
            }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outcome"], json!("homeWin"));
    assert_number(&body["home"]["gameScore"], 3.0);
    assert_number(&body["away"]["gameScore"], 2.85);
    assert_number(&body["margin"], 0.15);
}

#[tokio::test]
async fn serves_openapi_document() {
    let (status, body) = get(build_test_router(), "/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/v1/matchups"].is_object());
}
