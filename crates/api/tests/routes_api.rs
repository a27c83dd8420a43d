//! Route table and general HTTP behaviour.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, offline_app};
use kone_core::route_table::ROUTE_TABLE;

#[tokio::test]
async fn routes_endpoint_lists_declared_table() {
    let response = get(offline_app(), "/api/routes").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let get_routes = json["getRoutes"].as_array().unwrap();
    assert_eq!(get_routes.len(), ROUTE_TABLE.len());
    assert!(get_routes
        .iter()
        .any(|r| r["path"] == "/api/part" && r["method"] == "GET"));
    assert_eq!(json["postRoutes"], serde_json::json!([]));
    assert_eq!(json["otherRoutes"], serde_json::json!([]));
}

#[tokio::test]
async fn every_declared_route_is_mounted() {
    for route in ROUTE_TABLE {
        if route.path == "/api/health" {
            continue;
        }
        // An invalid page or id stops each handler at its first gate.
        let uri = format!("{}?page=0&id=0", route.path);
        let response = get(offline_app(), &uri).await;
        assert_ne!(response.status(), StatusCode::NOT_FOUND, "{} is not mounted", route.path);
    }
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let response = get(offline_app(), "/api/flux_capacitor").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_reports_degraded_without_database() {
    let response = get(offline_app(), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], false);
}

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let response = get(offline_app(), "/api/routes").await;
    assert!(
        response.headers().get("x-request-id").is_some(),
        "Response must contain an x-request-id header"
    );
}
