//! Gate behaviour of the filter endpoints.
//!
//! Every request here is rejected before any query runs, so the app is
//! backed by a pool that never connects.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, offline_app};

async fn expect_400(uri: &str) -> serde_json::Value {
    let response = get(offline_app(), uri).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
    body_json(response).await
}

#[tokio::test]
async fn unknown_part_name_is_rejected() {
    let json = expect_400("/api/part?partName=flux_capacitor").await;
    assert_eq!(json["message"], "partName 'flux_capacitor' is not allowed!");
    assert_eq!(json["code"], "NOT_ALLOWED");
}

#[tokio::test]
async fn column_from_another_category_is_rejected() {
    let json = expect_400("/api/part?partName=gpu&socket=am5").await;
    assert_eq!(json["message"], "Search for 'socket' is not allowed in part 'gpu'!");
}

#[tokio::test]
async fn default_category_is_cpu() {
    let json = expect_400("/api/part?chipset=b650").await;
    assert_eq!(json["message"], "Search for 'chipset' is not allowed in part 'cpu'!");
}

#[tokio::test]
async fn empty_filter_value_is_rejected() {
    let json = expect_400("/api/part?partName=cpu&socket=").await;
    assert_eq!(json["message"], "Search for 'socket' cannot be empty");
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn malformed_price_range_is_rejected() {
    let json = expect_400("/api/part?priceRange=100to500").await;
    assert_eq!(
        json["message"],
        "Invalid range format. Range must include number hyphen (-) number."
    );
}

#[tokio::test]
async fn non_numeric_filter_on_number_column_is_rejected() {
    let json = expect_400("/api/part?core_count=eight").await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn pagination_runs_before_category() {
    let json = expect_400("/api/part?page=0&partName=flux_capacitor").await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn items_above_limit_is_rejected() {
    expect_400("/api/part?items=1001").await;
}

#[tokio::test]
async fn category_runs_before_terms() {
    let json = expect_400("/api/part?bogus=1&partName=nope").await;
    assert_eq!(json["message"], "partName 'nope' is not allowed!");
}

#[tokio::test]
async fn part_by_id_rejects_zero() {
    expect_400("/api/part/id?partName=cpu&id=0").await;
}

#[tokio::test]
async fn inventory_rejects_part_columns() {
    let json = expect_400("/api/inventory?socket=am5").await;
    assert_eq!(
        json["message"],
        "Search for 'socket' is not allowed in part 'inventory'!"
    );
}

#[tokio::test]
async fn inventory_validates_available_range() {
    expect_400("/api/inventory?availableRange=5").await;
}

#[tokio::test]
async fn count_rejects_unknown_table() {
    let json = expect_400("/api/count?tableName=sessions").await;
    assert_eq!(json["message"], "tableName 'sessions' is not allowed!");
}
