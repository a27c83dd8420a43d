use axum::routing::get;
use axum::Router;

use crate::handlers::inventory;
use crate::state::AppState;

/// Inventory routes mounted at `/inventory`.
///
/// ```text
/// GET /      -> list_inventory
/// GET /id    -> get_inventory_item
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(inventory::list_inventory))
        .route("/id", get(inventory::get_inventory_item))
}
