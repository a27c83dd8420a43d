use axum::routing::get;
use axum::Router;

use crate::handlers::order;
use crate::state::AppState;

/// Order routes mounted at `/orders`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(order::list_orders))
        .route("/id", get(order::get_order))
}
