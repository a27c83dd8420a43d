use axum::routing::get;
use axum::Router;

use crate::handlers::part;
use crate::state::AppState;

/// Part routes mounted at `/part`.
///
/// ```text
/// GET /      -> list_parts
/// GET /id    -> get_part
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(part::list_parts))
        .route("/id", get(part::get_part))
}
