use axum::routing::get;
use axum::Router;

use crate::handlers::user;
use crate::routes::customer;
use crate::state::AppState;

/// User routes mounted at `/users`, with customers nested beneath.
///
/// ```text
/// GET /                          -> list_users
/// GET /id                        -> get_user
/// GET /customers/...             -> customer::router()
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(user::list_users))
        .route("/id", get(user::get_user))
        .nest("/customers", customer::router())
}
