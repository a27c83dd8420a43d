use axum::routing::get;
use axum::Router;

use crate::handlers::customer;
use crate::state::AppState;

/// Customer routes mounted at `/users/customers`.
///
/// ```text
/// GET /                  -> list_customers
/// GET /id                -> get_customer
/// GET /addresses         -> list_addresses
/// GET /addresses/id      -> get_address
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(customer::list_customers))
        .route("/id", get(customer::get_customer))
        .route("/addresses", get(customer::list_addresses))
        .route("/addresses/id", get(customer::get_address))
}
