pub mod customer;
pub mod health;
pub mod inventory;
pub mod order;
pub mod part;
pub mod user;

use axum::routing::get;
use axum::Router;

use crate::handlers::meta;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                                  service + database health
/// /routes                                  declared route table
/// /count                                   page count for a table
///
/// /part                                    filtered part listing
/// /part/id                                 part by id
///
/// /inventory                               filtered inventory listing
/// /inventory/id                            inventory item by part id
///
/// /users                                   list users
/// /users/id                                user by id
/// /users/customers                         list customers
/// /users/customers/id                      customer by id
/// /users/customers/addresses               list addresses
/// /users/customers/addresses/id            address by id
///
/// /orders                                  list orders
/// /orders/id                               order by id
/// ```
///
/// Keep in step with `kone_core::route_table::ROUTE_TABLE`, which is what
/// `/routes` reports.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .route("/routes", get(meta::list_routes))
        .route("/count", get(meta::count_pages))
        .nest("/part", part::router())
        .nest("/inventory", inventory::router())
        .nest("/users", user::router())
        .nest("/orders", order::router())
}
