//! Handlers for customers and their addresses.
//!
//! Customer rows carry the owning user nested under `UserData` and the
//! customer's address under `AddressData`; user passwords never leave the
//! repository layer.

use axum::extract::State;
use axum::Json;
use kone_core::error::CoreError;
use kone_db::repositories::{CustomerRepo, JsonRow};

use crate::error::AppResult;
use crate::gates;
use crate::query::QueryParams;
use crate::state::AppState;

/// GET /api/users/customers
pub async fn list_customers(
    State(state): State<AppState>,
    params: QueryParams,
) -> AppResult<Json<Vec<JsonRow>>> {
    let pagination = gates::pagination(&params)?;
    let customers = CustomerRepo::list(&state.pool, &pagination).await?;
    Ok(Json(customers))
}

/// GET /api/users/customers/id
pub async fn get_customer(
    State(state): State<AppState>,
    params: QueryParams,
) -> AppResult<Json<Vec<JsonRow>>> {
    let id = gates::record_id(&params)?;

    let rows = CustomerRepo::find_by_id(&state.pool, id).await?;
    if rows.is_empty() {
        return Err(CoreError::NotFound { entity: "Customer" }.into());
    }

    Ok(Json(rows))
}

/// GET /api/users/customers/addresses
pub async fn list_addresses(
    State(state): State<AppState>,
    params: QueryParams,
) -> AppResult<Json<Vec<JsonRow>>> {
    let pagination = gates::pagination(&params)?;
    let addresses = CustomerRepo::list_addresses(&state.pool, &pagination).await?;
    Ok(Json(addresses))
}

/// GET /api/users/customers/addresses/id
pub async fn get_address(
    State(state): State<AppState>,
    params: QueryParams,
) -> AppResult<Json<Vec<JsonRow>>> {
    let id = gates::record_id(&params)?;

    let rows = CustomerRepo::find_address(&state.pool, id).await?;
    if rows.is_empty() {
        return Err(CoreError::NotFound { entity: "Address" }.into());
    }

    Ok(Json(rows))
}
