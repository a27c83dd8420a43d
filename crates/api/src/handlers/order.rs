use axum::extract::State;
use axum::Json;
use kone_core::error::CoreError;
use kone_db::repositories::{JsonRow, OrderRepo};

use crate::error::AppResult;
use crate::gates;
use crate::query::QueryParams;
use crate::state::AppState;

/// GET /api/orders
pub async fn list_orders(
    State(state): State<AppState>,
    params: QueryParams,
) -> AppResult<Json<Vec<JsonRow>>> {
    let pagination = gates::pagination(&params)?;
    let orders = OrderRepo::list(&state.pool, &pagination).await?;
    Ok(Json(orders))
}

/// GET /api/orders/id
pub async fn get_order(
    State(state): State<AppState>,
    params: QueryParams,
) -> AppResult<Json<Vec<JsonRow>>> {
    let id = gates::record_id(&params)?;

    let rows = OrderRepo::find_by_id(&state.pool, id).await?;
    if rows.is_empty() {
        return Err(CoreError::NotFound { entity: "Order" }.into());
    }

    Ok(Json(rows))
}
