//! Handlers for the part inventory.

use axum::extract::State;
use axum::Json;
use kone_core::catalog::SearchContext;
use kone_core::error::CoreError;
use kone_core::filter::build_select;
use kone_db::repositories::{InventoryRepo, JsonRow};

use crate::error::AppResult;
use crate::gates;
use crate::query::QueryParams;
use crate::state::AppState;

/// GET /api/inventory
///
/// Paginated inventory listing with the same filter semantics as parts,
/// validated against the inventory columns.
pub async fn list_inventory(
    State(state): State<AppState>,
    params: QueryParams,
) -> AppResult<Json<Vec<JsonRow>>> {
    let pagination = gates::pagination(&params)?;
    let terms = gates::search_terms(&params, SearchContext::Inventory)?;

    let query = build_select(SearchContext::Inventory, &terms, &pagination);
    let items = InventoryRepo::list_filtered(&state.pool, &query).await?;

    tracing::debug!(filters = terms.len(), results = items.len(), "Inventory listed");

    Ok(Json(items))
}

/// GET /api/inventory/id
pub async fn get_inventory_item(
    State(state): State<AppState>,
    params: QueryParams,
) -> AppResult<Json<Vec<JsonRow>>> {
    let id = gates::record_id(&params)?;

    let rows = InventoryRepo::find_by_part_id(&state.pool, id).await?;
    if rows.is_empty() {
        return Err(CoreError::NotFound { entity: "Inventory item" }.into());
    }

    Ok(Json(rows))
}
