//! Handlers for the part catalog.

use axum::extract::State;
use axum::Json;
use kone_core::catalog::SearchContext;
use kone_core::error::CoreError;
use kone_core::filter::build_select;
use kone_db::repositories::{JsonRow, PartRepo};

use crate::error::AppResult;
use crate::gates;
use crate::query::QueryParams;
use crate::state::AppState;

/// GET /api/part
///
/// Paginated, filtered listing of one part category. `partName` picks the
/// category (default `cpu`); every other non-reserved parameter is a filter.
pub async fn list_parts(
    State(state): State<AppState>,
    params: QueryParams,
) -> AppResult<Json<Vec<JsonRow>>> {
    let pagination = gates::pagination(&params)?;
    let category = gates::part_category(&params)?;
    let context = SearchContext::Part(category);
    let terms = gates::search_terms(&params, context)?;

    let query = build_select(context, &terms, &pagination);
    let parts = PartRepo::list_filtered(&state.pool, &query).await?;

    tracing::debug!(
        part = %category,
        filters = terms.len(),
        page = pagination.page,
        results = parts.len(),
        "Parts listed",
    );

    Ok(Json(parts))
}

/// GET /api/part/id
///
/// A single part by `id` within the `partName` category.
pub async fn get_part(
    State(state): State<AppState>,
    params: QueryParams,
) -> AppResult<Json<Vec<JsonRow>>> {
    let category = gates::part_category(&params)?;
    let id = gates::record_id(&params)?;

    let rows = PartRepo::find_by_id(&state.pool, category, id).await?;
    if rows.is_empty() {
        return Err(CoreError::NotFound { entity: "Part" }.into());
    }

    Ok(Json(rows))
}
