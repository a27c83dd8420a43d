//! Introspection endpoints: declared routes and page counts.

use axum::extract::State;
use axum::Json;
use indexmap::IndexMap;
use kone_core::route_table::{group_name, RouteEntry, ROUTE_TABLE};
use kone_db::repositories::PartRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::gates;
use crate::query::QueryParams;
use crate::state::AppState;

const ROUTE_GROUPS: [&str; 3] = ["getRoutes", "postRoutes", "otherRoutes"];

/// Number of pages a table spans at the requested page size.
#[derive(Debug, Serialize)]
pub struct PageCount {
    pub index: i64,
}

/// GET /api/routes
///
/// The declared route table grouped by method. Every group is present,
/// even when empty.
pub async fn list_routes() -> Json<IndexMap<&'static str, Vec<RouteEntry>>> {
    Json(grouped_routes())
}

pub fn grouped_routes() -> IndexMap<&'static str, Vec<RouteEntry>> {
    let mut groups: IndexMap<&'static str, Vec<RouteEntry>> =
        ROUTE_GROUPS.iter().map(|g| (*g, Vec::new())).collect();
    for route in ROUTE_TABLE {
        groups
            .entry(group_name(route.method))
            .or_default()
            .push(*route);
    }
    groups
}

/// GET /api/count
///
/// `ceil(rows / items)` for `tableName` (default `cpu`).
pub async fn count_pages(
    State(state): State<AppState>,
    params: QueryParams,
) -> AppResult<Json<PageCount>> {
    let pagination = gates::pagination(&params)?;
    let table = gates::table_name(&params)?;

    let total = PartRepo::count(&state.pool, table).await?;
    let index = pagination.page_count(total);

    tracing::debug!(table = %table, total, items = pagination.items, index, "Pages counted");

    Ok(Json(PageCount { index }))
}
