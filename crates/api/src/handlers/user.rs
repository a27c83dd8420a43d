use axum::extract::State;
use axum::Json;
use kone_core::error::CoreError;
use kone_db::repositories::{JsonRow, UserRepo};

use crate::error::AppResult;
use crate::gates;
use crate::query::QueryParams;
use crate::state::AppState;

/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
    params: QueryParams,
) -> AppResult<Json<Vec<JsonRow>>> {
    let pagination = gates::pagination(&params)?;
    let users = UserRepo::list(&state.pool, &pagination).await?;
    Ok(Json(users))
}

/// GET /api/users/id
pub async fn get_user(
    State(state): State<AppState>,
    params: QueryParams,
) -> AppResult<Json<Vec<JsonRow>>> {
    let id = gates::record_id(&params)?;

    let rows = UserRepo::find_by_id(&state.pool, id).await?;
    if rows.is_empty() {
        return Err(CoreError::NotFound { entity: "User" }.into());
    }

    Ok(Json(rows))
}
