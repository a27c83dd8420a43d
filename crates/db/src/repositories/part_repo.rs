//! Repository for the eight part tables.

use kone_core::catalog::{PartCategory, TableName};
use kone_core::filter::FilterQuery;
use kone_core::types::DbId;
use sqlx::MySqlPool;

use super::JsonRow;
use crate::rows::{bind_params, rows_to_json};

/// Provides filtered listing, id lookup and row counts for part tables.
pub struct PartRepo;

impl PartRepo {
    /// Execute a filter query built by `kone_core::filter::build_select`.
    pub async fn list_filtered(
        pool: &MySqlPool,
        query: &FilterQuery,
    ) -> Result<Vec<JsonRow>, sqlx::Error> {
        let rows = bind_params(sqlx::query(&query.sql), &query.params)
            .fetch_all(pool)
            .await?;
        Ok(rows_to_json(&rows))
    }

    /// Find a part by primary key. Returns an empty list when absent.
    pub async fn find_by_id(
        pool: &MySqlPool,
        category: PartCategory,
        id: DbId,
    ) -> Result<Vec<JsonRow>, sqlx::Error> {
        let query = format!("SELECT * FROM {} WHERE ID = ?", category.table());
        let rows = sqlx::query(&query).bind(id).fetch_all(pool).await?;
        Ok(rows_to_json(&rows))
    }

    /// Count all rows of an allow-listed table.
    pub async fn count(pool: &MySqlPool, table: TableName) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM {}", table.as_str());
        sqlx::query_scalar::<_, i64>(&query).fetch_one(pool).await
    }
}
