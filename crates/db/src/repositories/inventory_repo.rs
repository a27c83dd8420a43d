//! Repository for `part_inventory`.

use kone_core::filter::FilterQuery;
use kone_core::types::DbId;
use sqlx::MySqlPool;

use super::JsonRow;
use crate::rows::{bind_params, parse_json_text, rows_to_json};

/// Serialized JSON column holding free-form item details.
const DETAILS_COLUMN: &str = "additionaldetails";

pub struct InventoryRepo;

impl InventoryRepo {
    pub async fn list_filtered(
        pool: &MySqlPool,
        query: &FilterQuery,
    ) -> Result<Vec<JsonRow>, sqlx::Error> {
        let rows = bind_params(sqlx::query(&query.sql), &query.params)
            .fetch_all(pool)
            .await?;
        Ok(shape(rows_to_json(&rows)))
    }

    pub async fn find_by_part_id(pool: &MySqlPool, id: DbId) -> Result<Vec<JsonRow>, sqlx::Error> {
        let rows = sqlx::query("SELECT * FROM part_inventory WHERE PartID = ?")
            .bind(id)
            .fetch_all(pool)
            .await?;
        Ok(shape(rows_to_json(&rows)))
    }
}

fn shape(mut rows: Vec<JsonRow>) -> Vec<JsonRow> {
    for row in &mut rows {
        parse_json_text(row, DETAILS_COLUMN);
    }
    rows
}
