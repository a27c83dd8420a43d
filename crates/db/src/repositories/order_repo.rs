//! Repository for `orders`.

use kone_core::params::Pagination;
use kone_core::types::DbId;
use sqlx::MySqlPool;

use super::JsonRow;
use crate::rows::{parse_json_text, rows_to_json};

/// Serialized JSON column holding the ordered line items.
const ITEMS_COLUMN: &str = "Items";

pub struct OrderRepo;

impl OrderRepo {
    pub async fn list(pool: &MySqlPool, page: &Pagination) -> Result<Vec<JsonRow>, sqlx::Error> {
        let rows = sqlx::query("SELECT * FROM orders LIMIT ? OFFSET ?")
            .bind(page.items)
            .bind(page.offset)
            .fetch_all(pool)
            .await?;
        Ok(shape(rows_to_json(&rows)))
    }

    pub async fn find_by_id(pool: &MySqlPool, id: DbId) -> Result<Vec<JsonRow>, sqlx::Error> {
        let rows = sqlx::query("SELECT * FROM orders WHERE OrderID = ?")
            .bind(id)
            .fetch_all(pool)
            .await?;
        Ok(shape(rows_to_json(&rows)))
    }
}

fn shape(mut rows: Vec<JsonRow>) -> Vec<JsonRow> {
    for row in &mut rows {
        parse_json_text(row, ITEMS_COLUMN);
    }
    rows
}
