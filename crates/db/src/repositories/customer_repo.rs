//! Repository for customers and their addresses.

use kone_core::params::Pagination;
use kone_core::types::DbId;
use serde_json::Value;
use sqlx::MySqlPool;

use super::JsonRow;
use crate::rows::{extract_columns, rows_to_json};

const CUSTOMER_SELECT: &str = "\
    SELECT c.*, u.*, a.* FROM customers c \
    JOIN users u ON c.UserID = u.UserID \
    JOIN addresses a ON c.CustomerID = a.CustomerID";

/// User columns nested under `UserData`. The password hash is dropped.
const USER_COLUMNS: &[&str] = &["Name", "Gender", "ProfileImage", "RoleID", "Email"];

const ADDRESS_COLUMNS: &[&str] = &[
    "AddressID",
    "AddressTypeID",
    "Street",
    "City",
    "State",
    "PostalCode",
    "Country",
];

pub struct CustomerRepo;

impl CustomerRepo {
    pub async fn list(pool: &MySqlPool, page: &Pagination) -> Result<Vec<JsonRow>, sqlx::Error> {
        let query = format!("{CUSTOMER_SELECT} LIMIT ? OFFSET ?");
        let rows = sqlx::query(&query)
            .bind(page.items)
            .bind(page.offset)
            .fetch_all(pool)
            .await?;
        Ok(rows_to_json(&rows).into_iter().map(nest_customer).collect())
    }

    pub async fn find_by_id(pool: &MySqlPool, id: DbId) -> Result<Vec<JsonRow>, sqlx::Error> {
        let query = format!("{CUSTOMER_SELECT} WHERE c.CustomerID = ?");
        let rows = sqlx::query(&query).bind(id).fetch_all(pool).await?;
        Ok(rows_to_json(&rows).into_iter().map(nest_customer).collect())
    }

    pub async fn list_addresses(
        pool: &MySqlPool,
        page: &Pagination,
    ) -> Result<Vec<JsonRow>, sqlx::Error> {
        let rows = sqlx::query("SELECT * FROM addresses LIMIT ? OFFSET ?")
            .bind(page.items)
            .bind(page.offset)
            .fetch_all(pool)
            .await?;
        Ok(rows_to_json(&rows))
    }

    pub async fn find_address(pool: &MySqlPool, id: DbId) -> Result<Vec<JsonRow>, sqlx::Error> {
        let rows = sqlx::query("SELECT * FROM addresses WHERE AddressID = ?")
            .bind(id)
            .fetch_all(pool)
            .await?;
        Ok(rows_to_json(&rows))
    }
}

/// Split a joined customer row into customer fields plus nested
/// `UserData` and `AddressData` objects.
pub fn nest_customer(mut row: JsonRow) -> JsonRow {
    row.remove("Password");
    let user = extract_columns(&mut row, USER_COLUMNS);
    let address = extract_columns(&mut row, ADDRESS_COLUMNS);
    row.insert("UserData".to_string(), Value::Object(user));
    row.insert("AddressData".to_string(), Value::Object(address));
    row
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn joined_row_is_nested_without_password() {
        let Value::Object(row) = json!({
            "CustomerID": 7,
            "UserID": 2,
            "Name": "Sami",
            "Email": "sami@example.com",
            "Password": "hash",
            "AddressID": 11,
            "City": "Oulu",
        }) else {
            unreachable!()
        };

        let customer = Value::Object(nest_customer(row));
        assert_eq!(
            customer,
            json!({
                "CustomerID": 7,
                "UserID": 2,
                "UserData": { "Name": "Sami", "Email": "sami@example.com" },
                "AddressData": { "AddressID": 11, "City": "Oulu" },
            })
        );
    }
}
