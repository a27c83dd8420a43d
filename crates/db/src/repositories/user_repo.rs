//! Repository for `users`.

use kone_core::params::Pagination;
use kone_core::types::DbId;
use serde_json::Value;
use sqlx::MySqlPool;

use super::JsonRow;
use crate::rows::rows_to_json;

/// Role id granting administrator access.
pub const ADMIN_ROLE_ID: i64 = 4;

pub struct UserRepo;

impl UserRepo {
    pub async fn list(pool: &MySqlPool, page: &Pagination) -> Result<Vec<JsonRow>, sqlx::Error> {
        let rows = sqlx::query("SELECT * FROM users LIMIT ? OFFSET ?")
            .bind(page.items)
            .bind(page.offset)
            .fetch_all(pool)
            .await?;
        Ok(rows_to_json(&rows).into_iter().map(public_user).collect())
    }

    pub async fn find_by_id(pool: &MySqlPool, id: DbId) -> Result<Vec<JsonRow>, sqlx::Error> {
        let rows = sqlx::query("SELECT * FROM users WHERE UserID = ?")
            .bind(id)
            .fetch_all(pool)
            .await?;
        Ok(rows_to_json(&rows).into_iter().map(public_user).collect())
    }
}

/// Drop the password hash and derive `isAdmin` from the role.
pub fn public_user(mut row: JsonRow) -> JsonRow {
    row.remove("Password");
    let is_admin = row.get("RoleID").and_then(Value::as_i64) == Some(ADMIN_ROLE_ID);
    row.insert("isAdmin".to_string(), Value::Bool(is_admin));
    row
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn password_is_removed_and_admin_flag_derived() {
        let Value::Object(row) = json!({ "UserID": 3, "RoleID": 4, "Password": "$2b$10$x" }) else {
            unreachable!()
        };
        let user = public_user(row);
        assert!(!user.contains_key("Password"));
        assert_eq!(user["isAdmin"], json!(true));
    }

    #[test]
    fn non_admin_role() {
        let Value::Object(row) = json!({ "UserID": 1, "RoleID": 2 }) else {
            unreachable!()
        };
        assert_eq!(public_user(row)["isAdmin"], json!(false));
    }
}
