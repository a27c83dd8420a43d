//! Dynamic row decoding and parameter binding.
//!
//! Catalog tables differ per category, so rows are decoded column by column
//! into JSON objects keyed by column name instead of into fixed structs.

use kone_core::filter::SqlParam;
use serde_json::{Map, Value};
use sqlx::mysql::{MySqlArguments, MySqlRow};
use sqlx::query::Query;
use sqlx::{Column, MySql, Row, TypeInfo};

/// Bind every parameter, in order, to a `?`-placeholder query.
pub fn bind_params<'q>(
    mut query: Query<'q, MySql, MySqlArguments>,
    params: &'q [SqlParam],
) -> Query<'q, MySql, MySqlArguments> {
    for param in params {
        query = match param {
            SqlParam::Int(v) => query.bind(*v),
            SqlParam::Float(v) => query.bind(*v),
            SqlParam::Text(v) => query.bind(v.as_str()),
        };
    }
    query
}

/// Decode a row into a JSON object keyed by column name.
pub fn row_to_json(row: &MySqlRow) -> Map<String, Value> {
    row.columns()
        .iter()
        .map(|col| {
            let value = column_value(row, col.ordinal(), col.type_info().name());
            (col.name().to_string(), value)
        })
        .collect()
}

pub fn rows_to_json(rows: &[MySqlRow]) -> Vec<Map<String, Value>> {
    rows.iter().map(row_to_json).collect()
}

fn column_value(row: &MySqlRow, idx: usize, type_name: &str) -> Value {
    match type_name {
        "BOOLEAN" => decode::<bool>(row, idx).map_or(Value::Null, Value::Bool),
        "TINYINT UNSIGNED" | "SMALLINT UNSIGNED" | "INT UNSIGNED" | "MEDIUMINT UNSIGNED"
        | "BIGINT UNSIGNED" => decode::<u64>(row, idx).map_or(Value::Null, Value::from),
        "TINYINT" | "SMALLINT" | "INT" | "MEDIUMINT" | "BIGINT" | "YEAR" => {
            decode::<i64>(row, idx).map_or(Value::Null, Value::from)
        }
        "FLOAT" => decode::<f32>(row, idx).map_or(Value::Null, |v| Value::from(f64::from(v))),
        "DOUBLE" => decode::<f64>(row, idx).map_or(Value::Null, Value::from),
        "DATETIME" | "TIMESTAMP" => decode::<chrono::NaiveDateTime>(row, idx)
            .map_or(Value::Null, |v| Value::String(v.to_string())),
        "DATE" => decode::<chrono::NaiveDate>(row, idx)
            .map_or(Value::Null, |v| Value::String(v.to_string())),
        "JSON" => decode::<Value>(row, idx).unwrap_or(Value::Null),
        _ => decode::<String>(row, idx).map_or(Value::Null, Value::String),
    }
}

/// Decode a nullable column; undecodable values read as SQL `NULL`.
fn decode<'r, T>(row: &'r MySqlRow, idx: usize) -> Option<T>
where
    T: sqlx::Decode<'r, MySql> + sqlx::Type<MySql>,
{
    match row.try_get::<Option<T>, _>(idx) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(column = idx, error = %err, "Undecodable column, returning null");
            None
        }
    }
}

/// Replace a text column holding serialized JSON with the parsed value.
/// Missing, null or unparsable text becomes `null`.
pub fn parse_json_text(row: &mut Map<String, Value>, column: &str) {
    if let Some(slot) = row.get_mut(column) {
        let parsed = slot
            .as_str()
            .and_then(|text| serde_json::from_str::<Value>(text).ok())
            .unwrap_or(Value::Null);
        *slot = parsed;
    }
}

/// Move the listed columns out of `row` into a nested object.
pub fn extract_columns(row: &mut Map<String, Value>, columns: &[&str]) -> Map<String, Value> {
    columns
        .iter()
        .filter_map(|col| row.remove(*col).map(|v| (col.to_string(), v)))
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn json_text_is_parsed_in_place() {
        let mut row = object(json!({ "Items": "[1,2]", "OrderID": 3 }));
        parse_json_text(&mut row, "Items");
        assert_eq!(row["Items"], json!([1, 2]));
    }

    #[test]
    fn bad_json_text_becomes_null() {
        let mut row = object(json!({ "additionaldetails": "{oops", "n": null }));
        parse_json_text(&mut row, "additionaldetails");
        parse_json_text(&mut row, "n");
        assert_eq!(row["additionaldetails"], Value::Null);
        assert_eq!(row["n"], Value::Null);
    }

    #[test]
    fn extract_moves_only_present_columns() {
        let mut row = object(json!({ "Name": "A", "Email": "a@x", "CustomerID": 1 }));
        let nested = extract_columns(&mut row, &["Name", "Email", "Gender"]);
        assert_eq!(Value::Object(nested), json!({ "Name": "A", "Email": "a@x" }));
        assert_eq!(Value::Object(row), json!({ "CustomerID": 1 }));
    }
}
