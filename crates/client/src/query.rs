//! Query-string building.

use serde_json::Value;
use url::form_urlencoded;

use crate::error::ClientError;
use crate::terms::{json_type, TermMap};

/// Page size requested by listing calls.
pub const DEFAULT_ITEMS: u32 = 50;

/// Serialize a mapping of terms into an encoded query string (no leading
/// `?`). Non-mappings are rejected.
///
/// Every key except `page` is emitted in order. `page` is appended after
/// them, taken from `explicit_page` when given and otherwise from the
/// mapping's own truthy `page`. `items=50` closes the string when
/// `include_items` is set.
pub fn build_query_string(
    terms: &Value,
    include_items: bool,
    explicit_page: Option<u32>,
) -> Result<String, ClientError> {
    let Value::Object(map) = terms else {
        return Err(ClientError::InvalidArgument(format!(
            "Invalid function parameter 1. Expected an object but received: {}",
            json_type(terms)
        )));
    };
    let terms: TermMap = map.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
    encode_terms(&terms, include_items, explicit_page)
}

/// [`build_query_string`] over an already normalized [`TermMap`].
pub fn encode_terms(
    terms: &TermMap,
    include_items: bool,
    explicit_page: Option<u32>,
) -> Result<String, ClientError> {
    let mut query = form_urlencoded::Serializer::new(String::new());

    for (name, value) in terms {
        if name == "page" {
            continue;
        }
        if let Some(text) = scalar_text(name, value)? {
            query.append_pair(name, &text);
        }
    }

    let page = match explicit_page {
        Some(page) => Some(page.to_string()),
        None => match terms.get("page") {
            Some(value) if is_truthy(value) => scalar_text("page", value)?,
            _ => None,
        },
    };
    if let Some(page) = page {
        query.append_pair("page", &page);
    }

    if include_items {
        query.append_pair("items", &DEFAULT_ITEMS.to_string());
    }

    Ok(query.finish())
}

/// Text form of a scalar term. `null` is skipped.
fn scalar_text(name: &str, value: &Value) -> Result<Option<String>, ClientError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Array(_) | Value::Object(_) => Err(ClientError::InvalidArgument(format!(
            "Invalid value for '{name}'. Expected a string, number or boolean."
        ))),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
