//! Search-term normalization.

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::ClientError;

/// Normalized search terms in insertion order. Values are scalars.
pub type TermMap = IndexMap<String, Value>;

/// Normalize a string, list of strings or mapping into a [`TermMap`].
///
/// - a non-empty string `s` becomes `{s: s}`
/// - every list element must be a non-empty string and maps to itself
/// - a mapping is copied with null and empty-string values dropped
///
/// The input is never modified.
pub fn normalize_search_terms(input: &Value) -> Result<TermMap, ClientError> {
    match input {
        Value::String(s) if !s.is_empty() => Ok(TermMap::from([(s.clone(), input.clone())])),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) if !s.is_empty() => Ok((s.clone(), item.clone())),
                other => Err(ClientError::InvalidInput(format!(
                    "Invalid array element: {other}. Expected a string."
                ))),
            })
            .collect(),
        Value::Object(map) => {
            let mut terms = TermMap::with_capacity(map.len());
            for (name, value) in map {
                match value {
                    Value::Null => {}
                    Value::String(s) if s.is_empty() => {}
                    Value::Array(_) | Value::Object(_) => {
                        return Err(ClientError::InvalidInput(format!(
                            "Invalid value for '{name}'. Expected a string, number or boolean."
                        )));
                    }
                    scalar => {
                        terms.insert(name.clone(), scalar.clone());
                    }
                }
            }
            Ok(terms)
        }
        other => Err(ClientError::InvalidInput(format!(
            "Invalid searchTerms type. Expected an object, array, or string but received: {}",
            json_type(other)
        ))),
    }
}

pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    #[test]
    fn string_maps_to_itself() {
        let terms = normalize_search_terms(&json!("cpu")).unwrap();
        assert_eq!(terms.len(), 1);
        assert_eq!(terms["cpu"], json!("cpu"));
    }

    #[test]
    fn empty_string_is_invalid() {
        assert_matches!(
            normalize_search_terms(&json!("")),
            Err(ClientError::InvalidInput(msg)) if msg.ends_with("received: string")
        );
    }

    #[test]
    fn list_elements_map_to_themselves() {
        let terms = normalize_search_terms(&json!(["cpu", "gpu"])).unwrap();
        let keys: Vec<_> = terms.keys().map(String::as_str).collect();
        assert_eq!(keys, ["cpu", "gpu"]);
    }

    #[test]
    fn non_string_list_element_is_invalid() {
        assert_matches!(
            normalize_search_terms(&json!(["cpu", 5])),
            Err(ClientError::InvalidInput(msg)) if msg == "Invalid array element: 5. Expected a string."
        );
        assert_matches!(
            normalize_search_terms(&json!(["cpu", ""])),
            Err(ClientError::InvalidInput(_))
        );
    }

    #[test]
    fn mapping_drops_null_and_empty_values() {
        let input = json!({ "a": "", "b": "x", "c": null, "page": 2, "strict": false });
        let terms = normalize_search_terms(&input).unwrap();

        assert_eq!(
            terms,
            TermMap::from([
                ("b".to_string(), json!("x")),
                ("page".to_string(), json!(2)),
                ("strict".to_string(), json!(false)),
            ])
        );
        // The caller's value is untouched.
        assert_eq!(input["a"], json!(""));
        assert!(input.get("c").is_some());
    }

    #[test]
    fn nested_mapping_value_is_invalid() {
        assert_matches!(
            normalize_search_terms(&json!({ "socket": ["am4", "am5"] })),
            Err(ClientError::InvalidInput(_))
        );
    }

    #[test]
    fn other_shapes_name_the_received_type() {
        for (input, kind) in [(json!(5), "number"), (json!(true), "boolean"), (Value::Null, "null")] {
            assert_matches!(
                normalize_search_terms(&input),
                Err(ClientError::InvalidInput(msg)) if msg.ends_with(kind)
            );
        }
    }
}
