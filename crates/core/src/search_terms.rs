//! Term sanitization gate: turns raw query parameters into a validated
//! [`SearchTermMap`] for one search context.

use indexmap::IndexMap;

use crate::catalog::{SearchContext, SWITCHES};
use crate::error::CoreError;
use crate::schema::{self, TermValue};

/// Query parameters consumed by earlier gates and never treated as filters.
pub const RESERVED_PARAMS: &[&str] = &["page", "items", "partName"];

/// A validated filter term.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTerm {
    /// Canonical column identifier. `None` for switches such as `strict`.
    pub column: Option<&'static str>,
    pub value: TermValue,
}

/// Validated filters keyed by lowercased name, in request order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchTermMap {
    terms: IndexMap<String, SearchTerm>,
}

impl SearchTermMap {
    pub fn get(&self, name: &str) -> Option<&SearchTerm> {
        self.terms.get(name)
    }

    pub fn value(&self, name: &str) -> Option<&TermValue> {
        self.terms.get(name).map(|t| &t.value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.terms.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SearchTerm)> {
        self.terms.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Exact-match mode for every term clause.
    pub fn is_strict(&self) -> bool {
        self.switch("strict")
    }

    /// Negate every term clause.
    pub fn is_inverted(&self) -> bool {
        self.switch("inverted")
    }

    fn switch(&self, name: &str) -> bool {
        self.value(name).is_some_and(TermValue::is_truthy)
    }

    /// Insert a term; a repeated name keeps its first position but takes
    /// the latest value.
    fn insert(&mut self, name: String, term: SearchTerm) {
        self.terms.insert(name, term);
    }
}

/// Validate every non-reserved parameter against the context's allow-list
/// and value schema. The first failure aborts the whole request.
pub fn sanitize_terms<'a, I>(context: SearchContext, params: I) -> Result<SearchTermMap, CoreError>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut terms = SearchTermMap::default();
    for (name, raw) in params {
        if RESERVED_PARAMS.contains(&name) {
            continue;
        }
        let (key, term) = sanitize_term(context, name, raw)?;
        terms.insert(key, term);
    }
    Ok(terms)
}

/// Check a single filter: non-empty value, allowed name, schema-valid value.
pub fn sanitize_term(
    context: SearchContext,
    name: &str,
    raw: &str,
) -> Result<(String, SearchTerm), CoreError> {
    let key = name.to_lowercase();

    if raw.is_empty() {
        return Err(CoreError::Validation(format!(
            "Search for '{key}' cannot be empty"
        )));
    }

    let column = if SWITCHES.contains(&key.as_str()) {
        None
    } else {
        let column = context.resolve_column(&key).ok_or_else(|| {
            CoreError::NotAllowed(format!(
                "Search for '{key}' is not allowed in part '{context}'!"
            ))
        })?;
        Some(column)
    };

    let value = schema::coerce(&key, raw)?;
    Ok((key, SearchTerm { column, value }))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::catalog::PartCategory;

    const CPU: SearchContext = SearchContext::Part(PartCategory::Cpu);

    #[test]
    fn reserved_params_are_skipped() {
        let terms = sanitize_terms(
            CPU,
            [("page", "2"), ("items", "10"), ("partName", "cpu"), ("socket", "am5")],
        )
        .unwrap();
        assert_eq!(terms.len(), 1);
        assert_eq!(
            terms.get("socket"),
            Some(&SearchTerm {
                column: Some("Socket"),
                value: TermValue::Text("am5".into()),
            })
        );
    }

    #[test]
    fn names_are_lowercased_and_resolved() {
        let terms = sanitize_terms(CPU, [("Core_Count", "8")]).unwrap();
        let term = terms.get("core_count").unwrap();
        assert_eq!(term.column, Some("Core_Count"));
        assert_eq!(term.value, TermValue::Number(8.0));
    }

    #[test]
    fn empty_value_is_rejected() {
        assert_matches!(
            sanitize_terms(CPU, [("socket", "")]),
            Err(CoreError::Validation(msg)) if msg == "Search for 'socket' cannot be empty"
        );
    }

    #[test]
    fn column_outside_allow_list_names_term_and_category() {
        assert_matches!(
            sanitize_terms(CPU, [("chipset", "b650")]),
            Err(CoreError::NotAllowed(msg)) if msg == "Search for 'chipset' is not allowed in part 'cpu'!"
        );
    }

    #[test]
    fn switches_bypass_the_column_allow_list() {
        let terms = sanitize_terms(CPU, [("strict", "true"), ("inverted", "false")]).unwrap();
        assert!(terms.is_strict());
        assert!(!terms.is_inverted());
        assert_eq!(terms.get("strict").unwrap().column, None);
    }

    #[test]
    fn invalid_switch_value_is_rejected() {
        assert_matches!(
            sanitize_terms(CPU, [("strict", "maybe")]),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn every_allowed_column_accepts_a_schema_valid_value() {
        for category in PartCategory::ALL {
            let ctx = SearchContext::Part(category);
            for column in ctx.columns() {
                let key = column.to_lowercase();
                let value = match schema::field_kind(&key) {
                    schema::FieldKind::Number => "5",
                    schema::FieldKind::Uri => "https://example.com/x",
                    schema::FieldKind::Range => "1-9",
                    schema::FieldKind::Bool => "true",
                    schema::FieldKind::Text => "abc",
                };
                let terms = sanitize_terms(ctx, [(column, value)])
                    .unwrap_or_else(|e| panic!("{category}/{column}: {e}"));
                assert_eq!(terms.get(&key).unwrap().column, Some(column));
            }
        }
    }

    #[test]
    fn first_failure_aborts() {
        let result = sanitize_terms(CPU, [("socket", "am5"), ("bogus", "x"), ("tdp", "")]);
        assert_matches!(result, Err(CoreError::NotAllowed(msg)) if msg.contains("bogus"));
    }
}
