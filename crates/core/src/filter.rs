//! Filter clause assembly.
//!
//! Builds the parameterized `WHERE` clause for a validated
//! [`SearchTermMap`]. Bound filters (`priceMin`, `priceMax`, `priceRange`
//! and, for inventory, their `available*` counterparts) come first, then one
//! clause per remaining term. Identifiers are always the canonical column
//! names from the catalog; every value is a bound `?` parameter.

use crate::catalog::{BoundedColumn, SearchContext, SWITCHES};
use crate::params::Pagination;
use crate::schema::TermValue;
use crate::search_terms::SearchTermMap;

/// A value bound to a `?` placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<&TermValue> for SqlParam {
    fn from(value: &TermValue) -> Self {
        match value {
            TermValue::Number(n) => SqlParam::Float(*n),
            TermValue::Text(s) => SqlParam::Text(s.clone()),
            TermValue::Bool(b) => SqlParam::Int(i64::from(*b)),
            TermValue::Range { .. } => SqlParam::Text(value.to_string()),
        }
    }
}

/// Ordered `WHERE` fragments and the parameters they bind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterClause {
    fragments: Vec<String>,
    params: Vec<SqlParam>,
}

impl FilterClause {
    pub fn push(&mut self, fragment: impl Into<String>, params: impl IntoIterator<Item = SqlParam>) {
        self.fragments.push(fragment.into());
        self.params.extend(params);
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub fn params(&self) -> &[SqlParam] {
        &self.params
    }

    /// `WHERE 1=1` followed by every fragment joined with `AND`.
    pub fn to_sql(&self) -> String {
        let mut sql = String::from("WHERE 1=1");
        for fragment in &self.fragments {
            sql.push_str(" AND ");
            sql.push_str(fragment);
        }
        sql
    }
}

/// A complete paginated `SELECT` ready to execute.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterQuery {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

/// Build the filter clause for `terms` in `context`.
///
/// Once any bound filter of a column is present, the plain filter on that
/// same column is dropped. `strict` switches every term clause to exact
/// match and `inverted` negates every term clause; neither applies per
/// field and neither touches bound clauses.
pub fn build_filter_clause(context: SearchContext, terms: &SearchTermMap) -> FilterClause {
    let mut clause = FilterClause::default();
    let mut skipped: Vec<&str> = SWITCHES.to_vec();

    for bounds in context.bounded_columns() {
        if push_bounds(&mut clause, bounds, terms) {
            skipped.push(bounds.plain);
        }
        skipped.extend([bounds.min, bounds.max, bounds.range]);
    }

    let strict = terms.is_strict();
    let operator = match (strict, terms.is_inverted()) {
        (true, false) => "=",
        (true, true) => "<>",
        (false, false) => "LIKE",
        (false, true) => "NOT LIKE",
    };

    for (name, term) in terms.iter() {
        if skipped.iter().any(|s| *s == name) {
            continue;
        }
        let Some(column) = term.column else {
            continue;
        };
        let param = if strict {
            SqlParam::from(&term.value)
        } else {
            SqlParam::Text(format!("%{}%", term.value))
        };
        clause.push(format!("{column} {operator} ?"), [param]);
    }

    clause
}

/// Push the min/max/range clauses of one bounded column. Returns whether
/// any of them was present.
fn push_bounds(clause: &mut FilterClause, bounds: &BoundedColumn, terms: &SearchTermMap) -> bool {
    let column = bounds.column;
    let mut present = false;

    if let Some(min) = terms.value(bounds.min) {
        clause.push(format!("{column} >= ?"), [SqlParam::from(min)]);
        present = true;
    }
    if let Some(max) = terms.value(bounds.max) {
        clause.push(format!("{column} <= ?"), [SqlParam::from(max)]);
        present = true;
    }
    if let Some(TermValue::Range { min, max }) = terms.value(bounds.range) {
        clause.push(
            format!("{column} BETWEEN ? AND ?"),
            [SqlParam::Int(*min), SqlParam::Int(*max)],
        );
        present = true;
    }

    present
}

/// Build the full paginated `SELECT` against the context's table.
pub fn build_select(
    context: SearchContext,
    terms: &SearchTermMap,
    pagination: &Pagination,
) -> FilterQuery {
    let clause = build_filter_clause(context, terms);
    let sql = format!(
        "SELECT * FROM {} {} LIMIT ? OFFSET ?",
        context.table(),
        clause.to_sql()
    );
    let mut params = clause.params;
    params.push(SqlParam::Int(pagination.items));
    params.push(SqlParam::Int(pagination.offset));
    FilterQuery { sql, params }
}
