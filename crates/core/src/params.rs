//! Pagination and record-id request parameters.
//!
//! Raw query-string values are parsed here, then range-checked with
//! [`validator`]. Absent values fall back to their defaults; present but
//! malformed values are always rejected.

use validator::{Validate, ValidationErrors};

use crate::error::CoreError;
use crate::types::DbId;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_ITEMS: i64 = 100;
pub const MAX_ITEMS: i64 = 1000;
pub const DEFAULT_ID: DbId = 1;

#[derive(Debug, Validate)]
struct PageParams {
    #[validate(range(min = 1, message = "\"page\" must be greater than or equal to 1"))]
    page: i64,
    #[validate(range(min = 1, max = 1000, message = "\"items\" must be between 1 and 1000"))]
    items: i64,
}

#[derive(Debug, Validate)]
struct IdParams {
    #[validate(range(min = 1, message = "\"id\" must be greater than or equal to 1"))]
    id: DbId,
}

/// A validated page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub items: i64,
    pub offset: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            items: DEFAULT_ITEMS,
            offset: 0,
        }
    }
}

impl Pagination {
    /// Validate `page` and `items` and derive the row offset.
    ///
    /// The offset is `(page - 1) * items` for any page but the first. An
    /// offset that would overflow or go negative is rejected.
    pub fn from_params(page: Option<&str>, items: Option<&str>) -> Result<Self, CoreError> {
        let params = PageParams {
            page: parse_integer("page", page, DEFAULT_PAGE)?,
            items: parse_integer("items", items, DEFAULT_ITEMS)?,
        };
        params
            .validate()
            .map_err(|e| first_message(&e, &["page", "items"]))?;

        let offset = if params.page != 1 {
            (params.page - 1)
                .checked_mul(params.items)
                .filter(|o| *o >= 0)
                .ok_or_else(|| CoreError::Validation("\"offset\" cannot be negative".into()))?
        } else {
            0
        };

        Ok(Self {
            page: params.page,
            items: params.items,
            offset,
        })
    }

    /// Number of pages needed to show `total` rows at `items` per page.
    pub fn page_count(&self, total: i64) -> i64 {
        if total <= 0 {
            return 0;
        }
        (total + self.items - 1) / self.items
    }
}

/// Validate an `id` lookup parameter (default 1, must be at least 1).
pub fn parse_id(raw: Option<&str>) -> Result<DbId, CoreError> {
    let params = IdParams {
        id: parse_integer("id", raw, DEFAULT_ID)?,
    };
    params
        .validate()
        .map_err(|e| first_message(&e, &["id"]))?;
    Ok(params.id)
}

/// Parse a whole number. Integral decimals such as `2.0` are accepted.
fn parse_integer(field: &str, raw: Option<&str>, default: i64) -> Result<i64, CoreError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    let raw = raw.trim();
    if let Ok(n) = raw.parse::<i64>() {
        return Ok(n);
    }
    match raw.parse::<f64>() {
        Ok(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(f as i64),
        Ok(f) if f.is_finite() => Err(CoreError::Validation(format!(
            "\"{field}\" must be an integer"
        ))),
        _ => Err(CoreError::Validation(format!("\"{field}\" must be a number"))),
    }
}

/// Pick the message of the first failing field, in declaration order.
fn first_message(errors: &ValidationErrors, order: &[&str]) -> CoreError {
    let field_errors = errors.field_errors();
    let message = order
        .iter()
        .filter_map(|field| field_errors.get(*field))
        .flat_map(|errs| errs.iter())
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Invalid pagination parameters".to_string());
    CoreError::Validation(message)
}
