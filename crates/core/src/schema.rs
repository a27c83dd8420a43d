//! Per-field value schema for filter terms.
//!
//! Every filter value arrives as a query-string string. Fields declared
//! numeric are parsed into numbers, range fields must look like `100-500`,
//! switches must be booleans and URL fields must parse as absolute URIs.
//! Anything else is free text, trimmed but left in its original case.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

pub const RANGE_PATTERN: &str = r"^\d+-\d+$";

pub const RANGE_FORMAT_MESSAGE: &str =
    "Invalid range format. Range must include number hyphen (-) number.";

static RANGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(RANGE_PATTERN).expect("valid regex"));

/// How the value of a filter field is checked and coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Number,
    Text,
    Uri,
    Range,
    Bool,
}

/// Look up the kind of a lowercased filter name.
pub fn field_kind(name: &str) -> FieldKind {
    match name {
        "id" | "price" | "pricemin" | "pricemax" | "fan_rpm" | "cores" | "amount"
        | "core_count" | "thread_count" | "partid" | "parttypeid" | "available"
        | "availablemin" | "availablemax" => FieldKind::Number,
        "url" | "image_url" => FieldKind::Uri,
        "pricerange" | "availablerange" => FieldKind::Range,
        "strict" | "inverted" => FieldKind::Bool,
        _ => FieldKind::Text,
    }
}

/// A coerced filter value.
#[derive(Debug, Clone, PartialEq)]
pub enum TermValue {
    Number(f64),
    Text(String),
    Bool(bool),
    Range { min: i64, max: i64 },
}

impl TermValue {
    pub fn is_truthy(&self) -> bool {
        match self {
            TermValue::Bool(b) => *b,
            TermValue::Number(n) => *n != 0.0,
            TermValue::Text(s) => !s.is_empty(),
            TermValue::Range { .. } => true,
        }
    }
}

impl fmt::Display for TermValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermValue::Number(n) => write!(f, "{n}"),
            TermValue::Text(s) => f.write_str(s),
            TermValue::Bool(b) => write!(f, "{b}"),
            TermValue::Range { min, max } => write!(f, "{min}-{max}"),
        }
    }
}

/// Coerce a raw value for the lowercased field `name`.
pub fn coerce(name: &str, raw: &str) -> Result<TermValue, CoreError> {
    let trimmed = raw.trim();
    match field_kind(name) {
        FieldKind::Number => trimmed
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .map(TermValue::Number)
            .ok_or_else(|| CoreError::Validation(format!("\"{name}\" must be a number"))),
        FieldKind::Bool => {
            if trimmed.eq_ignore_ascii_case("true") {
                Ok(TermValue::Bool(true))
            } else if trimmed.eq_ignore_ascii_case("false") {
                Ok(TermValue::Bool(false))
            } else {
                Err(CoreError::Validation(format!("\"{name}\" must be a boolean")))
            }
        }
        FieldKind::Uri => match url::Url::parse(trimmed) {
            Ok(_) => Ok(TermValue::Text(trimmed.to_string())),
            Err(_) => Err(CoreError::Validation(format!(
                "\"{name}\" must be a valid uri"
            ))),
        },
        FieldKind::Range => parse_range(trimmed)
            .ok_or_else(|| CoreError::Validation(RANGE_FORMAT_MESSAGE.to_string())),
        FieldKind::Text => {
            if trimmed.is_empty() {
                Err(CoreError::Validation(format!(
                    "\"{name}\" is not allowed to be empty"
                )))
            } else {
                Ok(TermValue::Text(trimmed.to_string()))
            }
        }
    }
}

fn parse_range(value: &str) -> Option<TermValue> {
    if !RANGE_RE.is_match(value) {
        return None;
    }
    let (min, max) = value.split_once('-')?;
    Some(TermValue::Range {
        min: min.parse().ok()?,
        max: max.parse().ok()?,
    })
}
