//! Request gates run by the filter handlers.
//!
//! Each gate reads one concern out of the raw query and either yields a
//! validated value or short-circuits the request with a 400. Handlers call
//! them in a fixed order: pagination, category, terms.

use kone_core::catalog::{PartCategory, SearchContext, TableName};
use kone_core::params::{self, Pagination};
use kone_core::search_terms::{self, SearchTermMap};
use kone_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::query::QueryParams;

/// `page` and `items`, plus the derived offset.
pub fn pagination(params: &QueryParams) -> AppResult<Pagination> {
    Pagination::from_params(params.get("page"), params.get("items")).map_err(|err| {
        tracing::debug!(error = %err, "Pagination rejected");
        err.into()
    })
}

/// `partName`, defaulting to `cpu` when absent.
pub fn part_category(params: &QueryParams) -> AppResult<PartCategory> {
    let Some(name) = params.get("partName") else {
        return Ok(PartCategory::default());
    };
    name.parse().map_err(|err| {
        tracing::warn!(part_name = name, "Unknown part category requested");
        AppError::from(err)
    })
}

/// Every non-reserved parameter, validated for `context`.
pub fn search_terms(params: &QueryParams, context: SearchContext) -> AppResult<SearchTermMap> {
    search_terms::sanitize_terms(context, params.iter()).map_err(|err| {
        tracing::debug!(context = %context, error = %err, "Search terms rejected");
        err.into()
    })
}

/// `tableName`, defaulting to `cpu` when absent.
pub fn table_name(params: &QueryParams) -> AppResult<TableName> {
    let Some(name) = params.get("tableName") else {
        return Ok(TableName::default());
    };
    name.parse().map_err(|err| {
        tracing::warn!(table_name = name, "Unknown table requested");
        AppError::from(err)
    })
}

/// `id`, defaulting to 1.
pub fn record_id(params: &QueryParams) -> AppResult<DbId> {
    params::parse_id(params.get("id")).map_err(|err| {
        tracing::debug!(error = %err, "Record id rejected");
        err.into()
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use kone_core::error::CoreError;

    use super::*;

    fn query(raw: &str) -> QueryParams {
        QueryParams::parse(Some(raw))
    }

    #[test]
    fn category_defaults_to_cpu() {
        assert_eq!(part_category(&query("socket=am5")).unwrap(), PartCategory::Cpu);
    }

    #[test]
    fn unknown_category_is_not_allowed() {
        assert_matches!(
            part_category(&query("partName=flux_capacitor")),
            Err(AppError::Core(CoreError::NotAllowed(msg)))
                if msg == "partName 'flux_capacitor' is not allowed!"
        );
    }

    #[test]
    fn empty_category_is_rejected() {
        assert_matches!(
            part_category(&query("partName=")),
            Err(AppError::Core(CoreError::NotAllowed(_)))
        );
    }

    #[test]
    fn terms_skip_reserved_params() {
        let terms = search_terms(
            &query("partName=gpu&page=1&items=5&cores=4096"),
            SearchContext::Part(PartCategory::Gpu),
        )
        .unwrap();
        assert_eq!(terms.len(), 1);
        assert!(terms.contains("cores"));
    }

    #[test]
    fn table_name_defaults_and_rejects() {
        assert_eq!(table_name(&query("")).unwrap().as_str(), "cpu");
        assert_matches!(
            table_name(&query("tableName=sessions")),
            Err(AppError::Core(CoreError::NotAllowed(_)))
        );
    }

    #[test]
    fn record_id_defaults_to_one() {
        assert_eq!(record_id(&query("")).unwrap(), 1);
        assert_eq!(record_id(&query("id=42")).unwrap(), 42);
        assert_matches!(record_id(&query("id=0")), Err(AppError::Core(_)));
    }
}
