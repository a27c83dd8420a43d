//! HTTP client for the catalog API.
//!
//! Each call runs the allow-list and normalization helpers before building
//! its URL, so nothing unchecked is ever sent to the server.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::allow::{self, RouteGroups};
use crate::error::ClientError;
use crate::query::{build_query_string, encode_terms};
use crate::terms::normalize_search_terms;

/// Where the API server listens during local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:4000";

/// Route group used for every read-only resource.
const GET_ROUTES: &str = "getroutes";

/// Response of `GET /api/count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PageCount {
    pub index: i64,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Client for a single catalog API server.
#[derive(Debug, Clone)]
pub struct PartsClient {
    client: reqwest::Client,
    base_url: String,
}

impl Default for PartsClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl PartsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Reuse an existing [`reqwest::Client`] and its connection pool.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/routes`: the server's declared routes, grouped by method.
    pub async fn fetch_routes(&self) -> Result<RouteGroups, ClientError> {
        let response = self.client.get(self.endpoint("routes", "")).send().await?;
        Self::parse_response(response).await
    }

    /// One page of a listing resource such as `part` or `users`.
    ///
    /// `resource` must be a declared GET route; `part_name`, when given,
    /// must be a known category.
    pub async fn fetch_parts(
        &self,
        resource: &str,
        part_name: Option<&str>,
        page: u32,
    ) -> Result<Vec<Value>, ClientError> {
        allow::assert_allowed_resource(self, GET_ROUTES, resource).await?;
        match part_name {
            Some(name) => allow::assert_allowed_part_category(name)?,
            None => tracing::debug!(resource, "Listing without partName"),
        }

        let terms = normalize_search_terms(&json!({ "page": page, "partName": part_name }))?;
        let query = encode_terms(&terms, true, None)?;
        self.get_rows(resource, &query).await
    }

    /// Filtered listing of `resource`. `terms` may be a string, a list of
    /// strings or a mapping of filter names to values.
    pub async fn search(
        &self,
        resource: &str,
        terms: &Value,
        page: Option<u32>,
    ) -> Result<Vec<Value>, ClientError> {
        allow::assert_allowed_resource(self, GET_ROUTES, resource).await?;

        let terms = normalize_search_terms(terms)?;
        let query = encode_terms(&terms, false, page)?;
        self.get_rows(resource, &query).await
    }

    /// A single record of an `.../id` resource, e.g. `part/id`.
    pub async fn fetch_by_id(
        &self,
        resource: &str,
        part_name: &str,
        id: i64,
    ) -> Result<Vec<Value>, ClientError> {
        allow::assert_allowed_resource(self, GET_ROUTES, resource).await?;
        allow::assert_allowed_part_category(part_name)?;

        let query = build_query_string(&json!({ "partName": part_name, "id": id }), false, None)?;
        self.get_rows(resource, &query).await
    }

    /// Number of 50-item pages in `table_name`.
    pub async fn fetch_page_count(&self, table_name: &str) -> Result<PageCount, ClientError> {
        allow::assert_allowed_part_category(table_name)?;

        let query = build_query_string(&json!({ "tableName": table_name }), true, None)?;
        let response = self.client.get(self.endpoint("count", &query)).send().await?;
        Self::parse_response(response).await
    }

    // ---- private helpers ----

    fn endpoint(&self, resource: &str, query: &str) -> String {
        if query.is_empty() {
            format!("{}/api/{resource}", self.base_url)
        } else {
            format!("{}/api/{resource}?{query}", self.base_url)
        }
    }

    async fn get_rows(&self, resource: &str, query: &str) -> Result<Vec<Value>, ClientError> {
        let url = self.endpoint(resource, query);
        tracing::debug!(%url, "Fetching catalog rows");

        let response = self.client.get(url).send().await?;
        let body: Value = Self::parse_response(response).await?;
        Ok(into_rows(body))
    }

    /// Deserialize a 2xx body, or turn anything else into
    /// [`ClientError::Http`] carrying the server's `message`.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            tracing::warn!(status = status.as_u16(), %message, "Catalog request failed");
            return Err(ClientError::Http {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json::<T>().await?)
    }
}

/// Listing endpoints answer with an array; an object is flattened to its
/// values and any other value becomes a one-element list.
fn into_rows(body: Value) -> Vec<Value> {
    match body {
        Value::Array(rows) => rows,
        Value::Object(map) => map.into_iter().map(|(_, v)| v).collect(),
        other => vec![other],
    }
}
