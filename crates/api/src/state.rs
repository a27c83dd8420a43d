use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the pool is reference-counted and the config sits behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Bounded MySQL connection pool; the only resource shared across requests.
    pub pool: kone_db::DbPool,
    pub config: Arc<ServerConfig>,
}
