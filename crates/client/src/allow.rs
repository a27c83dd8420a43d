//! Allow-list checks run before a request is built.

use indexmap::IndexMap;
use kone_core::catalog::is_allowed_part_name;
use kone_core::route_table::{resource_name, resources_in_group};
use serde::Deserialize;

use crate::api::PartsClient;
use crate::error::ClientError;

/// Route group served by `GET /api/routes`, e.g. `getRoutes`.
pub type RouteGroups = IndexMap<String, Vec<RouteInfo>>;

/// One declared route as reported by the server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RouteInfo {
    pub path: String,
    #[serde(default)]
    pub method: Option<String>,
}

/// Resources listed under every group named `category` (case-insensitive).
pub fn allowed_resources<'a>(routes: &'a RouteGroups, category: &str) -> Vec<&'a str> {
    routes
        .iter()
        .filter(|(group, _)| group.eq_ignore_ascii_case(category))
        .flat_map(|(_, entries)| entries.iter().map(|r| resource_name(&r.path)))
        .collect()
}

/// Check `resource` against an already fetched route table.
pub fn check_resource(
    routes: &RouteGroups,
    category: &str,
    resource: &str,
) -> Result<(), ClientError> {
    if resource.is_empty() || !allowed_resources(routes, category).contains(&resource) {
        return Err(not_allowed_resource(resource));
    }
    Ok(())
}

/// Fetch the server's route table and check `resource` against the routes
/// of `category`.
pub async fn assert_allowed_resource(
    client: &PartsClient,
    category: &str,
    resource: &str,
) -> Result<(), ClientError> {
    let routes = client.fetch_routes().await?;
    check_resource(&routes, category, resource)
}

/// Same check as [`assert_allowed_resource`] against the route table
/// compiled into `kone_core`, without a round trip.
pub fn assert_allowed_resource_offline(category: &str, resource: &str) -> Result<(), ClientError> {
    if resource.is_empty() || !resources_in_group(category).contains(&resource) {
        return Err(not_allowed_resource(resource));
    }
    Ok(())
}

/// The eight part categories plus the inventory aliases.
pub fn assert_allowed_part_category(name: &str) -> Result<(), ClientError> {
    if !is_allowed_part_name(name) {
        return Err(ClientError::NotAllowed(format!(
            "partName \"{name}\" is not allowed!"
        )));
    }
    Ok(())
}

fn not_allowed_resource(resource: &str) -> ClientError {
    tracing::debug!(resource, "Resource rejected by route allow-list");
    ClientError::NotAllowed(format!("tableName \"{resource}\" is not allowed!"))
}
