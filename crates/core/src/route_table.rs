//! Declared HTTP routes of the API server.
//!
//! The server serves this table at `GET /api/routes`, and the client derives
//! its resource allow-list from the same data, either over the wire or
//! directly from this module.

use serde::Serialize;

/// A single declared route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    pub method: &'static str,
    pub path: &'static str,
}

const fn get(path: &'static str) -> RouteEntry {
    RouteEntry { method: "GET", path }
}

pub const ROUTE_TABLE: &[RouteEntry] = &[
    get("/api/health"),
    get("/api/count"),
    get("/api/routes"),
    get("/api/part"),
    get("/api/part/id"),
    get("/api/inventory"),
    get("/api/inventory/id"),
    get("/api/users"),
    get("/api/users/id"),
    get("/api/orders"),
    get("/api/orders/id"),
    get("/api/users/customers"),
    get("/api/users/customers/id"),
    get("/api/users/customers/addresses"),
    get("/api/users/customers/addresses/id"),
];

/// Name of the group a route is listed under in `GET /api/routes`.
pub fn group_name(method: &str) -> &'static str {
    match method {
        "GET" => "getRoutes",
        "POST" => "postRoutes",
        _ => "otherRoutes",
    }
}

/// The resource a path addresses: everything after `/api/`, or the whole
/// path when it has no `/api/` prefix.
pub fn resource_name(path: &str) -> &str {
    match path.split_once("/api/") {
        Some((_, rest)) => rest,
        None => path,
    }
}

/// Resources declared under `group` (case-insensitive), e.g. `getroutes`.
pub fn resources_in_group(group: &str) -> Vec<&'static str> {
    ROUTE_TABLE
        .iter()
        .filter(|r| group_name(r.method).eq_ignore_ascii_case(group))
        .map(|r| resource_name(r.path))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_name_strips_api_prefix() {
        assert_eq!(resource_name("/api/part"), "part");
        assert_eq!(resource_name("/api/users/customers/id"), "users/customers/id");
        assert_eq!(resource_name("/health"), "/health");
    }

    #[test]
    fn get_group_lists_part_and_users() {
        let resources = resources_in_group("getroutes");
        assert!(resources.contains(&"part"));
        assert!(resources.contains(&"users"));
        assert!(resources_in_group("postroutes").is_empty());
    }

    #[test]
    fn paths_are_unique() {
        for (i, a) in ROUTE_TABLE.iter().enumerate() {
            for b in &ROUTE_TABLE[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
