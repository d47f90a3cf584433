//! The HTTP contract every generated project exposes.
//!
//! Route order, verbs and response payloads here define the generated API.

use serde::Serialize;

use super::ResourceName;

/// Default page size for the list operation when `limit` is absent.
pub const DEFAULT_PAGE_LIMIT: u32 = 25;

/// Body of a delete for an id that matched nothing. Returned with status 200.
pub const DELETE_NOT_FOUND_MESSAGE: &str = "post not found";

/// Body of a successful delete. Returned with status 200.
pub const DELETE_SUCCESS_MESSAGE: &str = "post deleted";

/// Lifetime of the access token issued at register and login.
pub const ACCESS_TOKEN_TTL: &str = "3m";

/// Lifetime of the refresh token issued at login.
pub const REFRESH_TOKEN_TTL: &str = "20m";

/// Prefix the fixed auth router is mounted under.
pub const AUTH_MOUNT_PREFIX: &str = "/api";

/// One row of a resource route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteSpec {
    pub verb: &'static str,
    pub path: &'static str,
    handler_prefix: &'static str,
    handler_suffix: &'static str,
}

impl RouteSpec {
    const fn new(
        verb: &'static str,
        path: &'static str,
        handler_prefix: &'static str,
        handler_suffix: &'static str,
    ) -> Self {
        Self { verb, path, handler_prefix, handler_suffix }
    }

    /// Exported handler symbol bound to this route.
    pub fn handler(&self, resource: &ResourceName) -> String {
        format!("{}{}{}", self.handler_prefix, resource, self.handler_suffix)
    }

    pub fn bind(&self, resource: &ResourceName) -> RouteBinding {
        RouteBinding { verb: self.verb, path: self.path, handler: self.handler(resource) }
    }
}

/// A route row with its handler name resolved for one resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteBinding {
    pub verb: &'static str,
    pub path: &'static str,
    pub handler: String,
}

/// The five CRUD routes, in emission order.
pub const RESOURCE_ROUTES: [RouteSpec; 5] = [
    RouteSpec::new("post", "/create", "create", ""),
    RouteSpec::new("get", "/read", "read", ""),
    RouteSpec::new("get", "/read/:id", "read", "FromID"),
    RouteSpec::new("post", "/update/:id", "update", ""),
    RouteSpec::new("delete", "/delete/:id", "delete", ""),
];

/// Route bindings for `resource`, in emission order.
pub fn resource_routes(resource: &ResourceName) -> Vec<RouteBinding> {
    RESOURCE_ROUTES.iter().map(|route| route.bind(resource)).collect()
}
