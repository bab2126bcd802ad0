//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store registered routes
//! - Find the first route matching a request
//! - Dispatch to its handler, or answer 404
//!
//! # Design Decisions
//! - Routes are checked in registration order; first match wins
//! - Explicit 404 Response rather than a silent default handler

use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::http::{Request, Response};
use crate::routing::matcher::{AndMatcher, Matcher, MethodMatcher, PathMatcher};
use crate::service::{Handler, PingService};

/// Message of the response returned when no route matches.
pub const NO_ROUTE_MATCHED: &str = "No route matched";

/// A compiled route.
pub struct Route {
    pub method: String,
    pub path: String,
    matcher: AndMatcher,
    handler: Arc<dyn Handler>,
}

impl std::fmt::Debug for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route")
            .field("method", &self.method)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// In-process request router.
#[derive(Debug, Default)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    /// Create a router with no routes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the router for a service configuration.
    pub fn from_config(config: &ServiceConfig) -> Self {
        let ping = PingService::new(config.ping.reply_prefix.clone());
        Self::new().route("POST", config.ping.path.clone(), ping)
    }

    /// Register a handler for `method` and `path`.
    pub fn route<H>(mut self, method: impl Into<String>, path: impl Into<String>, handler: H) -> Self
    where
        H: Handler + 'static,
    {
        let method = method.into();
        let path = path.into();
        let matcher = AndMatcher::new(vec![
            Box::new(MethodMatcher::new(method.clone())),
            Box::new(PathMatcher::new(path.clone())),
        ]);
        self.routes.push(Route {
            method,
            path,
            matcher,
            handler: Arc::new(handler),
        });
        self
    }

    /// Registered routes, in match order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// The first route matching the request.
    pub fn match_request(&self, req: &Request) -> Option<&Route> {
        self.routes.iter().find(|route| route.matcher.matches(req))
    }

    /// Run the matching handler, or answer 404.
    pub fn dispatch(&self, req: &Request) -> Response {
        match self.match_request(req) {
            Some(route) => {
                tracing::debug!(method = %req.method(), path = %route.path, "Dispatching request");
                route.handler.handle(req)
            }
            None => {
                tracing::warn!(method = %req.method(), uri = %req.uri(), "No route matched");
                Response::new(404, NO_ROUTE_MATCHED)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_ping() {
        let router = Router::from_config(&ServiceConfig::default());
        let req = Request::new("POST", "/api/ping").with_body(Some(r#"{"message":"a"}"#.into()));

        let response = router.dispatch(&req);
        assert_eq!(response.code(), 200);
        assert_eq!(response.message(), "Pong: a");
    }

    #[test]
    fn test_dispatch_with_url_in_query() {
        let router = Router::from_config(&ServiceConfig::default());
        let req = Request::new("POST", "/api/ping?next=http://example.com/b")
            .with_body(Some(r#"{"message":"q"}"#.into()));

        let response = router.dispatch(&req);
        assert_eq!(response.code(), 200);
        assert_eq!(response.message(), "Pong: q");
    }

    #[test]
    fn test_no_route() {
        let router = Router::from_config(&ServiceConfig::default());

        let response = router.dispatch(&Request::new("GET", "/api/ping"));
        assert_eq!(response.code(), 404);
        assert_eq!(response.message(), NO_ROUTE_MATCHED);
        assert_eq!(response.status_code(), 400);

        let response = router.dispatch(&Request::new("POST", "/nope"));
        assert_eq!(response.code(), 404);
    }

    #[test]
    fn test_first_match_wins() {
        let router = Router::new()
            .route("GET", "/x", |_: &Request| Response::new(200, "first"))
            .route("get", "/x", |_: &Request| Response::new(200, "second"));

        assert_eq!(router.routes().len(), 2);
        assert_eq!(router.dispatch(&Request::new("GET", "/x")).message(), "first");
    }

    #[test]
    fn test_configured_path_and_prefix() {
        let mut config = ServiceConfig::default();
        config.ping.path = "/rpc/ping".into();
        config.ping.reply_prefix = "Echo: ".into();
        let router = Router::from_config(&config);

        let req = Request::new("POST", "/rpc/ping").with_body(Some(r#"{"message":"b"}"#.into()));
        assert_eq!(router.dispatch(&req).message(), "Echo: b");
        assert_eq!(router.dispatch(&Request::new("POST", "/api/ping")).code(), 404);
    }
}
