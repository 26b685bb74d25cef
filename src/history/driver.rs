use std::sync::Arc;

use super::History;
use crate::router::{ResolvedRoute, Router};
use crate::types::{Location, Route};

/// Connects a [`Router`] to a [`History`]: routes go in as locations and the
/// current location comes back out as a route.
#[derive(Debug)]
pub struct RoutingDriver<'r, H: History> {
    router: &'r Router,
    history: H,
}

impl<'r, H: History> RoutingDriver<'r, H> {
    pub fn new(router: &'r Router, history: H) -> Self {
        Self { router, history }
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn navigate(&self, route: &Route) {
        let location = self.router.to_location(route).without_empty_search();
        tracing::event!(tracing::Level::TRACE, operation = "navigate", page = %route.page, pathname = %location.pathname);
        self.history.push(location);
    }

    pub fn redirect(&self, route: &Route) {
        let location = self.router.to_location(route).without_empty_search();
        tracing::event!(tracing::Level::TRACE, operation = "redirect", page = %route.page, pathname = %location.pathname);
        self.history.replace(location);
    }

    pub fn current(&self) -> ResolvedRoute<'r> {
        self.router.resolve(&self.history.current())
    }

    /// Calls `listener` with the current route, then with the route for every
    /// location the history moves to.
    pub fn on_route<F>(&self, listener: F)
    where
        F: Fn(ResolvedRoute<'_>) + Send + Sync + 'static,
    {
        let router = self.router.clone();
        self.history.subscribe(Arc::new(move |location: &Location| {
            let resolved = router.resolve(location);
            tracing::event!(tracing::Level::TRACE, operation = "on_route", page = %resolved.page);
            listener(resolved);
        }));
    }
}
