use std::ops::Deref;

use crate::router::Router;
use crate::types::{Route, RoutePatch};

/// A parsed route that can build URLs relative to itself.
#[derive(Debug, Clone)]
pub struct ResolvedRoute<'r> {
    router: &'r Router,
    route: Route,
}

impl<'r> ResolvedRoute<'r> {
    pub(crate) fn new(router: &'r Router, route: Route) -> Self {
        Self { router, route }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn into_route(self) -> Route {
        self.route
    }

    pub fn to_url<P: Into<RoutePatch>>(&self, next: P) -> String {
        self.router.to_url(&self.route.patched(&next.into()))
    }
}

impl Deref for ResolvedRoute<'_> {
    type Target = Route;

    fn deref(&self) -> &Route {
        &self.route
    }
}
