use crate::binding::{LinkState, RouteMatcher};
use crate::matcher;
use crate::router::{ResolvedRoute, RouterOptions, RouterResult};
use crate::spec::{RouteNode, RouteSpec, parse_routes};
use crate::table::{RouteTable, compile_routes};
use crate::types::{Location, Route, RoutePatch};
use std::sync::Arc;

/// Compiled, immutable page router. Cloning shares the compiled table.
#[derive(Debug, Clone)]
pub struct Router {
    config: RouterOptions,
    table: Arc<RouteTable>,
}

impl Router {
    pub fn new(routes: &[RouteNode], options: Option<RouterOptions>) -> RouterResult<Self> {
        let config = options.unwrap_or_default();
        config.validate()?;
        let table = compile_routes(routes, &config)?;

        Ok(Self {
            config,
            table: Arc::new(table),
        })
    }

    pub fn from_spec(spec: RouteSpec, options: Option<RouterOptions>) -> RouterResult<Self> {
        Self::new(&spec.build(), options)
    }

    pub fn parse(text: &str, options: Option<RouterOptions>) -> RouterResult<Self> {
        Self::new(&parse_routes(text), options)
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn config(&self) -> &RouterOptions {
        &self.config
    }

    pub fn to_location(&self, route: &Route) -> Location {
        matcher::to_location(&self.table, &self.config, route)
    }

    pub fn to_url(&self, route: &Route) -> String {
        matcher::to_url(&self.table, &self.config, route)
    }

    pub fn from_location(&self, location: &Location) -> Route {
        matcher::from_location(&self.table, &self.config, location)
    }

    pub fn from_history(&self, pathname: &str, search: &str) -> Route {
        self.from_location(&Location::new(pathname, search))
    }

    pub fn resolve(&self, location: &Location) -> ResolvedRoute<'_> {
        ResolvedRoute::new(self, self.from_location(location))
    }

    pub fn link<P: Into<RoutePatch>>(&self, current: &Route, target: P) -> LinkState {
        let target = target.into();
        let href = self.to_url(&current.patched(&target));
        let active = RouteMatcher::Structured(target).matches(current);
        LinkState { href, active }
    }
}
