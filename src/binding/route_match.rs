use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

use crate::types::{PAGE_SEPARATOR, Route, RoutePatch};

type RoutePredicate = dyn Fn(&Route) -> bool + Send + Sync;

/// Selects routes by page namespace, by page plus expected values, or by an
/// arbitrary predicate.
#[derive(Clone)]
pub enum RouteMatcher {
    Page(String),
    Structured(RoutePatch),
    Predicate(Arc<RoutePredicate>),
}

impl RouteMatcher {
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&Route) -> bool + Send + Sync + 'static,
    {
        RouteMatcher::Predicate(Arc::new(f))
    }

    pub fn matches(&self, route: &Route) -> bool {
        match self {
            RouteMatcher::Page(page) => page_matches(page, &route.page),
            RouteMatcher::Structured(expected) => match expected.page.as_deref() {
                Some(page) if !page.is_empty() => {
                    page_matches(page, &route.page)
                        && keys_match(&route.data, expected.data.as_ref())
                        && keys_match(&route.query, expected.query.as_ref())
                }
                _ => false,
            },
            RouteMatcher::Predicate(predicate) => predicate(route),
        }
    }
}

impl From<&str> for RouteMatcher {
    fn from(page: &str) -> Self {
        RouteMatcher::Page(page.to_string())
    }
}

impl From<RoutePatch> for RouteMatcher {
    fn from(patch: RoutePatch) -> Self {
        RouteMatcher::Structured(patch)
    }
}

impl fmt::Debug for RouteMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteMatcher::Page(page) => f.debug_tuple("Page").field(page).finish(),
            RouteMatcher::Structured(patch) => f.debug_tuple("Structured").field(patch).finish(),
            RouteMatcher::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

/// True when `actual` is `expected` itself or any page nested beneath it.
pub fn page_matches(expected: &str, actual: &str) -> bool {
    match actual.strip_prefix(expected) {
        Some("") => true,
        Some(rest) => rest.starts_with(PAGE_SEPARATOR),
        None => false,
    }
}

pub fn keys_match(actual: &Map<String, Value>, expected: Option<&Map<String, Value>>) -> bool {
    let Some(expected) = expected else {
        return true;
    };
    expected
        .iter()
        .all(|(key, value)| actual.get(key) == Some(value))
}
