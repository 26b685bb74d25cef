use hashbrown::HashMap as FastHashMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

pub const PAGE_SEPARATOR: char = '.';

pub type RouteData = Map<String, Value>;
pub type RouteQuery = Map<String, Value>;
pub type ParamMappers = FastHashMap<String, ParamMapper>;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Route {
    pub page: String,
    #[serde(default)]
    pub data: RouteData,
    #[serde(default)]
    pub query: RouteQuery,
}

impl Route {
    pub fn new<S: Into<String>>(page: S) -> Self {
        Self {
            page: page.into(),
            data: RouteData::new(),
            query: RouteQuery::new(),
        }
    }

    pub fn with_data(mut self, data: RouteData) -> Self {
        self.data = data;
        self
    }

    pub fn with_query(mut self, query: RouteQuery) -> Self {
        self.query = query;
        self
    }

    /// Shallow merge: every field present on the patch replaces the whole field.
    pub fn patched(&self, patch: &RoutePatch) -> Route {
        Route {
            page: patch.page.clone().unwrap_or_else(|| self.page.clone()),
            data: patch.data.clone().unwrap_or_else(|| self.data.clone()),
            query: patch.query.clone().unwrap_or_else(|| self.query.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RoutePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<RouteData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<RouteQuery>,
}

impl RoutePatch {
    pub fn page<S: Into<String>>(page: S) -> Self {
        Self {
            page: Some(page.into()),
            ..Default::default()
        }
    }

    pub fn with_data(mut self, data: RouteData) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_query(mut self, query: RouteQuery) -> Self {
        self.query = Some(query);
        self
    }
}

impl From<&str> for RoutePatch {
    fn from(page: &str) -> Self {
        RoutePatch::page(page)
    }
}

impl From<Route> for RoutePatch {
    fn from(route: Route) -> Self {
        Self {
            page: Some(route.page),
            data: Some(route.data),
            query: Some(route.query),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Location {
    pub pathname: String,
    pub search: String,
}

impl Location {
    pub fn new<P: Into<String>, S: Into<String>>(pathname: P, search: S) -> Self {
        Self {
            pathname: pathname.into(),
            search: search.into(),
        }
    }

    pub fn href(&self) -> String {
        if self.search == "?" {
            self.pathname.clone()
        } else {
            format!("{}{}", self.pathname, self.search)
        }
    }

    pub fn without_empty_search(mut self) -> Self {
        if self.search == "?" {
            self.search.clear();
        }
        self
    }
}

type EncodeFn = dyn Fn(&Value) -> String + Send + Sync;
type DecodeFn = dyn Fn(&str) -> Value + Send + Sync;

/// Converts a placeholder between its structured value and its URL text.
#[derive(Clone)]
pub struct ParamMapper {
    encode: Arc<EncodeFn>,
    decode: Arc<DecodeFn>,
}

impl ParamMapper {
    pub fn new<E, D>(encode: E, decode: D) -> Self
    where
        E: Fn(&Value) -> String + Send + Sync + 'static,
        D: Fn(&str) -> Value + Send + Sync + 'static,
    {
        Self {
            encode: Arc::new(encode),
            decode: Arc::new(decode),
        }
    }

    pub fn encode(&self, value: &Value) -> String {
        (self.encode)(value)
    }

    pub fn decode(&self, param: &str) -> Value {
        (self.decode)(param)
    }
}

impl PartialEq for ParamMapper {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.encode, &other.encode) && Arc::ptr_eq(&self.decode, &other.decode)
    }
}

impl fmt::Debug for ParamMapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParamMapper").finish_non_exhaustive()
    }
}

/// Textual form of a raw placeholder value. Strings are emitted without quotes.
pub fn value_to_param(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
