use regex::{Captures, Regex};
use smallvec::SmallVec;
use std::sync::LazyLock;

use super::{TableError, TableResult};
use crate::types::{ParamMappers, RouteData, value_to_param};
use serde_json::Value;

static PLACEHOLDER_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":(\w+)").expect("placeholder token pattern should compile"));

pub type PlaceholderList = SmallVec<[String; 4]>;

#[derive(Debug, Clone)]
pub struct CompiledRoute {
    pub(crate) page: String,
    pub(crate) path: String,
    pub(crate) matcher: Regex,
    pub(crate) placeholders: PlaceholderList,
    pub(crate) mappers: ParamMappers,
}

impl CompiledRoute {
    pub(crate) fn compile(
        page: String,
        path: String,
        mappers: ParamMappers,
        placeholder_pattern: &str,
    ) -> TableResult<Self> {
        let matcher = compile_matcher(&path, placeholder_pattern).map_err(|source| {
            TableError::InvalidMatcher {
                page: page.clone(),
                path: path.clone(),
                source,
            }
        })?;
        let placeholders = extract_placeholders(&path);

        Ok(Self {
            page,
            path,
            matcher,
            placeholders,
            mappers,
        })
    }

    pub(crate) fn aliased(&self, page: String) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    pub fn page(&self) -> &str {
        &self.page
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn placeholders(&self) -> &[String] {
        &self.placeholders
    }

    pub fn mappers(&self) -> &ParamMappers {
        &self.mappers
    }

    pub fn matches(&self, pathname: &str) -> bool {
        self.matcher.is_match(pathname)
    }

    /// Substitutes every placeholder of the template with its encoded value.
    /// Values absent from `data` render as an empty string unless a mapper
    /// decides otherwise.
    pub fn render_path(&self, data: &RouteData) -> String {
        PLACEHOLDER_TOKEN
            .replace_all(&self.path, |caps: &Captures<'_>| {
                let name = &caps[1];
                let value = data.get(name);
                match (self.mappers.get(name), value) {
                    (Some(mapper), Some(value)) => mapper.encode(value),
                    (Some(mapper), None) => mapper.encode(&Value::Null),
                    (None, Some(value)) => value_to_param(value),
                    (None, None) => String::new(),
                }
            })
            .into_owned()
    }

    /// Decodes the placeholders of `pathname`, or `None` when the row does not match.
    pub fn capture(&self, pathname: &str) -> Option<RouteData> {
        let caps = self.matcher.captures(pathname)?;
        let mut data = RouteData::new();

        for (name, raw) in self.placeholders.iter().zip(caps.iter().skip(1)) {
            let raw = raw.map(|m| m.as_str()).unwrap_or_default();
            let value = match self.mappers.get(name) {
                Some(mapper) => mapper.decode(raw),
                None => Value::String(raw.to_string()),
            };
            data.insert(name.clone(), value);
        }

        Some(data)
    }
}

pub fn extract_placeholders(path: &str) -> PlaceholderList {
    PLACEHOLDER_TOKEN
        .captures_iter(path)
        .map(|caps| caps[1].to_string())
        .collect()
}

fn compile_matcher(path: &str, placeholder_pattern: &str) -> Result<Regex, regex::Error> {
    let mut source = String::with_capacity(path.len() + 8);
    source.push('^');

    let mut last = 0usize;
    for token in PLACEHOLDER_TOKEN.find_iter(path) {
        source.push_str(&regex::escape(&path[last..token.start()]));
        source.push('(');
        source.push_str(placeholder_pattern);
        source.push(')');
        last = token.end();
    }
    source.push_str(&regex::escape(&path[last..]));
    source.push_str("/?$");

    Regex::new(&source)
}
