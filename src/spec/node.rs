use crate::types::{PAGE_SEPARATOR, ParamMappers};
use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RouteNode {
    pub segment: String,
    pub path: Option<String>,
    pub index: Option<String>,
    pub params: Option<ParamMappers>,
    pub children: Vec<RouteNode>,
}

impl RouteNode {
    pub fn new<S: Into<String>>(segment: S) -> Self {
        Self {
            segment: segment.into(),
            ..Default::default()
        }
    }

    pub fn with_path<S: Into<String>>(mut self, path: S) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_index<S: Into<String>>(mut self, index: S) -> Self {
        self.index = Some(index.into());
        self
    }

    pub fn with_params(mut self, params: ParamMappers) -> Self {
        self.params = Some(params);
        self
    }

    pub fn with_child(mut self, child: RouteNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = RouteNode>,
    {
        self.children.extend(children);
        self
    }

    /// Path template contributed by this node alone, before the ancestor prefix.
    pub fn own_path(&self) -> Cow<'_, str> {
        match self.path.as_deref() {
            Some(path) => Cow::Borrowed(path),
            None => Cow::Owned(format!("/{}", self.segment)),
        }
    }

    pub fn has_valid_segment(&self) -> bool {
        !self.segment.is_empty() && !self.segment.contains(PAGE_SEPARATOR)
    }
}
