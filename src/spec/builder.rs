use crate::types::ParamMappers;

use super::{DeclaredLine, RouteNode, parse_line};

/// Route declarations with parameter overrides interleaved between text blocks.
///
/// An override passed to [`RouteSpec::params`] belongs to the last line of the
/// text block given immediately before it.
///
/// ```
/// use bunner_page_router::{ParamMapper, ParamMappers, RouteSpec};
/// use serde_json::Value;
///
/// let mut overrides = ParamMappers::new();
/// overrides.insert(
///     "id".to_string(),
///     ParamMapper::new(|v| v.to_string(), |p| Value::String(p.to_string())),
/// );
///
/// let routes = RouteSpec::new()
///     .lines("home\nuser (/users/:id)")
///     .params(overrides)
///     .lines("about")
///     .build();
///
/// assert_eq!(routes.len(), 3);
/// assert!(routes[1].params.is_some());
/// ```
#[derive(Debug, Default, Clone)]
pub struct RouteSpec {
    entries: Vec<(DeclaredLine, Option<ParamMappers>)>,
    awaiting_params: bool,
}

impl RouteSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(mut self, text: &str) -> Self {
        let before = self.entries.len();
        self.entries
            .extend(text.lines().filter_map(parse_line).map(|line| (line, None)));
        self.awaiting_params = self.entries.len() > before;
        self
    }

    pub fn params(mut self, params: ParamMappers) -> Self {
        if !self.awaiting_params {
            tracing::warn!(
                names = ?params.keys().collect::<Vec<_>>(),
                "parameter overrides do not follow a declaration; ignoring"
            );
            return self;
        }

        if let Some((_, slot)) = self.entries.last_mut() {
            *slot = Some(params);
        }
        self.awaiting_params = false;
        self
    }

    #[tracing::instrument(level = "trace", skip(self), fields(lines=self.entries.len() as u64))]
    pub fn build(self) -> Vec<RouteNode> {
        fold_declarations(self.entries)
    }
}

pub fn parse_routes(text: &str) -> Vec<RouteNode> {
    RouteSpec::new().lines(text).build()
}

fn fold_declarations<I>(entries: I) -> Vec<RouteNode>
where
    I: IntoIterator<Item = (DeclaredLine, Option<ParamMappers>)>,
{
    let mut roots = Vec::new();
    let mut stack: Vec<(usize, RouteNode)> = Vec::new();

    for (line, params) in entries {
        let depth = line.depth;
        let mut node = line.into_node();
        node.params = params;

        while stack.last().is_some_and(|(top, _)| *top >= depth) {
            if let Some((_, finished)) = stack.pop() {
                attach(&mut stack, &mut roots, finished);
            }
        }

        stack.push((depth, node));
    }

    while let Some((_, finished)) = stack.pop() {
        attach(&mut stack, &mut roots, finished);
    }

    roots
}

fn attach(stack: &mut [(usize, RouteNode)], roots: &mut Vec<RouteNode>, node: RouteNode) {
    match stack.last_mut() {
        Some((_, parent)) => parent.children.push(node),
        None => roots.push(node),
    }
}
