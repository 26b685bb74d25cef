use regex::Regex;
use std::sync::LazyLock;

use super::RouteNode;

static DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\s*)(\S*)(?: \(([^)]*)\))?(?: -> (\S*))? ?$")
        .expect("declaration grammar should compile")
});

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeclaredLine {
    pub depth: usize,
    pub segment: String,
    pub path: Option<String>,
    pub index: Option<String>,
}

impl DeclaredLine {
    pub fn into_node(self) -> RouteNode {
        RouteNode {
            segment: self.segment,
            path: self.path,
            index: self.index,
            params: None,
            children: Vec::new(),
        }
    }
}

/// Returns `None` for lines that carry no declaration at all.
///
/// A line that does not fit `segment [(path)] [-> index]` still produces a
/// declaration, with an empty segment, so that its depth keeps shaping the tree.
#[tracing::instrument(level = "trace", fields(line=%line))]
pub fn parse_line(line: &str) -> Option<DeclaredLine> {
    if !line.chars().any(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }

    let depth = line.chars().take_while(|c| c.is_whitespace()).count();

    let Some(caps) = DECLARATION.captures(line) else {
        tracing::warn!(line = %line, depth = depth as u64, "route declaration does not match grammar");
        return Some(DeclaredLine {
            depth,
            ..Default::default()
        });
    };

    Some(DeclaredLine {
        depth,
        segment: caps
            .get(2)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default(),
        path: caps.get(3).map(|m| m.as_str().to_string()),
        index: caps.get(4).map(|m| m.as_str().to_string()),
    })
}
