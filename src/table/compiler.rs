use hashbrown::HashMap as FastHashMap;

use super::{CompiledRoute, TableError, TableResult};
use crate::router::RouterConfig;
use crate::spec::RouteNode;
use crate::types::{PAGE_SEPARATOR, ParamMappers, RouteData};

/// Ordered rows produced by flattening a route tree. Path lookups scan in order
/// and the first matching row wins.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    rows: Vec<CompiledRoute>,
    by_page: FastHashMap<String, usize>,
}

impl RouteTable {
    fn from_rows(rows: Vec<CompiledRoute>) -> Self {
        let mut by_page = FastHashMap::with_capacity(rows.len());
        for (idx, row) in rows.iter().enumerate() {
            if by_page.contains_key(row.page()) {
                tracing::warn!(page = %row.page(), path = %row.path(), "duplicate page id; keeping the first row");
                continue;
            }
            by_page.insert(row.page().to_string(), idx);
        }
        Self { rows, by_page }
    }

    pub fn rows(&self) -> &[CompiledRoute] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn find_by_page(&self, page: &str) -> Option<&CompiledRoute> {
        self.by_page.get(page).map(|&idx| &self.rows[idx])
    }

    pub fn find_by_path(&self, pathname: &str) -> Option<&CompiledRoute> {
        self.rows.iter().find(|row| row.matches(pathname))
    }

    /// First matching row together with its decoded placeholder values.
    pub fn capture_path(&self, pathname: &str) -> Option<(&CompiledRoute, RouteData)> {
        self.rows
            .iter()
            .find_map(|row| row.capture(pathname).map(|data| (row, data)))
    }
}

struct Base<'a> {
    path: &'a str,
    page: &'a str,
    mappers: &'a ParamMappers,
}

#[tracing::instrument(level = "trace", skip(nodes, config), fields(roots=nodes.len() as u64))]
pub fn compile_routes(nodes: &[RouteNode], config: &RouterConfig) -> TableResult<RouteTable> {
    let base = Base {
        path: "",
        page: "",
        mappers: &config.params,
    };
    let mut rows = Vec::new();
    compile_level(nodes, &base, &config.placeholder_pattern, &mut rows)?;

    tracing::event!(tracing::Level::TRACE, operation = "compile_routes", rows = rows.len() as u64);

    Ok(RouteTable::from_rows(rows))
}

fn compile_level(
    nodes: &[RouteNode],
    base: &Base<'_>,
    placeholder_pattern: &str,
    out: &mut Vec<CompiledRoute>,
) -> TableResult<()> {
    for node in nodes {
        if !node.has_valid_segment() {
            tracing::warn!(segment = %node.segment, parent = %base.page, "route segment is empty or contains the page separator");
        }

        let path = format!("{}{}", base.path, node.own_path());
        let page = if base.page.is_empty() {
            node.segment.clone()
        } else {
            format!("{}{}{}", base.page, PAGE_SEPARATOR, node.segment)
        };

        let mut mappers = base.mappers.clone();
        if let Some(own) = &node.params {
            mappers.extend(own.iter().map(|(name, mapper)| (name.clone(), mapper.clone())));
        }

        let mut descendants = Vec::new();
        let child_base = Base {
            path: &path,
            page: &page,
            mappers: &mappers,
        };
        compile_level(&node.children, &child_base, placeholder_pattern, &mut descendants)?;

        match &node.index {
            Some(index) => {
                let target = format!("{page}{PAGE_SEPARATOR}{index}");
                let alias = descendants
                    .iter()
                    .find(|row| row.page() == target)
                    .map(|row| row.aliased(page.clone()))
                    .ok_or_else(|| TableError::UnknownIndexChild {
                        page: page.clone(),
                        index: index.clone(),
                    })?;
                out.extend(descendants);
                out.push(alias);
            }
            None => {
                out.push(CompiledRoute::compile(
                    page,
                    path,
                    mappers,
                    placeholder_pattern,
                )?);
                out.extend(descendants);
            }
        }
    }

    Ok(())
}
