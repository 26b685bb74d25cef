use crate::query;
use crate::router::RouterConfig;
use crate::table::RouteTable;
use crate::types::{Location, Route, RouteData};

#[tracing::instrument(level = "trace", skip(table, config, route), fields(page=%route.page))]
pub fn to_location(table: &RouteTable, config: &RouterConfig, route: &Route) -> Location {
    tracing::event!(tracing::Level::TRACE, operation = "to_location", page = %route.page);

    let Some(row) = table.find_by_page(&route.page) else {
        if config.debug {
            tracing::event!(
                tracing::Level::DEBUG,
                page = %route.page,
                fallback = %config.not_found_path,
                "no compiled route for page"
            );
        }
        return Location::new(config.not_found_path.clone(), String::new());
    };

    let pathname = row.render_path(&route.data);
    let search = format!("?{}", query::stringify(&route.query));

    Location { pathname, search }
}

pub fn to_url(table: &RouteTable, config: &RouterConfig, route: &Route) -> String {
    to_location(table, config, route).href()
}

#[tracing::instrument(level = "trace", skip(table, config, location), fields(pathname=%location.pathname))]
pub fn from_location(table: &RouteTable, config: &RouterConfig, location: &Location) -> Route {
    tracing::event!(tracing::Level::TRACE, operation = "from_location", pathname = %location.pathname);

    let query = query::parse(&location.search);

    match table.capture_path(&location.pathname) {
        Some((row, data)) => Route {
            page: row.page().to_string(),
            data,
            query,
        },
        None => {
            if config.debug {
                tracing::event!(
                    tracing::Level::DEBUG,
                    pathname = %location.pathname,
                    fallback = %config.not_found_page,
                    "no compiled route matched path"
                );
            }
            Route {
                page: config.not_found_page.clone(),
                data: RouteData::new(),
                query,
            }
        }
    }
}
