//! Bidirectional page router.
//!
//! Nested route declarations compile into a flat, ordered table. The table
//! turns a [`Route`] (page id, path data, query) into a URL and parses a URL
//! back into a [`Route`].
//!
//! ```
//! use bunner_page_router::{Location, Route, Router};
//! use serde_json::json;
//!
//! let router = Router::parse(
//!     "
//!     home (/)
//!     user (/users/:id)
//!         posts
//!     ",
//!     None,
//! )
//! .expect("routes should compile");
//!
//! let data = json!({"id": "42"}).as_object().cloned().unwrap_or_default();
//! let url = router.to_url(&Route::new("user.posts").with_data(data.clone()));
//! assert_eq!(url, "/users/42/posts");
//!
//! let parsed = router.from_location(&Location::new("/users/42/posts", ""));
//! assert_eq!(parsed.page, "user.posts");
//! assert_eq!(parsed.data, data);
//! ```

pub mod binding;
pub mod history;
pub mod matcher;
pub mod query;
pub mod router;
pub mod spec;
pub mod table;
pub mod types;

pub use binding::{LinkState, RouteMatcher};
pub use history::{History, LocationListener, MemoryHistory, RoutingDriver};
pub use router::{
    ResolvedRoute, Router, RouterConfig, RouterConfigBuilder, RouterConfigError, RouterError,
    RouterOptions, RouterResult,
};
pub use spec::{RouteNode, RouteSpec, parse_routes};
pub use table::{CompiledRoute, RouteTable, TableError};
pub use types::{Location, ParamMapper, ParamMappers, Route, RouteData, RoutePatch, RouteQuery};
