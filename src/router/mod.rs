mod errors;
mod options;
mod resolved;
mod service;

pub use errors::{RouterError, RouterResult};
pub use options::{
    DEFAULT_NOT_FOUND_PAGE, DEFAULT_NOT_FOUND_PATH, DEFAULT_PLACEHOLDER_PATTERN, RouterConfig,
    RouterConfigBuilder, RouterConfigError, RouterOptions, RouterOptionsBuilder,
    RouterOptionsError,
};
pub use resolved::ResolvedRoute;
pub use service::Router;
