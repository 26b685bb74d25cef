mod builder;
mod line;
mod node;

pub use builder::{RouteSpec, parse_routes};
pub use line::{DeclaredLine, parse_line};
pub use node::RouteNode;
