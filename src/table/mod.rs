mod compiled;
mod compiler;
mod error;

pub use compiled::{CompiledRoute, PlaceholderList, extract_placeholders};
pub use compiler::{RouteTable, compile_routes};
pub use error::{TableError, TableResult};
