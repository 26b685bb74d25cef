mod link;
mod route_match;

pub use link::LinkState;
pub use route_match::{RouteMatcher, keys_match, page_matches};
