pub mod resolver;

pub use resolver::{from_location, to_location, to_url};
