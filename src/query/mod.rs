mod codec;

pub use codec::{MAX_ARRAY_INDEX, MAX_KEY_DEPTH, parse, stringify};
