use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("index '{index}' of page '{page}' does not name a descendant page")]
    UnknownIndexChild { page: String, index: String },
    #[error("path template '{path}' of page '{page}' does not compile to a matcher")]
    InvalidMatcher {
        page: String,
        path: String,
        #[source]
        source: regex::Error,
    },
}

pub type TableResult<T> = Result<T, TableError>;
