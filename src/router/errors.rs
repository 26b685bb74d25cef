use crate::router::RouterConfigError;
use crate::table::TableError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouterError {
    #[error(transparent)]
    Config(#[from] RouterConfigError),
    #[error(transparent)]
    Table(#[from] TableError),
}

pub type RouterResult<T> = Result<T, RouterError>;
