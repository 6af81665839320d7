use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown region: {0}")]
    UnknownRegion(String),
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    #[error("unknown source category: {0}")]
    UnknownSource(String),
    #[error("unknown keyword case policy: {0}")]
    UnknownKeywordCase(String),
    #[error("page size must be at least 1 (got {0})")]
    InvalidPageSize(usize),
}

pub type Result<T> = std::result::Result<T, ModelError>;
