use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Not found")]
    NotFound,

    #[error("Invalid input")]
    Invalid,

    #[error("Invalid activity catalog: {0}")]
    InvalidCatalog(String),

    #[error("Could not decode image: {0}")]
    ImageDecode(String),

    #[error("Food recognition failed: {0}")]
    Recognition(String),

    #[error("Internal server error")]
    InternalServerError,
}
