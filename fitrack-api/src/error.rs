//! Crate-level error type

use thiserror::Error;

use crate::paging::PagingError;

/// Result type alias using the crate [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while setting up or running the service
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be loaded or parsed
    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),

    /// Configuration parsed but holds an unusable value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Paging failed
    #[error(transparent)]
    Paging(#[from] PagingError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

// Boxed to keep `Error` small
impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}
