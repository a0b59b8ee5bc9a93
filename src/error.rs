#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid size: {0}")]
    InvalidSize(String),

    #[error("invalid size suffix: {0}")]
    InvalidSizeSuffix(String),
}

impl Error {
    pub(crate) fn invalid_size<S: Into<String>>(input: S) -> Self {
        Error::InvalidSize(input.into())
    }

    pub(crate) fn invalid_suffix<S: Into<String>>(suffix: S) -> Self {
        Error::InvalidSizeSuffix(suffix.into())
    }
}

/// Result type for binsize operations
pub type Result<T> = std::result::Result<T, Error>;
