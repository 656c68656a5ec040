#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Input is empty")]
    EmptyInput,

    #[error("Input is longer than {max} characters")]
    TooLong { max: usize },

    #[error("Input contains characters other than letters, spaces, hyphens or apostrophes")]
    InvalidCharacters,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizationError {
    #[error("Response contained no entry")]
    EmptyResponse,

    #[error("Response entry has no word")]
    MissingWord,
}

/// Why a lookup did not produce a usable payload
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportFailure {
    #[error("Input rejected: {0}")]
    Rejected(#[from] ValidationError),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("Request timed out")]
    Timeout,

    #[error("No response: {0}")]
    Unreachable(String),

    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl From<NormalizationError> for TransportFailure {
    fn from(err: NormalizationError) -> Self {
        TransportFailure::Malformed(err.to_string())
    }
}
