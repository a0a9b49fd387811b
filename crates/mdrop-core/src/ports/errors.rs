use thiserror::Error;

/// Failure of a primary content fetch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request was superseded. Never shown to the user.
    #[error("fetch cancelled")]
    Cancelled,

    /// The server answered with a non-success status.
    #[error("server returned status {0}")]
    Status(u16),

    /// Network or decoding failure.
    #[error("transport error: {0}")]
    Transport(String),
}

impl FetchError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, FetchError::Cancelled)
    }
}
