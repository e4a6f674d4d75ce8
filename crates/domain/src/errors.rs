use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Truncated message: needed {needed} more byte(s) at offset {offset}")]
    Truncated { needed: usize, offset: usize },

    #[error("Compression error: {0}")]
    Compression(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Query timeout waiting for {server}")]
    Timeout { server: String },

    #[error("Resolution aborted after exceeding limit of {limit}")]
    ResolutionLoop { limit: usize },

    #[error("No answer: {0}")]
    NoAnswer(String),

    #[error("Resolution cancelled")]
    Cancelled,
}

impl DomainError {
    /// Codec failures, as opposed to network or resolution failures.
    pub fn is_wire_error(&self) -> bool {
        matches!(
            self,
            DomainError::Encoding(_)
                | DomainError::Decode(_)
                | DomainError::Truncated { .. }
                | DomainError::Compression(_)
        )
    }
}
