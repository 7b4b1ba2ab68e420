#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The gateway could not be reached or the exchange broke off
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The gateway answered with an error status
    #[error("Request rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("Enter a value for the threshold")]
    EmptyInput,

    #[error("`{0}` is not a number")]
    InvalidInput(String),
}

impl ClientError {
    /// True when a request was attempted and failed, as opposed to input rejected locally.
    pub fn is_request_failure(&self) -> bool {
        matches!(self, ClientError::Network(_) | ClientError::Rejected { .. })
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
