use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValidatorError {
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("Invalid scheme registry: {reason}")]
    InvalidRegistry { reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ValidatorError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput { reason: reason.into() }
    }

    pub fn invalid_registry(reason: impl Into<String>) -> Self {
        Self::InvalidRegistry { reason: reason.into() }
    }
}

pub type ValidatorResult<T> = Result<T, ValidatorError>;
