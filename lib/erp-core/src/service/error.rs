use thiserror::Error;

use crate::provider::remote_collection::error::RemoteCollectionError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Server answered but refused the operation; the message is server-authored
    #[error("{message}")]
    Application { message: String },
    #[error("Transport error: `{message}`")]
    Transport { message: String },

    /// A newer request superseded this one; never shown to the user
    #[error("Stale result discarded")]
    StaleResultDiscarded,
    #[error("Table closed")]
    Closed,
    #[error("Missing entity `{0}`")]
    MissingEntity(String),
}

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Page size {size} out of range 1..={max}")]
    PageSizeOutOfRange { size: u32, max: u32 },
    #[error("{field} is required")]
    MissingField { field: &'static str },
    #[error("{field} must be greater than 0")]
    NonPositive { field: &'static str },
    #[error("{field} cannot be negative")]
    Negative { field: &'static str },
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
    },
    #[error("{field} must be a valid URL")]
    InvalidUrl { field: &'static str },
    #[error("At least one item is required")]
    EmptyItems,
    #[error("Start date must be before end date")]
    InvalidDateRange,
    #[error("{field} is required")]
    MissingDate { field: &'static str },
}

impl ServiceError {
    /// Text put into the fetch status and shown next to the table
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ServiceError::Validation(error) => error.to_string(),
            ServiceError::Application { message } | ServiceError::Transport { message }
                if !message.trim().is_empty() =>
            {
                message.clone()
            }
            _ => fallback.to_string(),
        }
    }

    /// Internal signals that must not reach the fetch status
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            ServiceError::StaleResultDiscarded | ServiceError::Closed
        )
    }
}

impl From<RemoteCollectionError> for ServiceError {
    fn from(value: RemoteCollectionError) -> Self {
        match value {
            RemoteCollectionError::Application { message } => ServiceError::Application { message },
            RemoteCollectionError::Transport(error) => ServiceError::Transport {
                message: error.to_string(),
            },
            RemoteCollectionError::MalformedResponse(message) => ServiceError::Transport {
                message: format!("Malformed response: {message}"),
            },
        }
    }
}
