//! Model validation errors.

use chrono::NaiveDate;
use grc_types::ErrorCode;
use thiserror::Error;

/// Errors raised while building or validating model data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A required text field is empty or whitespace only.
    #[error("{field} cannot be blank")]
    BlankField { field: &'static str },

    /// The timebox ends before it starts.
    #[error("end date {end} is before start date {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    /// A status name outside the model's status list.
    #[error("unknown status: {0}")]
    UnknownStatus(String),

    /// A mixin name this model layer does not implement.
    #[error("unknown mixin: {0}")]
    UnknownMixin(String),

    /// An endpoint string that is not `[METHOD ]/path`.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

impl ErrorCode for ModelError {
    fn code(&self) -> &'static str {
        match self {
            Self::BlankField { .. } => "MODEL_BLANK_FIELD",
            Self::InvalidDateRange { .. } => "MODEL_INVALID_DATE_RANGE",
            Self::UnknownStatus(_) => "MODEL_UNKNOWN_STATUS",
            Self::UnknownMixin(_) => "MODEL_UNKNOWN_MIXIN",
            Self::InvalidEndpoint(_) => "MODEL_INVALID_ENDPOINT",
        }
    }

    fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::BlankField { .. } | Self::InvalidDateRange { .. } | Self::UnknownStatus(_)
        )
    }
}
