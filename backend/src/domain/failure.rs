//! The failure channel and its single normalization point.
//!
//! Every request failure travels as a [`Failure`] until the transport
//! boundary calls [`normalize`] exactly once. Nothing in between catches and
//! re-wraps, so the code and status chosen at the throw site survive.

use std::fmt;

use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::error;

use super::trace_id::TraceId;
use super::validation::ValidationErrors;
use super::{AppError, ErrorCode};

/// Message returned for failures that carry nothing safe to show.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Message returned for schema validation failures.
pub const VALIDATION_FAILED_MESSAGE: &str = "Validation failed";

/// A failure that was not raised as an [`AppError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnknownFailure {
    /// A message-bearing error from a collaborator that was not wrapped.
    Untyped { message: String },
    /// Something that is not an error at all. Its contents are never shown.
    Opaque,
}

/// Every way a request can fail.
#[derive(Debug, Clone, PartialEq)]
pub enum Failure {
    Validation(ValidationErrors),
    App(AppError),
    Unknown(UnknownFailure),
}

impl Failure {
    /// Capture an unwrapped error, keeping only its message.
    ///
    /// # Examples
    /// ```
    /// use tripline::domain::{Failure, UnknownFailure};
    ///
    /// let io = std::io::Error::other("boom");
    /// let failure = Failure::untyped(&io);
    /// assert_eq!(
    ///     failure,
    ///     Failure::Unknown(UnknownFailure::Untyped { message: "boom".into() }),
    /// );
    /// ```
    pub fn untyped(error: &dyn std::error::Error) -> Self {
        Self::Unknown(UnknownFailure::Untyped {
            message: error.to_string(),
        })
    }

    /// A failure with no usable error value.
    pub fn opaque() -> Self {
        Self::Unknown(UnknownFailure::Opaque)
    }

    /// Transport status [`normalize`] will emit for this failure.
    pub fn status(&self) -> u16 {
        match self {
            Self::App(app) => app.status(),
            Self::Validation(_) => ErrorCode::ValidationError.default_status(),
            Self::Unknown(_) => ErrorCode::InternalError.default_status(),
        }
    }
}

impl From<AppError> for Failure {
    fn from(value: AppError) -> Self {
        Self::App(value)
    }
}

impl From<ValidationErrors> for Failure {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value)
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(errors) => fmt::Display::fmt(errors, f),
            Self::App(error) => fmt::Display::fmt(error, f),
            Self::Unknown(UnknownFailure::Untyped { message }) => f.write_str(message),
            Self::Unknown(UnknownFailure::Opaque) => f.write_str(UNEXPECTED_ERROR_MESSAGE),
        }
    }
}

impl std::error::Error for Failure {}

/// Inner object of the error envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub code: ErrorCode,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

/// JSON body written for every failed request: `{ "error": { ... } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

/// Transport-ready outcome of [`normalize`].
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedResponse {
    pub status: u16,
    pub body: ErrorEnvelope,
}

/// Translate any failure into a status and error envelope.
///
/// Untyped and opaque failures are logged here; application and validation
/// failures were diagnosed where they were raised and are not.
///
/// # Examples
/// ```
/// use mockable::DefaultClock;
/// use tripline::domain::{normalize, AppError, ErrorCode, Failure};
///
/// let failure = Failure::from(AppError::unauthorized("sign in first"));
/// let response = normalize(&failure, &DefaultClock);
/// assert_eq!(response.status, 401);
/// assert_eq!(response.body.error.code, ErrorCode::Unauthorized);
/// ```
pub fn normalize(failure: &Failure, clock: &dyn Clock) -> NormalizedResponse {
    let trace_id = TraceId::current().map(|id| id.to_string());
    let (code, message, details) = match failure {
        Failure::App(app) => (app.code(), app.message().to_owned(), app.details().cloned()),
        Failure::Validation(errors) => (
            ErrorCode::ValidationError,
            VALIDATION_FAILED_MESSAGE.to_owned(),
            Some(json!({ "problems": errors.problems() })),
        ),
        Failure::Unknown(UnknownFailure::Untyped { message }) => {
            error!(
                error = %message,
                trace_id = trace_id.as_deref().unwrap_or_default(),
                "unwrapped failure reached the transport boundary"
            );
            (ErrorCode::InternalError, message.clone(), None)
        }
        Failure::Unknown(UnknownFailure::Opaque) => {
            error!(
                trace_id = trace_id.as_deref().unwrap_or_default(),
                "non-error failure reached the transport boundary"
            );
            (
                ErrorCode::InternalError,
                UNEXPECTED_ERROR_MESSAGE.to_owned(),
                None,
            )
        }
    };

    NormalizedResponse {
        status: failure.status(),
        body: ErrorEnvelope {
            error: ErrorBody {
                code,
                message,
                details,
                timestamp: clock.utc(),
                trace_id,
            },
        },
    }
}
