//! Domain-level error types.
//!
//! These errors are transport agnostic apart from the status hint each
//! instance carries. The inbound HTTP adapter turns them into responses via
//! [`crate::domain::normalize`].

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Broad family an [`ErrorCode`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Authentication,
    Validation,
    DataAccess,
    Server,
    BusinessLogic,
}

/// Stable machine-readable error code describing the failure category.
///
/// The set is closed: callers cannot mint codes at runtime, so an unknown
/// code is a compile error rather than a normalization-time surprise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Authentication is missing.
    Unauthorized,
    /// Supplied credentials were rejected.
    InvalidCredentials,
    /// The session is no longer valid.
    SessionExpired,
    /// A bearer token could not be verified.
    InvalidToken,
    /// The request body failed schema validation.
    ValidationError,
    /// The request is malformed.
    InvalidInput,
    /// A required value was not supplied.
    MissingField,
    /// The data-access collaborator reported a failure.
    DatabaseError,
    /// The requested resource does not exist.
    NotFound,
    /// The record already exists.
    DuplicateRecord,
    /// An unexpected error occurred.
    InternalError,
    /// A collaborator is temporarily unreachable.
    ServiceUnavailable,
    /// The caller exceeded its request allowance.
    RateLimited,
    /// A business operation could not be completed.
    OperationFailed,
    /// The caller lacks permission for the operation.
    InsufficientPermissions,
}

impl ErrorCode {
    /// Every code in the taxonomy, in declaration order.
    pub const ALL: [ErrorCode; 15] = [
        ErrorCode::Unauthorized,
        ErrorCode::InvalidCredentials,
        ErrorCode::SessionExpired,
        ErrorCode::InvalidToken,
        ErrorCode::ValidationError,
        ErrorCode::InvalidInput,
        ErrorCode::MissingField,
        ErrorCode::DatabaseError,
        ErrorCode::NotFound,
        ErrorCode::DuplicateRecord,
        ErrorCode::InternalError,
        ErrorCode::ServiceUnavailable,
        ErrorCode::RateLimited,
        ErrorCode::OperationFailed,
        ErrorCode::InsufficientPermissions,
    ];

    /// Wire representation used in response bodies.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::SessionExpired => "SESSION_EXPIRED",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidInput => "INVALID_INPUT",
            Self::MissingField => "MISSING_FIELD",
            Self::DatabaseError => "DATABASE_ERROR",
            Self::NotFound => "NOT_FOUND",
            Self::DuplicateRecord => "DUPLICATE_RECORD",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::RateLimited => "RATE_LIMITED",
            Self::OperationFailed => "OPERATION_FAILED",
            Self::InsufficientPermissions => "INSUFFICIENT_PERMISSIONS",
        }
    }

    /// Category the code is grouped under.
    pub fn category(self) -> ErrorCategory {
        match self {
            Self::Unauthorized
            | Self::InvalidCredentials
            | Self::SessionExpired
            | Self::InvalidToken => ErrorCategory::Authentication,
            Self::ValidationError | Self::InvalidInput | Self::MissingField => {
                ErrorCategory::Validation
            }
            Self::DatabaseError | Self::NotFound | Self::DuplicateRecord => {
                ErrorCategory::DataAccess
            }
            Self::InternalError | Self::ServiceUnavailable | Self::RateLimited => {
                ErrorCategory::Server
            }
            Self::OperationFailed | Self::InsufficientPermissions => ErrorCategory::BusinessLogic,
        }
    }

    /// Conventional transport status for the code.
    ///
    /// Authentication codes map to 401, validation codes to 400, `NOT_FOUND`
    /// to 404 and `RATE_LIMITED` to 429. Everything else is 500 unless the
    /// throw site overrides it with [`AppError::with_status`].
    pub fn default_status(self) -> u16 {
        match (self, self.category()) {
            (Self::NotFound, _) => 404,
            (Self::RateLimited, _) => 429,
            (_, ErrorCategory::Authentication) => 401,
            (_, ErrorCategory::Validation) => 400,
            _ => 500,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed application error raised where a business or access rule fails.
///
/// ## Invariants
/// - `status` is a valid HTTP status code (100..=599).
///
/// # Examples
/// ```
/// use tripline::domain::{AppError, ErrorCode};
///
/// let err = AppError::new(ErrorCode::NotFound, "trip not found");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.status(), 404);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AppError {
    code: ErrorCode,
    message: String,
    status: u16,
    details: Option<Value>,
}

impl AppError {
    /// Create an error using the code's default status.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            status: code.default_status(),
            details: None,
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to clients.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Transport status carried by this instance.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Supplementary error details for clients.
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Override the status for a code that applies differently in context.
    ///
    /// Values outside 100..=599 are ignored and the current status is kept.
    ///
    /// # Examples
    /// ```
    /// use tripline::domain::{AppError, ErrorCode};
    ///
    /// let err = AppError::new(ErrorCode::DuplicateRecord, "exists").with_status(409);
    /// assert_eq!(err.status(), 409);
    /// ```
    pub fn with_status(mut self, status: u16) -> Self {
        if (100..=599).contains(&status) {
            self.status = status;
        }
        self
    }

    /// Attach structured details to the error.
    ///
    /// # Examples
    /// ```
    /// use tripline::domain::AppError;
    /// use serde_json::json;
    ///
    /// let err = AppError::invalid_input("bad id").with_details(json!({ "field": "id" }));
    /// assert!(err.details().is_some());
    /// ```
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Convenience constructor for [`ErrorCode::Unauthorized`].
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized, message)
    }

    /// Convenience constructor for [`ErrorCode::InvalidInput`].
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::DuplicateRecord`].
    pub fn duplicate(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DuplicateRecord, message)
    }

    /// Convenience constructor for [`ErrorCode::DatabaseError`].
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    /// Convenience constructor for [`ErrorCode::ServiceUnavailable`].
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}
