//! Error codes attached to log events.
//!
//! Clients only ever receive the `{"error": ...}` envelope; the integer and
//! string forms below exist so operators can filter and aggregate failures.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ValidationError;
//! assert_eq!(code.as_str(), "VALIDATION_ERROR");
//! assert_eq!(code.code(), 1001);
//! ```

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request body failed a validation rule
    ValidationError,

    /// Path parameter is not a UUID
    InvalidUuid,

    /// Request body could not be read as JSON of the expected shape
    JsonExtraction,

    /// Requested resource or route was not found
    NotFound,

    /// Generic client error raised by a domain rule
    BadRequest,

    // Server errors
    /// An unexpected internal server error occurred
    InternalError,

    /// A dependency (database, ...) is not available
    ServiceUnavailable,

    /// A handler panicked while serving the request
    HandlerPanic,

    // Database errors (2000-2999)
    /// Query or connection error reported by the database layer
    DatabaseError,

    /// Connection pool exhausted or closed
    DatabaseConnection,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidUuid => "INVALID_UUID",
            Self::JsonExtraction => "JSON_EXTRACTION",
            Self::NotFound => "NOT_FOUND",
            Self::BadRequest => "BAD_REQUEST",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::HandlerPanic => "HANDLER_PANIC",
            Self::DatabaseError => "DATABASE_ERROR",
            Self::DatabaseConnection => "DATABASE_CONNECTION",
        }
    }

    /// Integer code for structured logs.
    ///
    /// - 1000-1999: request and server errors
    /// - 2000-2999: database errors
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidUuid => 1002,
            Self::JsonExtraction => 1003,
            Self::NotFound => 1004,
            Self::InternalError => 1005,
            Self::ServiceUnavailable => 1011,
            Self::BadRequest => 1012,
            Self::HandlerPanic => 1013,
            Self::DatabaseError => 2003,
            Self::DatabaseConnection => 2013,
        }
    }

    /// Message sent to clients when the error carries no message of its own.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::InvalidUuid => "Invalid UUID",
            Self::JsonExtraction => "Invalid request body",
            Self::NotFound => "Not Found",
            Self::BadRequest => "Bad Request",
            Self::InternalError
            | Self::HandlerPanic
            | Self::DatabaseError
            | Self::DatabaseConnection => "Internal Server Error",
            Self::ServiceUnavailable => "Service Unavailable",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_string_representation() {
        assert_eq!(ErrorCode::ValidationError.as_str(), "VALIDATION_ERROR");
        assert_eq!(ErrorCode::NotFound.to_string(), "NOT_FOUND");
    }

    #[test]
    fn test_error_code_integer_codes() {
        assert_eq!(ErrorCode::ValidationError.code(), 1001);
        assert_eq!(ErrorCode::DatabaseError.code(), 2003);
    }

    #[test]
    fn test_server_side_codes_share_the_generic_message() {
        for code in [
            ErrorCode::InternalError,
            ErrorCode::HandlerPanic,
            ErrorCode::DatabaseError,
            ErrorCode::DatabaseConnection,
        ] {
            assert_eq!(code.default_message(), "Internal Server Error");
        }
    }
}
