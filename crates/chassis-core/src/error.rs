use http::StatusCode;
use indexmap::IndexMap;
use thiserror::Error;

/// Application-level failures, split by fault attribution
///
/// The set of variants is closed on purpose: every `match` over it in this
/// crate is written without a wildcard arm, so adding a variant without
/// updating the presenter is a compile error.
#[derive(Debug, Error)]
pub enum AppError {
    /// A requested resource does not exist
    #[error("{resource_type} with identifier '{identifier}' not found")]
    NotFound {
        resource_type: String,
        identifier: String,
    },

    /// Input failed validation, optionally with per-field detail
    #[error("{message}")]
    Validation {
        message: String,
        field_errors: IndexMap<String, String>,
    },

    /// The request is malformed in a way not tied to a specific field
    #[error("{message}")]
    BadRequest { message: String },

    /// The request conflicts with existing state
    #[error("{message}")]
    Conflict { message: String },

    /// An upstream collaborator failed or is unreachable
    #[error("service '{service}' is unavailable: {message}")]
    RemoteService { service: String, message: String },

    /// Unexpected internal failure; the raw message never reaches callers
    #[error("{message}")]
    Internal {
        message: String,
        cause: Option<anyhow::Error>,
    },

    /// A database operation failed
    #[error("database operation '{operation}' failed: {message}")]
    Database { operation: String, message: String },
}

/// Fault attribution for an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Caused by the caller's input (4xx)
    Client,
    /// Caused by the system or its collaborators (5xx)
    Server,
}

impl AppError {
    /// A resource of `resource_type` was not found under `identifier`
    pub fn not_found(resource_type: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type: resource_type.into(),
            identifier: identifier.into(),
        }
    }

    /// Validation failed with a single overall message
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field_errors: IndexMap::new(),
        }
    }

    /// Validation failed with field-level detail
    pub fn validation_fields(
        message: impl Into<String>,
        field_errors: IndexMap<String, String>,
    ) -> Self {
        Self::Validation {
            message: message.into(),
            field_errors,
        }
    }

    /// The request is malformed
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// The request conflicts with existing state
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// A call to the named remote service failed
    pub fn remote_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::RemoteService {
            service: service.into(),
            message: message.into(),
        }
    }

    /// Unexpected internal failure
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            cause: None,
        }
    }

    /// Unexpected internal failure wrapping its originating error
    pub fn internal_with_cause(message: impl Into<String>, cause: anyhow::Error) -> Self {
        Self::Internal {
            message: message.into(),
            cause: Some(cause),
        }
    }

    /// A database operation failed
    pub fn database(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Database {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Whether this error is the caller's fault or the system's
    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::NotFound { .. }
            | Self::Validation { .. }
            | Self::BadRequest { .. }
            | Self::Conflict { .. } => Category::Client,
            Self::RemoteService { .. } | Self::Internal { .. } | Self::Database { .. } => {
                Category::Server
            }
        }
    }

    /// HTTP status code for this error
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Validation { .. } | Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::RemoteService { .. } => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal { .. } | Self::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Static snake_case label for structured logging
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::Validation { .. } => "validation",
            Self::BadRequest { .. } => "bad_request",
            Self::Conflict { .. } => "conflict",
            Self::RemoteService { .. } => "remote_service",
            Self::Internal { .. } => "internal",
            Self::Database { .. } => "database",
        }
    }
}
