use http::StatusCode;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::context::RequestContext;
use crate::error::AppError;

/// Fixed detail for internal errors; raw messages stay server-side
const INTERNAL_DETAIL: &str = "An internal error occurred. Please contact support.";

/// Fixed detail for failures outside the declared taxonomy
const UNEXPECTED_DETAIL: &str = "An unexpected error occurred. Please try again later.";

/// Detail for framework-level binding failures
const BINDING_DETAIL: &str = "Validation failed";

/// RFC 7807-style problem document returned to callers
///
/// Built once per failed request and never mutated afterwards. Extension
/// members are kept in a sorted map, so serializing the same problem twice
/// yields byte-identical output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Problem {
    status: u16,
    detail: String,
    path: String,
    #[serde(rename = "traceId", skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,
    #[serde(flatten)]
    extensions: Map<String, Value>,
}

impl Problem {
    fn build(status: StatusCode, detail: impl Into<String>, context: &RequestContext) -> Self {
        Self {
            status: status.as_u16(),
            detail: detail.into(),
            path: context.path.clone(),
            trace_id: context.trace_id.clone().filter(|id| !id.is_empty()),
            extensions: Map::new(),
        }
    }

    fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.extensions.insert(key.to_owned(), value.into());
        self
    }

    /// HTTP status of this problem
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Present an application error
    ///
    /// Total over the taxonomy: every variant maps to exactly one document
    /// shape, with no fallback arm. Emits one error-level log record per
    /// call; client-fault variants log a category summary only, while
    /// `Internal` logs its full causal chain.
    #[must_use]
    pub fn from_error(error: &AppError, context: &RequestContext) -> Self {
        match error {
            AppError::NotFound {
                resource_type,
                identifier,
            } => {
                tracing::error!(kind = error.kind(), path = %context.path, "resource not found");
                Self::build(
                    StatusCode::NOT_FOUND,
                    format!("{resource_type} with identifier '{identifier}' not found"),
                    context,
                )
                .with("resourceType", resource_type.as_str())
                .with("identifier", identifier.as_str())
            }
            AppError::Validation {
                message,
                field_errors,
            } => {
                tracing::error!(kind = error.kind(), path = %context.path, "validation error");
                let problem = Self::build(StatusCode::BAD_REQUEST, message.clone(), context);
                if field_errors.is_empty() {
                    problem
                } else {
                    let fields: Map<String, Value> = field_errors
                        .iter()
                        .map(|(field, message)| (field.clone(), Value::from(message.clone())))
                        .collect();
                    problem.with("fieldErrors", Value::Object(fields))
                }
            }
            AppError::BadRequest { message } => {
                tracing::error!(kind = error.kind(), path = %context.path, "bad request");
                Self::build(StatusCode::BAD_REQUEST, message.clone(), context)
            }
            AppError::Conflict { message } => {
                tracing::error!(kind = error.kind(), path = %context.path, "conflict");
                Self::build(StatusCode::CONFLICT, message.clone(), context)
            }
            AppError::RemoteService { service, message } => {
                tracing::error!(
                    kind = error.kind(),
                    path = %context.path,
                    service = %service,
                    "remote service error"
                );
                Self::build(
                    StatusCode::SERVICE_UNAVAILABLE,
                    format!("Service '{service}' is currently unavailable: {message}"),
                    context,
                )
                .with("service", service.as_str())
            }
            AppError::Database { operation, message } => {
                tracing::error!(
                    kind = error.kind(),
                    path = %context.path,
                    operation = %operation,
                    error = %message,
                    "database error"
                );
                Self::build(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Database operation '{operation}' failed"),
                    context,
                )
                .with("operation", operation.as_str())
            }
            AppError::Internal { message, cause } => {
                match cause {
                    Some(cause) => tracing::error!(
                        kind = error.kind(),
                        path = %context.path,
                        cause = ?cause,
                        "internal error: {message}"
                    ),
                    None => tracing::error!(
                        kind = error.kind(),
                        path = %context.path,
                        "internal error: {message}"
                    ),
                }
                Self::build(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_DETAIL, context)
            }
        }
    }

    /// Present a framework-level binding failure
    ///
    /// Covers malformed query strings and undeserializable bodies, so
    /// callers cannot tell a framework rejection from a domain validation
    /// error.
    #[must_use]
    pub fn validation_failed(context: &RequestContext) -> Self {
        tracing::error!(path = %context.path, "request binding failed");
        Self::build(StatusCode::BAD_REQUEST, BINDING_DETAIL, context)
    }

    /// Present a parameter type mismatch
    ///
    /// `expected_type` falls back to `"unknown"` when the target type
    /// cannot be determined.
    #[must_use]
    pub fn type_mismatch(
        value: &str,
        name: &str,
        expected_type: Option<&str>,
        context: &RequestContext,
    ) -> Self {
        let expected = expected_type.unwrap_or("unknown");
        tracing::error!(path = %context.path, parameter = name, "parameter type mismatch");
        Self::build(
            StatusCode::BAD_REQUEST,
            format!("Invalid value '{value}' for parameter '{name}'. Expected type: {expected}"),
            context,
        )
    }

    /// Present a failure outside the declared taxonomy
    ///
    /// The one legitimate catch-all: the caller gets a fixed non-leaking
    /// message while the original failure is logged in full.
    #[must_use]
    pub fn unexpected(failure: impl std::fmt::Display, context: &RequestContext) -> Self {
        tracing::error!(path = %context.path, failure = %failure, "unhandled failure");
        Self::build(StatusCode::INTERNAL_SERVER_ERROR, UNEXPECTED_DETAIL, context)
    }
}
