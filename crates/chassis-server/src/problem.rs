use axum::Json;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use chassis_core::{AppError, Problem, RequestContext};

/// Content type for problem documents
pub const PROBLEM_CONTENT_TYPE: &str = "application/problem+json";

/// Serialize a presented problem as an HTTP response
#[must_use]
pub fn problem_response(problem: Problem) -> Response {
    let status = problem.status_code();
    (
        status,
        [(header::CONTENT_TYPE, PROBLEM_CONTENT_TYPE)],
        Json(problem),
    )
        .into_response()
}

/// Present an application error raised by a handler
///
/// Handlers never catch an [`AppError`] locally; every one funnels through
/// here so callers always see the same document shape.
#[must_use]
pub fn error_response(error: &AppError, context: &RequestContext) -> Response {
    problem_response(Problem::from_error(error, context))
}
