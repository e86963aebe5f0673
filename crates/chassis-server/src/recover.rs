use std::panic::AssertUnwindSafe;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use chassis_core::{Problem, RequestContext};
use futures_util::FutureExt as _;

use crate::problem::problem_response;

/// Last-resort middleware converting panics into the generic problem
///
/// Anything that escapes a handler without becoming an `AppError` would
/// otherwise reach the transport layer as a dropped connection. Raised
/// application errors never get here; they are presented exhaustively by
/// the handlers themselves.
pub async fn recover_middleware(request: Request, next: Next) -> Response {
    let context = request
        .extensions()
        .get::<RequestContext>()
        .cloned()
        .unwrap_or_else(|| RequestContext::for_path(request.uri().path()));

    match AssertUnwindSafe(next.run(request)).catch_unwind().await {
        Ok(response) => response,
        Err(panic) => problem_response(Problem::unexpected(panic_message(&panic), &context)),
    }
}

/// Extract a printable message from a panic payload
fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    panic.downcast_ref::<String>().map_or_else(
        || {
            panic
                .downcast_ref::<&str>()
                .map_or_else(|| "panic of unknown type".to_owned(), |s| (*s).to_owned())
        },
        Clone::clone,
    )
}
