use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use chassis_core::RequestContext;

/// Header carrying the per-request correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Middleware that attaches a [`RequestContext`] to the request
///
/// Propagates an incoming `x-request-id`, fabricating one when absent, and
/// echoes it on the response. Handlers and the presenter read the context
/// from request extensions instead of any ambient global state.
pub async fn request_context_middleware(mut request: Request, next: Next) -> Response {
    let trace_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map_or_else(|| uuid::Uuid::new_v4().to_string(), ToOwned::to_owned);

    let context = RequestContext::new(request.uri().path(), trace_id.clone());
    request.extensions_mut().insert(context);

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&trace_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}
