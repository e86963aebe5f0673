//! Extractors whose failures surface as problem responses
//!
//! Drop-in replacements for axum's `Query` and `Path`: the framework-level
//! rejections they produce are normalized here, at the same central point
//! as domain errors, so callers cannot tell the two apart.

use axum::extract::FromRequestParts;
use axum::extract::path::ErrorKind;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use chassis_core::{Problem, RequestContext};
use serde::de::DeserializeOwned;

use crate::problem::problem_response;

/// Rejection carrying an already-presented problem
#[derive(Debug)]
pub struct ProblemRejection(Problem);

impl IntoResponse for ProblemRejection {
    fn into_response(self) -> Response {
        problem_response(self.0)
    }
}

/// Query extractor producing problem responses on failure
#[derive(Debug, Clone, Copy)]
pub struct Query<T>(pub T);

impl<T, S> FromRequestParts<S> for Query<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ProblemRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match axum::extract::Query::<T>::from_request_parts(parts, state).await {
            Ok(axum::extract::Query(value)) => Ok(Self(value)),
            Err(rejection) => Err(ProblemRejection(query_problem(
                &rejection,
                &context_of(parts),
            ))),
        }
    }
}

/// Path extractor producing problem responses on failure
#[derive(Debug, Clone, Copy)]
pub struct Path<T>(pub T);

impl<T, S> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ProblemRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match axum::extract::Path::<T>::from_request_parts(parts, state).await {
            Ok(axum::extract::Path(value)) => Ok(Self(value)),
            Err(rejection) => Err(ProblemRejection(path_problem(
                &rejection,
                &context_of(parts),
            ))),
        }
    }
}

/// Ambient context placed by the context middleware
///
/// Routers wired without that middleware (embedded use, tests) still get
/// the request path; the trace id is simply absent.
fn context_of(parts: &Parts) -> RequestContext {
    parts
        .extensions
        .get::<RequestContext>()
        .cloned()
        .unwrap_or_else(|| RequestContext::for_path(parts.uri.path()))
}

fn query_problem(rejection: &QueryRejection, context: &RequestContext) -> Problem {
    tracing::debug!(error = %rejection, "query binding rejected");
    Problem::validation_failed(context)
}

fn path_problem(rejection: &PathRejection, context: &RequestContext) -> Problem {
    if let PathRejection::FailedToDeserializePathParams(inner) = rejection {
        // Parse failures carry enough structure for the type-mismatch
        // detail; everything else is presented as a plain binding failure.
        match inner.kind() {
            ErrorKind::ParseErrorAtKey {
                key,
                value,
                expected_type,
            } => return Problem::type_mismatch(value, key, Some(*expected_type), context),
            ErrorKind::ParseError {
                value,
                expected_type,
            } => return Problem::type_mismatch(value, "unknown", Some(*expected_type), context),
            ErrorKind::DeserializeError { key, value, .. } => {
                return Problem::type_mismatch(value, key, None, context);
            }
            _ => {}
        }
    }

    tracing::debug!(error = %rejection, "path binding rejected");
    Problem::validation_failed(context)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::response::IntoResponse as _;
    use axum::{Router, routing};
    use serde::Deserialize;
    use tower::ServiceExt as _;

    use super::*;

    #[derive(Deserialize)]
    struct SearchParams {
        term: String,
    }

    #[derive(Deserialize)]
    struct ItemParams {
        id: u32,
    }

    fn app() -> Router {
        Router::new()
            .route(
                "/items/{id}",
                routing::get(|Path(params): Path<ItemParams>| async move {
                    params.id.to_string().into_response()
                }),
            )
            .route(
                "/search",
                routing::get(|Query(params): Query<SearchParams>| async move {
                    params.term.into_response()
                }),
            )
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn valid_parameters_pass_through() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/items/42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"42");
    }

    #[tokio::test]
    async fn path_type_mismatch_names_parameter_and_type() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/items/abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/problem+json"
        );

        let body = body_json(response).await;
        assert_eq!(
            body["detail"],
            "Invalid value 'abc' for parameter 'id'. Expected type: u32"
        );
        assert_eq!(body["path"], "/items/abc");
    }

    #[tokio::test]
    async fn missing_query_field_is_a_binding_failure() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/search")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["detail"], "Validation failed");
        assert_eq!(body["status"], 400);
    }
}
