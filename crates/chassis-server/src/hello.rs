use axum::Json;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::extract::Query;

/// Fallback greeting target
const DEFAULT_NAME: &str = "World";

/// Query parameters for `GET /hello`
#[derive(Debug, Deserialize)]
pub struct HelloParams {
    name: Option<String>,
}

/// Greeting returned by `GET /hello`
#[derive(Debug, Serialize)]
pub struct HelloResponse {
    message: String,
    timestamp: String,
    name: String,
}

/// Handle `GET /hello`
pub async fn hello_handler(Query(params): Query<HelloParams>) -> Response {
    let name = params.name.unwrap_or_else(|| DEFAULT_NAME.to_owned());

    tracing::info!(%name, "processing hello request");

    let response = HelloResponse {
        message: format!("Hello, {name}!"),
        timestamp: jiff::Timestamp::now().to_string(),
        name,
    };

    Json(response).into_response()
}
