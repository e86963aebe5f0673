use axum::Extension;
use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use chassis_core::RequestContext;

use crate::AppState;
use crate::problem::error_response;

/// Handle `GET /astro`, proxying the astronauts feed
pub async fn astro_handler(
    State(state): State<AppState>,
    Extension(context): Extension<RequestContext>,
) -> Response {
    match state.astro.astronauts().await {
        Ok(astronauts) => Json(astronauts).into_response(),
        Err(e) => error_response(&e, &context),
    }
}
