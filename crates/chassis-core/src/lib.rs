//! Shared kernel for services built on the chassis scaffold
//!
//! Holds the application error taxonomy, the per-request context, and the
//! problem presenter. The server layer turns presented problems into actual
//! HTTP responses, keeping this crate decoupled from axum.

pub mod context;
pub mod error;
pub mod problem;

pub use context::RequestContext;
pub use error::{AppError, Category};
pub use problem::Problem;
