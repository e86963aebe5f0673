/// Per-request context threaded from the server layer to the presenter
///
/// Built once per request by middleware and passed explicitly, so the
/// presenter stays pure and testable. The `trace_id` is propagated or
/// fabricated upstream; nothing downstream ever creates one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    /// Path of the request being handled
    pub path: String,
    /// Correlation id for cross-system log correlation, if one is active
    pub trace_id: Option<String>,
}

impl RequestContext {
    /// Create a context with a trace id
    #[must_use]
    pub fn new(path: impl Into<String>, trace_id: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            trace_id: Some(trace_id.into()),
        }
    }

    /// Create a context without an active trace id
    #[must_use]
    pub fn for_path(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            trace_id: None,
        }
    }
}
