//! Task-local request context for web requests.
//!
//! Holds the trace id and negotiated response format of the request being
//! served so error responses can be rendered in the right format without
//! access to the request itself. Established by the
//! [`RequestContext`](crate::middleware::RequestContext) middleware.

use tokio::task_local;

use crate::extractors::response_format::ResponseFormat;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestCtx {
    pub trace_id: String,
    pub format: ResponseFormat,
}

task_local! {
    static REQUEST_CTX: RequestCtx;
}

/// Get the trace_id for the current task.
/// Returns "unknown" outside of a request context.
pub fn trace_id() -> String {
    REQUEST_CTX
        .try_with(|ctx| ctx.trace_id.clone())
        .unwrap_or_else(|_| "unknown".to_string())
}

/// Negotiated response format for the current task; JSON outside of a
/// request context.
pub fn response_format() -> ResponseFormat {
    REQUEST_CTX
        .try_with(|ctx| ctx.format)
        .unwrap_or(ResponseFormat::Json)
}

/// Run a future within a request context.
pub async fn with_request_ctx<F, R>(ctx: RequestCtx, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    REQUEST_CTX.scope(ctx, future).await
}
