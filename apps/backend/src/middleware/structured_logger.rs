//! Access log for archive requests.
//!
//! Emits one `request_completed` event per request. The trace id and the
//! negotiated format are read from the request context, so this middleware
//! must be wrapped inside [`RequestContext`](super::RequestContext). The
//! matched route pattern (`/deck/{id}`) is logged next to the raw path so
//! lookups of different ids group together.

use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::Error as ActixError;
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn, Level};

use crate::request_ctx;

pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let method = req.method().to_string();
        let path = req.path().to_string();

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            let (status, route) = match &result {
                Ok(res) => (res.status(), res.request().match_pattern()),
                Err(err) => (err.as_response_error().status_code(), None),
            };

            CompletedRequest {
                method,
                path,
                route: route.unwrap_or_else(|| "unmatched".to_string()),
                status,
                duration_us: u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX),
            }
            .log();

            result
        })
    }
}

struct CompletedRequest {
    method: String,
    path: String,
    route: String,
    status: StatusCode,
    duration_us: u64,
}

impl CompletedRequest {
    fn log(&self) {
        let trace_id = request_ctx::trace_id();
        let format = if request_ctx::response_format().is_html() {
            "html"
        } else {
            "json"
        };
        let status = self.status.as_u16();

        let level = level_for(self.status);
        if level == Level::ERROR {
            error!(http.method=%self.method, url.path=%self.path, http.route=%self.route, http.status_code=status, http.format=format, duration_us=self.duration_us, trace_id=%trace_id, message="request_completed");
        } else if level == Level::WARN {
            warn!(http.method=%self.method, url.path=%self.path, http.route=%self.route, http.status_code=status, http.format=format, duration_us=self.duration_us, trace_id=%trace_id, message="request_completed");
        } else {
            info!(http.method=%self.method, url.path=%self.path, http.route=%self.route, http.status_code=status, http.format=format, duration_us=self.duration_us, trace_id=%trace_id, message="request_completed");
        }
    }
}

/// 5xx at error, 4xx at warn, everything else at info.
fn level_for(status: StatusCode) -> Level {
    if status.is_server_error() {
        Level::ERROR
    } else if status.is_client_error() {
        Level::WARN
    } else {
        Level::INFO
    }
}
