//! Per-request context middleware.
//!
//! Generates a trace id, negotiates the response format from the `Accept`
//! header, and runs the downstream service inside both a tracing span and
//! the task-local [`RequestCtx`](crate::request_ctx::RequestCtx). The trace
//! id is also stored in the request extensions as a `String` and echoed in
//! the `x-request-id` response header.
//!
//! Wire it outermost so every other middleware sees the trace id:
//!
//! App::new()
//!     .wrap(StructuredLogger)
//!     .wrap(RequestContext)
//!     // routes...

use std::future::{ready, Ready};

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header;
use actix_web::{Error, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::{info_span, Instrument};
use uuid::Uuid;

use crate::extractors::ResponseFormat;
use crate::request_ctx::{with_request_ctx, RequestCtx};

#[derive(Clone, Default)]
pub struct RequestContext;

impl<S, B> Transform<S, ServiceRequest> for RequestContext
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestContextMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestContextMiddleware { service }))
    }
}

pub struct RequestContextMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestContextMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let trace_id = Uuid::new_v4().to_string();
        let format = ResponseFormat::from_headers(req.headers());

        req.extensions_mut().insert(trace_id.clone());

        let span = info_span!(
            "request",
            trace_id = %trace_id,
            method = %req.method(),
            path = %req.path()
        );

        let ctx = RequestCtx {
            trace_id: trace_id.clone(),
            format,
        };
        let fut = self.service.call(req);

        Box::pin(async move {
            let mut res = with_request_ctx(ctx, fut.instrument(span)).await?;

            res.headers_mut().insert(
                header::HeaderName::from_static("x-request-id"),
                header::HeaderValue::from_str(&trace_id)
                    .unwrap_or_else(|_| header::HeaderValue::from_static("invalid-uuid")),
            );

            Ok(res)
        })
    }
}
