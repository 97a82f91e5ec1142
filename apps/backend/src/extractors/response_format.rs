use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::http::header::{HeaderMap, ACCEPT};
use actix_web::{FromRequest, HttpRequest};

use crate::error::AppError;

/// How a response body is rendered, negotiated from the `Accept` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    Html,
    Json,
}

impl ResponseFormat {
    /// HTML when any `Accept` value mentions `text/html`, JSON otherwise.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let wants_html = headers
            .get_all(ACCEPT)
            .filter_map(|value| value.to_str().ok())
            .any(|value| value.contains("text/html"));

        if wants_html {
            Self::Html
        } else {
            Self::Json
        }
    }

    pub fn is_html(self) -> bool {
        self == Self::Html
    }
}

impl FromRequest for ResponseFormat {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Ok(Self::from_headers(req.headers())))
    }
}
