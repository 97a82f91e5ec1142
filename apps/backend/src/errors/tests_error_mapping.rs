// Unit tests for error mapping - pure domain logic without HTTP or database dependencies
use actix_web::body::to_bytes;
use actix_web::ResponseError;

use crate::errors::domain::{DomainError, NotFoundKind, QueryStage};
use crate::extractors::ResponseFormat;
use crate::request_ctx::{with_request_ctx, RequestCtx};
use crate::{AppError, ErrorCode};

#[test]
fn maps_invalid_format_to_400() {
    let de = DomainError::invalid_format("cardcast deck IDs must be 5 characters long");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::InvalidDeckId);
    assert_eq!(app.status().as_u16(), 400);
    assert_eq!(app.detail(), "cardcast deck IDs must be 5 characters long");
}

#[test]
fn maps_not_found_per_kind() {
    let app: AppError = DomainError::not_found(NotFoundKind::Deck, "cardcast deck not found").into();
    assert_eq!(app.code().as_str(), "DECK_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);

    let app: AppError = DomainError::not_found(NotFoundKind::Round, "gone").into();
    assert_eq!(app.code().as_str(), "ROUND_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);
}

#[test]
fn maps_internal_to_500() {
    let de = DomainError::query_failed(QueryStage::GameRounds, "g-1", "timeout");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::DbError);
    assert_eq!(app.status().as_u16(), 500);
    assert_eq!(app.detail(), "Unable to query game rounds for id g-1: timeout");
}

#[test]
fn config_error_is_500() {
    let app = AppError::config("missing ARCHIVE_DB".to_string());
    assert_eq!(app.code(), ErrorCode::ConfigError);
    assert_eq!(app.status().as_u16(), 500);
    assert!(app.to_string().contains("missing ARCHIVE_DB"));
}

#[actix_web::test]
async fn json_body_carries_message_and_trace_header() {
    let ctx = RequestCtx {
        trace_id: "trace-json".to_string(),
        format: ResponseFormat::Json,
    };
    let resp = with_request_ctx(ctx, async {
        AppError::not_found(ErrorCode::DeckNotFound, "cardcast deck not found").error_response()
    })
    .await;

    assert_eq!(resp.status().as_u16(), 404);
    assert_eq!(resp.headers().get("x-trace-id").unwrap(), "trace-json");

    let bytes = to_bytes(resp.into_body()).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, serde_json::json!({"error": "cardcast deck not found"}));
}

#[actix_web::test]
async fn html_clients_get_plain_text() {
    let ctx = RequestCtx {
        trace_id: "trace-html".to_string(),
        format: ResponseFormat::Html,
    };
    let resp = with_request_ctx(ctx, async {
        AppError::bad_request(ErrorCode::InvalidDeckId, "bad <id>").error_response()
    })
    .await;

    assert_eq!(resp.status().as_u16(), 400);
    let content_type = resp.headers().get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("text/plain"));

    let bytes = to_bytes(resp.into_body()).await.unwrap();
    assert_eq!(&bytes[..], b"bad <id>");
}
