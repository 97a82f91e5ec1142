use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{web, HttpResponse};
use tracing::error;

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::ResponseFormat;
use crate::render::deck_csv;
use crate::routes::respond;
use crate::state::app_state::AppState;

pub async fn get_deck(
    path: web::Path<String>,
    format: ResponseFormat,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let deck = app_state.decks.load_deck(&path).await?;
    Ok(respond(format, &deck))
}

/// `GET /deck/{id}/download`: the deck as a CSV attachment named after the
/// requested code.
pub async fn download_deck(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let code = path.into_inner();
    let deck = app_state.decks.load_deck(&code).await?;

    let body = deck_csv(&deck).map_err(|e| {
        error!(deck_code = %code, error = %e, "Deck CSV export failed");
        AppError::internal(ErrorCode::ExportFailed, "Could not prepare download")
    })?;

    Ok(HttpResponse::Ok()
        .content_type("text/csv")
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(format!("{code}.csv"))],
        })
        .body(body))
}
