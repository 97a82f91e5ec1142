use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::extractors::ResponseFormat;
use crate::routes::respond;
use crate::state::app_state::AppState;

/// An unknown game id yields an empty list, not an error.
pub async fn get_game(
    path: web::Path<String>,
    format: ResponseFormat,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let game = app_state.games.list_rounds(&path).await?;
    Ok(respond(format, &game))
}
