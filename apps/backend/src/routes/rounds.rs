use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::extractors::ResponseFormat;
use crate::routes::respond;
use crate::state::app_state::AppState;

pub async fn get_round(
    path: web::Path<String>,
    format: ResponseFormat,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let round = app_state.rounds.load_round(&path).await?;
    Ok(respond(format, &round))
}
