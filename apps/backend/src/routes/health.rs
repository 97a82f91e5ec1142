use actix_web::{web, HttpResponse};
use serde::Serialize;
use time::OffsetDateTime;
use tracing::warn;

use crate::error::AppError;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    app_version: &'static str,
    db: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    db_error: Option<String>,
    time: String,
}

pub async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let time = OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());

    let (status, db, db_error) = match app_state.repo().ping().await {
        Ok(()) => ("ok", "ok", None),
        Err(e) => {
            warn!(error = %e, "Health check could not reach the database");
            ("degraded", "error", Some(format!("DB query failed: {e}")))
        }
    };

    Ok(HttpResponse::Ok().json(HealthResponse {
        status,
        app_version: env!("CARGO_PKG_VERSION"),
        db,
        db_error,
        time,
    }))
}
