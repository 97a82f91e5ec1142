use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::DbConfig;
use crate::error::AppError;

/// Connect to the history database described by `config`.
///
/// The archive only reads, so no migrations are run.
pub async fn connect_db(config: &DbConfig) -> Result<DatabaseConnection, AppError> {
    let mut options = ConnectOptions::new(config.url());
    options
        .max_connections(config.max_connections)
        .sqlx_logging(false);

    let conn = Database::connect(options)
        .await
        .map_err(|e| AppError::config(format!("Unable to connect to db: {e}")))?;

    info!(
        host = %config.host,
        port = config.port,
        database = %config.name,
        "Database connected"
    );
    Ok(conn)
}
