use std::time::Duration;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::server::{config::Config, error::AppError, template::Templates};

const DEFAULT_LOG_FILTER: &str = "airboard=info,tower_http=info";

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the default filter. Calling this more than once is
/// harmless; later calls leave the first subscriber in place.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .try_init();
}

/// Connects to the bookings database.
///
/// Establishes a connection pool using the connection string from configuration. The
/// pool size bounds how many seat queries the calculation runs at once. On PostgreSQL
/// the configured schema becomes the search path, so the entity table names resolve
/// inside it without qualification. No migrations are run: the schema is owned by the
/// database, not this server.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL and pool settings
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database pool
/// - `Err(AppError::DbErr)` - Failed to connect to database
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(config.database_max_connections)
        .connect_timeout(Duration::from_secs(10))
        .set_schema_search_path(config.database_schema.clone())
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;

    tracing::info!(
        "Connected to database (schema {}, max {} connections)",
        config.database_schema,
        config.database_max_connections
    );

    Ok(db)
}

/// Loads the page templates, failing startup if any is missing or malformed.
pub fn load_templates(config: &Config) -> Result<Templates, AppError> {
    let templates = Templates::load(&config.template_dir)?;

    tracing::info!("Loaded templates from {}", config.template_dir);

    Ok(templates)
}

/// Resolves once the process receives Ctrl-C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutdown signal received");
}
