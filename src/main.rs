use std::net::SocketAddr;

use survey_service::{
    app,
    config::{Config, LogFormat},
    database::pool::{create_pool, run_migrations},
    AppState,
};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing(config.log_format);

    if config.uses_default_jwt_secret() {
        warn!("JWT_SECRET_KEY is not set, tokens are signed with the built-in default secret");
    }

    let pool = create_pool(&config).await?;
    run_migrations(&pool).await?;
    info!(database_url = %config.database_url, "database ready");

    let addr: SocketAddr = config.server_address.parse()?;
    let app = app(AppState::new(pool, config));

    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("survey_service=info,tower_http=info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = ?e, "failed to listen for shutdown signal");
    }
    info!("shutting down");
}
