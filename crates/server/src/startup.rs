use std::{net::SocketAddr, time::Duration};

use axum::http::{header, HeaderValue, Method};
use configs::{AppConfig, CorsConfig};
use migration::MigratorTrait;
use service::password::AuthConfig;
use tokio::signal;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{error, info};

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

/// CORS for the single configured front-end origin (`*` allows any).
/// Other origins get no `access-control-allow-origin` header.
pub fn build_cors(cfg: &CorsConfig) -> Result<CorsLayer, StartupError> {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);
    let origin = cfg.allowed_origin.trim();
    if origin == "*" {
        return Ok(base.allow_origin(Any));
    }
    let value = HeaderValue::from_str(origin)
        .map_err(|e| StartupError::InvalidConfig(format!("cors.allowed_origin: {e}")))?;
    Ok(base.allow_origin(AllowOrigin::list([value])))
}

/// Connect, migrate, build the app and serve until SIGINT/SIGTERM.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    if cfg.database.auto_migrate {
        migration::Migrator::up(&db, None).await?;
        info!(event = "migrations_applied", "database schema up to date");
    }

    let state = AppState::with_database(db, AuthConfig::default());
    let cors = build_cors(&cfg.cors)?;
    let app = routes::build_router(state, cors, Duration::from_secs(cfg.server.request_timeout_secs));

    let addr: SocketAddr = cfg.bind_addr().parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, origin = %cfg.cors.allowed_origin, event = "listening", "starting server");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!(event = "stopped", "in-flight requests drained");
    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!(event = "shutdown_signal", "shutting down gracefully");
}
