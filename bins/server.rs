use std::process::ExitCode;

use configs::AppConfig;
use tracing::{error, info};

fn main() -> ExitCode {
    // .env before logging so RUST_LOG / LOG_FORMAT from it apply
    dotenvy::dotenv().ok();
    common::utils::logging::init_logging_from_env();

    std::panic::set_hook(Box::new(|info| {
        error!(event = "panic", pid = std::process::id(), message = %info, "unhandled panic");
    }));

    let cfg = match AppConfig::load_or_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(event = "config_invalid", error = %e, "refusing to start");
            return ExitCode::FAILURE;
        }
    };

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(workers) = cfg.server.worker_threads {
        builder.worker_threads(workers);
    }
    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        event = "start",
        version = env!("CARGO_PKG_VERSION"),
        pid = std::process::id(),
        workers = ?cfg.server.worker_threads,
        bind = %cfg.bind_addr(),
        "saved-locations server starting"
    );

    match rt.block_on(server::run(cfg)) {
        Ok(()) => {
            info!(event = "stop", "server stopped");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(event = "run_failed", error = %e, "server exited with error");
            ExitCode::FAILURE
        }
    }
}
