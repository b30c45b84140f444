//! Data Analysis Portfolio - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod app;
mod catalog;
mod constants;
mod dataset;
mod error;
mod render;
mod settings;
mod theme;
mod types;
mod ui;
mod utils;

use app::AppState;
use catalog::Catalog;
use constants::*;
use settings::Settings;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info, warn};
use utils::get_data_dir;

/// Initialize console and file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "data-portfolio.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,data_portfolio=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false))
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let data_dir = get_data_dir();
    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "Data Analysis Portfolio starting");

    let mut settings = Settings::load(&data_dir);
    settings.apply_env_overrides(|key| std::env::var(key).ok());

    let base_dir = std::env::current_dir()?;
    let projects_dir = settings.projects_dir_in(&base_dir);
    if projects_dir.is_dir() {
        info!(path = %projects_dir.display(), "Serving projects");
    } else {
        warn!(path = %projects_dir.display(), "Projects folder missing, portfolio starts empty");
    }

    let addr = SocketAddr::new(settings.host.parse()?, settings.port);
    let open_browser = settings.open_browser;

    let state = AppState::new(Catalog::new(projects_dir), settings);
    let router = app::create_router(state);

    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "Listening");

    if open_browser {
        let url = format!("http://localhost:{}", addr.port());
        if let Err(e) = open::that(&url) {
            warn!(error = %e, url = %url, "Failed to open browser");
        }
    }

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolve on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => error!(error = %e, "Failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
