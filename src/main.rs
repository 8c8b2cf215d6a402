//! Rustodoro - a Pomodoro timer for the terminal and the browser
//!
//! This is the main entry point for the rustodoro application.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use rustodoro::{
    api::create_router, config::Config, console, notify::TerminalBell, state::SessionManager,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "rustodoro={},tower_http=info",
            config.log_level()
        ))
        .init();

    if config.web {
        serve(&config).await
    } else {
        console::run(&config, &TerminalBell).await?;
        Ok(())
    }
}

async fn serve(config: &Config) -> anyhow::Result<()> {
    info!("Starting rustodoro web timer");

    let manager = SessionManager::new(Arc::new(TerminalBell));
    let app = create_router(manager);

    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET  /                - Timer page");
    info!("  POST /api/timer/start - Start a session");
    info!("  POST /api/timer/stop  - Stop the active session");
    info!("  GET  /status          - Session snapshot");
    info!("  GET  /health          - Health check");
    info!("  GET  /ws              - Live session updates");

    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
