use std::future::Future;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tokio::signal;
use tokio_util::sync::CancellationToken;

pub mod cli;
pub mod logging;
pub mod profile;
pub mod routes;
pub mod state;
pub mod storage;


use self::cli::Cli;
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = profile::load_config(&cli)?;
    logging::init(&config.log_level, cli.log_json);

    let state = Arc::new(AppState::new(config).await?);

    let cancel = CancellationToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        signal::ctrl_c().await.expect("failed to listen for ctrl+c");
        tracing::info!("Shutdown requested");
        ctrl_c.cancel();
    });

    run(state, cancel.cancelled_owned()).await
}

pub async fn run(state: Arc<AppState>, shutdown: impl Future<Output = ()> + Send + 'static) -> anyhow::Result<()> {
    let addr = state.config.server.address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("Serving \"Crossword Helper\" at http://{}", addr);
    tracing::info!("Help languages: {}", state.service.languages().join(", "));

    axum::serve(listener, routes::router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .context("server exited")?;

    tracing::info!("Server stopped");
    Ok(())
}
