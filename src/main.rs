use std::sync::Arc;

use anyhow::Context;

use todo_api::{config::AppConfig, logging::init_tracing, routes::app, state::AppState, store};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!("server failed: {err:?}");
        eprintln!("server failed: {err:?}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cfg = AppConfig::from_env()?;
    init_tracing(&cfg.logging);

    // no listener until the store is reachable
    let store = store::connect(&cfg.database)
        .await
        .context("failed to connect todo store")?;

    let addr = cfg.general.bind_addr()?;

    let state = AppState::new(cfg, store);
    let app = app(Arc::clone(&state));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
