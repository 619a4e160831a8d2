// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use sheetrow_node::config::NodeConfig;
use sheetrow_node::network::SheetsClient;
use sheetrow_node::server::{build_router, ConcreteStore, SharedStore};
use sheetrow_node::telemetry::init_telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_telemetry()?;

    let cfg = NodeConfig::from_env()?;
    tracing::info!("Initializing sheetrow node with config: {:?}", cfg);

    let client = SheetsClient::new(&cfg.sheets)?;
    let store: SharedStore<SheetsClient> =
        Arc::new(ConcreteStore::new(client, cfg.sheets.layout.clone()));

    let app = build_router(store, &cfg.public_dir);

    let listener = TcpListener::bind(cfg.bind_target()).await?;
    tracing::info!("Server running at http://{}:{}", cfg.host, cfg.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
