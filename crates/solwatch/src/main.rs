mod cli;
mod server;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use eyre::{eyre, WrapErr};

use solwatch_core::rpc::{HttpRpcClient, RpcClientConfig, SolanaRpc};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Load `.env` before parsing so its values act as env fallbacks.
    let dotenv = dotenvy::dotenv();
    let args = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .init();

    if let Ok(path) = dotenv {
        tracing::info!(path = %path.display(), "loaded environment file");
    }

    if args.detail_concurrency == 0 {
        return Err(eyre!("--detail-concurrency must be at least 1"));
    }

    let rpc_config = RpcClientConfig::new(&args.rpc_url)
        .with_timeout(Duration::from_secs(args.api_timeout))
        .with_max_retries(args.max_retries)
        .with_requests_per_second(args.rpc_requests_per_second);
    let rpc: Arc<dyn SolanaRpc> =
        Arc::new(HttpRpcClient::new(&rpc_config).wrap_err("configure Solana RPC client")?);

    tracing::info!(
        timeout_secs = args.api_timeout,
        max_retries = args.max_retries,
        detail_concurrency = args.detail_concurrency,
        "Solana RPC client ready"
    );

    let state = server::AppState {
        rpc,
        detail_concurrency: args.detail_concurrency,
    };
    let router = server::build_router(state);

    let bind_addr = format!("{}:{}", args.bind, args.port);
    if args.bind == "0.0.0.0" {
        tracing::warn!("server is bound to 0.0.0.0, it is accessible from the network");
    }

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .context("bind TCP listener")?;

    tracing::info!("listening on {bind_addr}");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("run HTTP server")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
