//! Payroute Server - REST API for the branch-network route engine.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use payroute_core::{BranchStore, NetworkConfig};
use payroute_server::{router, AppState};

/// Payroute Server - cheapest routes over a live branch network
#[derive(Parser, Debug)]
#[command(name = "payroute-server")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the network configuration file
    #[arg(short, long, default_value = "payroute.toml", env = "PAYROUTE_CONFIG")]
    config: String,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0", env = "PAYROUTE_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8080", env = "PAYROUTE_PORT")]
    port: u16,
}

/// Build CORS layer from environment configuration.
fn build_cors_layer() -> CorsLayer {
    match std::env::var("PAYROUTE_CORS_ORIGIN") {
        Ok(origins) => {
            use tower_http::cors::AllowOrigin;
            let origin_list: Vec<_> = origins
                .split(',')
                .filter_map(|o| o.trim().parse().ok())
                .collect();
            tracing::info!("CORS: restricted to {} origin(s)", origin_list.len());
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origin_list))
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any)
        }
        Err(_) => {
            tracing::warn!(
                "CORS: permissive (dev mode). Set PAYROUTE_CORS_ORIGIN to restrict origins."
            );
            CorsLayer::permissive()
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    tracing::info!("Starting Payroute server...");
    tracing::info!("Network configuration: {}", args.config);

    let config = NetworkConfig::load(&args.config)
        .with_context(|| format!("failed to load network configuration from {}", args.config))?;

    let store = BranchStore::new();
    config
        .seed(&store)
        .context("invalid network configuration")?;
    tracing::info!(branches = store.branch_count(), "branch network ready");

    let state = Arc::new(AppState { store });

    let app = router(state)
        .layer(build_cors_layer())
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Payroute server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
