//! Customer support ticketing API
//!
//! (c) Softlandia 2025

use ticket_support_api::api;
use ticket_support_api::config::Config;
use ticket_support_api::core::traits::KnowledgeService;
use ticket_support_api::infrastructure::database::DatabaseConnection;

use axum::Router;
use axum::http::Method;
use di_axum::RouterServiceProviderExtensions;
use anyhow::anyhow;
use log::{error, info};
use tokio::runtime::{Builder, Runtime};
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;
    let runtime: Runtime = Builder::new_multi_thread().enable_all().build()?;

    runtime.block_on(web_server_task(config))
}

async fn web_server_task(config: Config) -> anyhow::Result<()> {
    let pool = DatabaseConnection::connect(&config.database_url).await?;
    DatabaseConnection::use_pool(pool);

    let provider = ticket_support_api::services()
        .build_provider()
        .map_err(|e| anyhow!("invalid service registrations: {e}"))?;

    let seeded = provider
        .get_required::<dyn KnowledgeService>()
        .seed_if_empty()
        .await?;
    if seeded == 0 {
        info!("knowledge base already populated, skipping seed");
    }

    let allow_origin = match config.allowed_origins {
        Some(origins) => AllowOrigin::list(origins),
        None => AllowOrigin::from(Any),
    };

    let app = Router::new()
        .nest("/api", api::router())
        .layer(
            ServiceBuilder::new().layer(
                CorsLayer::new()
                    .allow_headers(Any)
                    .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                    .allow_origin(allow_origin),
            ),
        )
        .with_provider(provider);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Shutting down...");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("failed to listen for ctrl-c: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("failed to listen for SIGTERM: {e}");
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
}
