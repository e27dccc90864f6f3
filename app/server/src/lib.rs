pub mod api;
pub mod infra;

#[cfg(feature = "openapi")]
pub mod openapi;

// Re-export domain crate modules
pub use domain::config;
pub use domain::models;
pub use domain::repositories;
pub use domain::validation;

// Re-export infra modules
pub use infra::banner;
pub use infra::cors;
pub use infra::db;
pub use infra::error;
pub use infra::state;

use std::net::SocketAddr;

use axum::Router;
use tower_http::trace::TraceLayer;
#[cfg(feature = "openapi")]
use utoipa_scalar::{Scalar, Servable};

// Re-export commonly used types
pub use api::create_router;
pub use infra::{
    cors_layer, create_pool, default_data_path, print_banner, AppError, AppResult, AppState,
    Config, CorsOrigins, DatabaseError,
};

/// Full application: API routes, docs (with the `openapi` feature), CORS and
/// request tracing
pub fn build_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_allow_origins);

    #[cfg(feature = "openapi")]
    let app = {
        let (router, api) = create_router(state);
        router.merge(Scalar::with_url("/docs", api))
    };

    #[cfg(not(feature = "openapi"))]
    let app = create_router(state);

    app.layer(cors).layer(TraceLayer::new_for_http())
}

pub async fn run_server(addr: SocketAddr, config: Config) -> Result<(), Box<dyn std::error::Error>> {
    // Ensure data directory exists
    std::fs::create_dir_all(&config.data_path).map_err(|e| {
        format!(
            "Failed to create data directory '{}': {} (check directory permissions)",
            config.data_path.display(),
            e
        )
    })?;

    let pool = create_pool(&config.database_url, config.max_connections).await?;
    tracing::info!("Using database {}", config.database_path().display());

    let state = AppState::new(pool.clone(), config);
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
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
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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

    tracing::info!("Shutdown signal received");
}
