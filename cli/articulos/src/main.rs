use server::{default_data_path, print_banner, Config, CorsOrigins};
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    print_banner(env!("CARGO_PKG_VERSION"));

    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "8000".to_string())
        .parse()?;
    let data_path = env::var("DATA_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| default_data_path());
    let cors_allow_origins = env::var("CORS_ALLOW_ORIGINS")
        .map(|origins| CorsOrigins::parse(&origins))
        .unwrap_or_default();

    if let CorsOrigins::List(origins) = &cors_allow_origins {
        tracing::info!("CORS restricted to: {}", origins.join(", "));
    }

    let config = Config::new(data_path).with_cors_allow_origins(cors_allow_origins);
    let addr: SocketAddr = format!("0.0.0.0:{}", port).parse()?;

    server::run_server(addr, config).await
}
