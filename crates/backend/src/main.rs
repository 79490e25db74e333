pub mod domain;
pub mod handlers;
pub mod routes;
pub mod shared;

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Создаем директорию для логов
    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("backend.log"))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    let config = shared::config::load_config()?;

    let calculator = bind("calculator", config.calculator_addr()).await?;
    let string_concepts = bind("string_concepts", config.string_concepts_addr()).await?;

    tokio::try_join!(
        serve(calculator, routes::calculator_routes()),
        serve(
            string_concepts,
            routes::string_concepts_routes(config.string_concepts.clone())
        ),
    )?;

    Ok(())
}

async fn bind(service: &str, addr: SocketAddr) -> anyhow::Result<TcpListener> {
    tracing::info!("Attempting to bind {} to http://{}", service, addr);
    match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("{} successfully bound to {}", service, addr);
            Ok(listener)
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind {} to {}. Error: {}", service, addr, e);
            }
            Err(e.into())
        }
    }
}

async fn serve(listener: TcpListener, app: Router) -> anyhow::Result<()> {
    axum::serve(listener, app).await?;
    Ok(())
}
