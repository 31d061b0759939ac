mod config;
mod routes;
mod shutdown;

use config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    tracing::info!(environment = %config.environment, "Starting API server");

    let router = routes::router(&config)?;
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("API server running on port {}", config.port);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            shutdown::shutdown_signal().await;
            tracing::info!("Initiating graceful shutdown...");
        })
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
