use axum::{Router, response::Html, routing::get};

mod page;

/// Port the page server listens on when `PORT` is unset.
const DEFAULT_PORT: u16 = 3000;

/// `GET /`
async fn home() -> Html<String> {
    Html(page::home())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let port = match std::env::var("PORT") {
        Ok(value) => value.parse::<u16>()?,
        Err(_) => DEFAULT_PORT,
    };

    let router = Router::new().route("/", get(home));
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!("Web server running on port {port}");

    axum::serve(listener, router).await?;
    Ok(())
}
