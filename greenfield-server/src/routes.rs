//! The two read-only endpoints, wrapped in the shared response envelope.

use axum::http::{HeaderValue, Method};
use axum::{Router, routing::get};
use chrono::Utc;
use greenfield::{ApiResponse, format_date};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::{Config, ConfigError};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    /// UTC calendar date of the check, `YYYY-MM-DD`.
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Greeting {
    pub message: String,
}

/// `GET /health`
async fn health() -> ApiResponse<HealthStatus> {
    ApiResponse::success(HealthStatus {
        status: "healthy".to_string(),
        timestamp: format_date(&Utc::now()),
    })
}

/// `GET /api/hello`
async fn hello() -> ApiResponse<Greeting> {
    ApiResponse::success(Greeting {
        message: "Hello from the API!".to_string(),
    })
}

/// Build the API router with CORS and request tracing applied.
pub fn router(config: &Config) -> Result<Router, ConfigError> {
    let origin = config.cors_origin.parse::<HeaderValue>().map_err(|source| {
        ConfigError::InvalidCorsOrigin {
            value: config.cors_origin.clone(),
            source,
        }
    })?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET]);

    Ok(Router::new()
        .route("/health", get(health))
        .route("/api/hello", get(hello))
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use chrono::NaiveDate;
    use greenfield::Environment;
    use tower::ServiceExt;

    fn test_config() -> Config {
        Config {
            port: 0,
            cors_origin: "http://localhost:3000".to_string(),
            environment: Environment::Development,
        }
    }

    async fn send(uri: &str) -> axum::response::Response {
        let app = router(&test_config()).unwrap();
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        app.oneshot(request).await.unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_healthy() {
        let response = send("/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let envelope: ApiResponse<HealthStatus> = serde_json::from_slice(&body).unwrap();
        assert!(envelope.is_success());

        let data = envelope.data().unwrap();
        assert_eq!(data.status, "healthy");
        assert!(NaiveDate::parse_from_str(&data.timestamp, "%Y-%m-%d").is_ok());
    }

    #[tokio::test]
    async fn test_health_omits_error_field() {
        let response = send("/health").await;
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["success"], serde_json::Value::Bool(true));
        assert!(value.get("error").is_none());
    }

    #[tokio::test]
    async fn test_hello_greets() {
        let response = send("/api/hello").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let envelope: ApiResponse<Greeting> = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            envelope.data().map(|g| g.message.as_str()),
            Some("Hello from the API!")
        );
    }

    #[tokio::test]
    async fn test_cors_allows_configured_origin() {
        let app = router(&test_config()).unwrap();
        let request = Request::builder()
            .uri("/health")
            .header("Origin", "http://localhost:3000")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .and_then(|value| value.to_str().ok()),
            Some("http://localhost:3000")
        );
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let response = send("/nope").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_router_rejects_malformed_cors_origin() {
        let config = Config {
            cors_origin: "not a header\nvalue".to_string(),
            ..test_config()
        };
        assert!(matches!(
            router(&config),
            Err(ConfigError::InvalidCorsOrigin { .. })
        ));
    }
}
