use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};
use tracing::{info, warn};

use shared_config::AppConfig;

/// Wildcard origins allow anything without credentials; an explicit origin
/// list allows credentials and mirrors the requested method and headers.
pub fn build_cors_layer(config: &AppConfig) -> CorsLayer {
    if config.allows_any_origin() {
        info!("CORS: allowing any origin");
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Skipping invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    info!("CORS: allowing origins {:?}", config.cors_origins);

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request},
        routing::get,
        Router,
    };
    use tower::ServiceExt;

    fn app(config: &AppConfig) -> Router {
        Router::new()
            .route("/ping", get(|| async { "pong" }))
            .layer(build_cors_layer(config))
    }

    async fn allow_origin_for(config: &AppConfig, origin: &str) -> Option<String> {
        let request = Request::builder()
            .uri("/ping")
            .header(header::ORIGIN, origin)
            .body(Body::empty())
            .unwrap();

        let response = app(config).oneshot(request).await.unwrap();
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .map(|v| v.to_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn test_wildcard_allows_any_origin() {
        let config = AppConfig::default();

        let allowed = allow_origin_for(&config, "https://anywhere.example").await;
        assert_eq!(allowed.as_deref(), Some("*"));
    }

    #[tokio::test]
    async fn test_origin_list() {
        let config = AppConfig {
            cors_origins: vec!["http://localhost:3000".to_string()],
            ..AppConfig::default()
        };

        let allowed = allow_origin_for(&config, "http://localhost:3000").await;
        assert_eq!(allowed.as_deref(), Some("http://localhost:3000"));

        let denied = allow_origin_for(&config, "https://evil.example").await;
        assert!(denied.is_none());
    }
}
