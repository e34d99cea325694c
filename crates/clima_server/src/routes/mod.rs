//! Route modules for the clima server
//!
//! This module contains endpoint group-specific routers:
//! - temperatures: Monthly series plus interpolated estimate
//! - cities: Available city listing
//! - health: Health check and monitoring endpoints

pub mod cities;
pub mod health;
pub mod temperatures;

use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use clima_store::TemperatureStore;

use crate::config::ServerConfig;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Temperature store backend
    pub store: Arc<dyn TemperatureStore>,
    /// Server start time for uptime calculation
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create a new AppState
    pub fn new(config: Arc<ServerConfig>, store: Arc<dyn TemperatureStore>) -> Self {
        Self {
            config,
            store,
            start_time: std::time::Instant::now(),
        }
    }
}

/// Build the main application router by merging all route modules
pub fn build_router(config: Arc<ServerConfig>, store: Arc<dyn TemperatureStore>) -> Router {
    let state = AppState::new(config, store);

    Router::new()
        .merge(health::routes())
        .merge(cities::routes())
        .merge(temperatures::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use clima_store::memory::MemoryStore;
    use tower::ServiceExt;

    fn test_router() -> Router {
        build_router(
            Arc::new(ServerConfig::default()),
            Arc::new(MemoryStore::with_sample_data()),
        )
    }

    #[tokio::test]
    async fn test_build_router_creates_valid_router() {
        let response = test_router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_router_merges_all_route_groups() {
        let router = test_router();

        let response = router
            .clone()
            .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/cities")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/v1/temperatures")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route_returns_404() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/unknown/path")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_app_state_uptime() {
        let state = AppState::new(
            Arc::new(ServerConfig::default()),
            Arc::new(MemoryStore::with_sample_data()),
        );

        std::thread::sleep(std::time::Duration::from_millis(10));

        let elapsed = state.start_time.elapsed();
        assert!(elapsed.as_millis() >= 10);
    }

    #[tokio::test]
    async fn test_app_state_store_access() {
        let state = AppState::new(
            Arc::new(ServerConfig::default()),
            Arc::new(MemoryStore::with_sample_data()),
        );

        assert_eq!(state.store.backend_name(), "memory");
        assert_eq!(state.config.port, 8080);
    }
}
