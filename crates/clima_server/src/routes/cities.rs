//! City listing endpoint
//!
//! Feeds the dashboard's city selector.

use axum::{extract::State, response::Json, routing::get, Router};
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::error::ApiError;

/// City listing response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitiesResponse {
    /// Available city names, sorted ascending
    pub cities: Vec<String>,
}

/// Build the cities routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/v1/cities", get(cities_handler))
}

/// GET /api/v1/cities - List cities with stored series
async fn cities_handler(
    State(state): State<AppState>,
) -> Result<Json<CitiesResponse>, ApiError> {
    let cities = state.store.list_cities().await?;
    Ok(Json(CitiesResponse { cities }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use clima_store::memory::MemoryStore;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        AppState::new(
            Arc::new(ServerConfig::default()),
            Arc::new(MemoryStore::with_sample_data()),
        )
    }

    #[tokio::test]
    async fn test_cities_endpoint_returns_sample_cities() {
        let router = routes().with_state(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/v1/cities")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let cities: CitiesResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(
            cities.cities,
            vec!["Barranquilla", "Bogotá", "Cali", "Cartagena", "Medellín"]
        );
    }

    #[tokio::test]
    async fn test_cities_endpoint_empty_store() {
        let state = AppState::new(
            Arc::new(ServerConfig::default()),
            Arc::new(MemoryStore::new()),
        );
        let router = routes().with_state(state);

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/v1/cities")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let cities: CitiesResponse = serde_json::from_slice(&body).unwrap();
        assert!(cities.cities.is_empty());
    }
}
