use axum::{routing::{get, post}, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::{cors::{Any, CorsLayer}, trace::TraceLayer};

pub mod config;
pub mod error;
pub mod rating;
mod routes;

use routes::{health::health_handler, predict::predict_handler, rating::{rating_handler, safety_handler, traffic_handler}};

/// Value returned for every prediction until a real model is wired in.
pub const PLACEHOLDER_PREDICTION: i64 = 42;

#[derive(Clone, Default)]
pub struct AppState {}

pub fn app() -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    let app_state = Arc::new(AppState::default());
    Router::new()
        .route("/health", get(health_handler))
        .route("/predict", post(predict_handler))
        .route("/api/getRating", get(rating_handler))
        .route("/api/getTrafficData", get(traffic_handler))
        .route("/api/getSafetyData", get(safety_handler))
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub features: serde_json::Value,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PredictResponse {
    pub prediction: Vec<i64>,
}

#[derive(Debug, Deserialize)]
pub struct RatingQuery {
    #[serde(rename = "propertyId")]
    pub property_id: i32,
}

#[derive(Debug, Deserialize)]
pub struct LocationQuery {
    pub location: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
