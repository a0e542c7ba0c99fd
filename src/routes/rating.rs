use axum::{extract::{Query, State}, Json};
use crate::{rating::{property_rating, safety_data, traffic_data}, AppState, LocationQuery, RatingQuery};

pub async fn rating_handler(State(_state): State<std::sync::Arc<AppState>>, Query(query): Query<RatingQuery>) -> Json<f64> {
    Json(property_rating(query.property_id).overall())
}

pub async fn traffic_handler(State(_state): State<std::sync::Arc<AppState>>, Query(query): Query<LocationQuery>) -> String {
    traffic_data(&query.location)
}

pub async fn safety_handler(State(_state): State<std::sync::Arc<AppState>>, Query(query): Query<LocationQuery>) -> String {
    safety_data(&query.location)
}
