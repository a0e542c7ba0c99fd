use axum::{extract::State, Json};
use crate::{AppState, PredictRequest, PredictResponse, PLACEHOLDER_PREDICTION};

pub async fn predict_handler(State(_state): State<std::sync::Arc<AppState>>, Json(_req): Json<PredictRequest>) -> Json<PredictResponse> {
    // TODO: run the features through a loaded model once one is specified
    Json(PredictResponse { prediction: vec![PLACEHOLDER_PREDICTION] })
}
