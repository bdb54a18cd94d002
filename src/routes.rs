use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tracing::error;

use crate::prices::{self, PriceRecord};
use crate::state::AppState;
use crate::translate::{TranslateRequest, TranslationResult};

pub fn create_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/api/health", get(health_check))
        // REST API routes
        .route("/api/translate", post(translate))
        .route("/api/prices", get(get_prices))
}

async fn health_check() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

async fn translate(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<TranslationResult>, (StatusCode, Json<Value>)> {
    match state
        .translator
        .translate(&request.text, &request.target_lang)
        .await
    {
        Ok(result) => Ok(Json(result)),
        Err(err) => {
            // The concrete cause stays server-side; clients get one generic
            // message regardless of what failed upstream.
            error!("Translation error: {}", err);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Translation failed"})),
            ))
        }
    }
}

async fn get_prices() -> Json<Vec<PriceRecord>> {
    Json(prices::mock_prices())
}
