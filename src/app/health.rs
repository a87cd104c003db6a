//! 健康检查

use axum::{extract::State, response::Json};
use serde_json::{json, Value};
use tracing::error;

use super::AppState;
use crate::core::error::CoreError;

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, CoreError> {
    state.db.ping().await.map_err(|e| {
        error!("Health check failed: {}", e);
        CoreError::InternalServerError("Database unavailable".to_string())
    })?;

    Ok(Json(json!({
        "status": "healthy",
        "database": "connected",
        "timestamp": chrono::Utc::now().to_rfc3339()
    })))
}
