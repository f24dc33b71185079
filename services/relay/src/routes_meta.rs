use axum::Json;
use serde_json::{json, Value};

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "message": "GIA backend is running!" }))
}

pub async fn index() -> Json<Value> {
    Json(json!({
        "message": "GIA Backend API",
        "endpoints": {
            "health": "/api/health",
            "chat": "POST /api/chat"
        }
    }))
}
