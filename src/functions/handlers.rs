use axum::http::StatusCode;
use axum::{Extension, Json};
use serde_json::Value;
use std::sync::Arc;

use super::protocol::{InvokeRequest, InvokeResponse};
use super::registry::FunctionRegistry;

pub async fn handle_invoke(
    Extension(registry): Extension<Arc<FunctionRegistry>>,
    Json(req): Json<InvokeRequest>,
) -> (StatusCode, Json<InvokeResponse>) {
    let args: Value = match serde_json::from_str(&req.args_json) {
        Ok(v) => v,
        Err(e) => {
            tracing::error!("Failed to deserialize function args: {}", e);
            return (
                StatusCode::BAD_REQUEST,
                Json(InvokeResponse { result_json: None }),
            );
        }
    };

    if !registry.has_function(&req.function) {
        tracing::warn!("Invocation of unregistered function '{}'", req.function);
        return (
            StatusCode::NOT_FOUND,
            Json(InvokeResponse { result_json: None }),
        );
    }

    match registry.execute(&req.function, args).await {
        Ok(result) => match serde_json::to_string(&result) {
            Ok(result_json) => (
                StatusCode::OK,
                Json(InvokeResponse {
                    result_json: Some(result_json),
                }),
            ),
            Err(e) => {
                tracing::error!("Failed to serialize function result: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(InvokeResponse { result_json: None }),
                )
            }
        },
        Err(e) => {
            tracing::error!("Function '{}' failed: {}", req.function, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(InvokeResponse { result_json: None }),
            )
        }
    }
}
