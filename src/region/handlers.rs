use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
};
use serde::Serialize;
use std::hash::Hash;
use std::str::FromStr;
use std::sync::Arc;

use super::memory::Region;
use super::protocol::{CountResponse, GetResponse};

// Generic handlers - served through concrete wrappers in main.rs

pub async fn handle_get<K, V>(
    Extension(region): Extension<Arc<Region<K, V>>>,
    Path(key_str): Path<String>,
) -> (StatusCode, Json<GetResponse>)
where
    K: FromStr + Clone + Hash + Eq + Send + Sync + 'static,
    <K as FromStr>::Err: std::fmt::Display,
    V: Clone + Serialize + Send + Sync + 'static,
{
    let key: K = match key_str.parse() {
        Ok(k) => k,
        Err(e) => {
            tracing::error!("Failed to parse key: {}", e);
            return (
                StatusCode::BAD_REQUEST,
                Json(GetResponse { value_json: None }),
            );
        }
    };

    match region.get(&key) {
        Some(value) => match serde_json::to_string(&value) {
            Ok(value_json) => (
                StatusCode::OK,
                Json(GetResponse {
                    value_json: Some(value_json),
                }),
            ),
            Err(e) => {
                tracing::error!("Failed to serialize value: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(GetResponse { value_json: None }),
                )
            }
        },
        None => (
            StatusCode::NOT_FOUND,
            Json(GetResponse { value_json: None }),
        ),
    }
}

pub async fn handle_count<K, V>(
    Extension(region): Extension<Arc<Region<K, V>>>,
) -> (StatusCode, Json<CountResponse>)
where
    K: Clone + Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    (
        StatusCode::OK,
        Json(CountResponse {
            count: region.len() as u64,
        }),
    )
}
