use super::engine::find_by_name_like;
use crate::model::Customer;
use crate::region::index::NameIndex;
use crate::region::memory::Region;
use crate::region::protocol::{GetResponse, PutRequest, PutResponse};

use axum::extract::Query;
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct QueryParams {
    pub name_like: String,
}

/// Stores a customer and keeps the name index in step with the region.
///
/// A re-save under the same key with a different name must drop the old
/// name from the index, otherwise stale names keep matching queries.
pub async fn handle_save_customer(
    Extension(region): Extension<Arc<Region<u64, Customer>>>,
    Extension(index): Extension<Arc<NameIndex>>,
    Json(req): Json<PutRequest>,
) -> (StatusCode, Json<PutResponse>) {
    let key: u64 = match req.key.parse() {
        Ok(k) => k,
        Err(e) => {
            tracing::error!("Failed to parse key: {}", e);
            return (
                StatusCode::BAD_REQUEST,
                Json(PutResponse { success: false }),
            );
        }
    };

    let customer: Customer = match serde_json::from_str(&req.value_json) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to deserialize customer: {}", e);
            return (
                StatusCode::BAD_REQUEST,
                Json(PutResponse { success: false }),
            );
        }
    };

    let name = customer.name().to_string();
    match region.put_with_op(&req.op_id, key, customer) {
        Some(previous) => {
            if let Some(prev) = previous {
                index.remove(prev.name(), key);
            }
            index.insert(&name, key);
            tracing::debug!("Stored customer {} in region {}", key, region.name());
        }
        None => {
            tracing::debug!("Duplicate put op {} ignored", req.op_id);
        }
    }

    (StatusCode::OK, Json(PutResponse { success: true }))
}

pub async fn handle_query_customers(
    Query(params): Query<QueryParams>,
    Extension(region): Extension<Arc<Region<u64, Customer>>>,
    Extension(index): Extension<Arc<NameIndex>>,
) -> (StatusCode, Json<GetResponse>) {
    match find_by_name_like(&params.name_like, &index, &region) {
        Ok(Some(customer)) => match serde_json::to_string(&customer) {
            Ok(value_json) => (
                StatusCode::OK,
                Json(GetResponse {
                    value_json: Some(value_json),
                }),
            ),
            Err(e) => {
                tracing::error!("Failed to serialize customer: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(GetResponse { value_json: None }),
                )
            }
        },
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(GetResponse { value_json: None }),
        ),
        Err(e) => {
            tracing::error!("Invalid query pattern '{}': {}", params.name_like, e);
            (
                StatusCode::BAD_REQUEST,
                Json(GetResponse { value_json: None }),
            )
        }
    }
}
