//! Region Network Protocol
//!
//! Defines the API endpoints and Data Transfer Objects (DTOs) used between
//! the grid client and the grid server (PUT, GET, COUNT, QUERY).
//!
//! Values travel as JSON strings inside the DTOs so the endpoints stay
//! agnostic of the concrete value type stored in the region.

use serde::{Deserialize, Serialize};

// --- API Endpoints ---

/// Public endpoint for client write requests.
pub const ENDPOINT_PUT: &str = "/customers/put";
/// Public endpoint for client read requests (key appended as a path segment).
pub const ENDPOINT_GET: &str = "/customers/get";
/// Public endpoint for the region entry count.
pub const ENDPOINT_COUNT: &str = "/customers/count";
/// Public endpoint for wildcard name queries (`name_like` query parameter).
pub const ENDPOINT_QUERY: &str = "/customers/query";

// --- Data Transfer Objects ---

/// Client request for writing a value.
///
/// The `op_id` lets the server deduplicate retried requests: a client that
/// times out and resends keeps the same operation id, so the write applies
/// at most once.
#[derive(Debug, Serialize, Deserialize)]
pub struct PutRequest {
    /// Unique operation id (UUID) for deduplication.
    pub op_id: String,
    /// The entry key, rendered as a string.
    pub key: String,
    /// The serialized JSON string of the value.
    pub value_json: String,
}

/// Acknowledgment for write operations.
#[derive(Debug, Serialize, Deserialize)]
pub struct PutResponse {
    pub success: bool,
}

/// Response for single-value retrieval (GET and QUERY).
#[derive(Debug, Serialize, Deserialize)]
pub struct GetResponse {
    /// The value, if found, serialized as a JSON string.
    /// `None` indicates no entry matched.
    pub value_json: Option<String>,
}

/// Response for the region entry count.
#[derive(Debug, Serialize, Deserialize)]
pub struct CountResponse {
    pub count: u64,
}
