//! Function Invocation Protocol
//!
//! Defines the HTTP contract for invoking a named function on the grid
//! server. Arguments and results travel as JSON strings, mirroring the
//! region DTOs.

use serde::{Deserialize, Serialize};

/// Public endpoint for invoking a registered function by name.
pub const ENDPOINT_INVOKE: &str = "/function/invoke";

#[derive(Debug, Serialize, Deserialize)]
pub struct InvokeRequest {
    /// Name the function was registered under (e.g. "identify").
    pub function: String,
    /// The serialized JSON string of the function arguments.
    pub args_json: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InvokeResponse {
    /// The function result, if the invocation succeeded, serialized as a
    /// JSON string.
    pub result_json: Option<String>,
}
