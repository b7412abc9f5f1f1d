//! Remote Function Module
//!
//! Implements the grid's remote function invocation mechanism.
//!
//! ## Architecture Overview
//! 1. **Registration**: Each function is registered explicitly in the
//!    `FunctionRegistry` under a string name at startup. There is no
//!    discovery step; the registry is the single naming authority.
//! 2. **Invocation**: Clients POST the function name and JSON-encoded
//!    arguments to the invoke endpoint. The registry looks up the handler
//!    and returns its single result.
//! 3. **Identity**: The one function this grid ships is `identify`, which
//!    stamps a fresh id onto a customer from an atomic sequence seeded at
//!    construction time.
//!
//! ## Submodules
//! - **`registry`**: Maps function names to executable handlers.
//! - **`identity`**: The id-assignment function and its atomic sequence.
//! - **`protocol`**: HTTP API contracts for invocation.
//! - **`handlers`**: Axum handler for the invoke endpoint.

pub mod handlers;
pub mod identity;
pub mod protocol;
pub mod registry;

pub use identity::{IdentityFunction, IDENTIFY_FUNCTION};
pub use registry::FunctionRegistry;
