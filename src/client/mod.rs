//! Grid Client Module
//!
//! The client-side view of the grid.
//!
//! - **`remote`**: HTTP client for a grid server, with retry and
//!   idempotent writes.
//! - **`repository`**: The `CustomerRepository` storage API (save, find,
//!   count, wildcard query, identify) over either an embedded local
//!   region or a remote server.

pub mod remote;
pub mod repository;

pub use remote::RemoteGridClient;
pub use repository::CustomerRepository;

#[cfg(test)]
mod tests;
