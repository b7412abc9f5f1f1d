//! Region Storage Module
//!
//! Implements the grid's storage layer: a named in-memory key-value region.
//!
//! ## Core Concepts
//! - **Region**: a concurrent map identified by name, analogous to a table.
//!   Writes carry an operation id so that retried client requests apply at
//!   most once.
//! - **Index**: the `NameIndex` tracks which ids carry which customer name,
//!   so wildcard queries never scan region values.
//! - **Protocol**: serde DTOs and endpoint constants for the region HTTP API.

pub mod handlers;
pub mod index;
pub mod memory;
pub mod protocol;

pub use index::NameIndex;
pub use memory::Region;

#[cfg(test)]
mod tests;
