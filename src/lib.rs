//! Customer Grid Library
//!
//! This library crate defines the modules that make up a small in-memory
//! data grid for customer records, exposed over HTTP in a client/server
//! topology. It serves as the foundation for the server binary (`main.rs`)
//! and the demo client (`bin/demo.rs`).
//!
//! ## Architecture Modules
//! The system is composed of six loosely coupled subsystems:
//!
//! - **`model`**: The `Customer` value type stored in the grid.
//! - **`region`**: The storage layer. A named, concurrent key-value region
//!   plus the index maintained over the customer name field.
//! - **`query`**: Wildcard (`LIKE`) query support. Translates SQL-style
//!   patterns into anchored regular expressions and resolves matches
//!   through the name index.
//! - **`functions`**: The remote function invocation layer. A registry maps
//!   function names to executable handlers; the identity function stamps
//!   fresh ids onto customers from an atomic sequence.
//! - **`client`**: The client-side repository. Works against an embedded
//!   local region or forwards every operation to a grid server.
//! - **`config`**: Explicit configuration for the server and client
//!   binaries (bind address, region name, server address).

pub mod client;
pub mod config;
pub mod functions;
pub mod model;
pub mod query;
pub mod region;
