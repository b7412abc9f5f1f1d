//! Domain Model Module
//!
//! Defines the value types stored in the grid. `Customer` is the only
//! entity: an id plus an indexed display name, effectively immutable
//! after construction.

pub mod customer;

pub use customer::Customer;

#[cfg(test)]
mod tests;
