//! Wildcard Query Module
//!
//! Implements the grid's `LIKE` query support for the customer name field.
//!
//! ## Overview
//! A pattern such as `%Doe` is translated into an anchored regular
//! expression (`pattern`), matched against the names tracked by the
//! `NameIndex`, and the surviving ids are resolved through the region
//! (`engine`). The HTTP surface for saving and querying customers lives
//! in `handlers`.

pub mod engine;
pub mod handlers;
pub mod pattern;
