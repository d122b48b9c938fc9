//! Products domain module.
//!
//! This crate holds the catalog's product entity as plain data (no IO, no
//! storage, no pricing rules).

pub mod product;

pub use product::{Product, ProductId};
