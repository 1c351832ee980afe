//! Catalog domain module.
//!
//! This crate contains the business rules for the product catalog,
//! implemented purely as deterministic domain logic (no IO, no UI, no
//! storage). The [`Catalog`] owns the backing list; all mutation goes
//! through its interface.

pub mod catalog;
pub mod product;

pub use catalog::Catalog;
pub use product::{ExpiryDate, Price, Product, ProductKind, Quantity};
