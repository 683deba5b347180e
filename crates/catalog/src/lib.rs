//! Catalog domain module (product categories and pricing).
//!
//! This crate contains the closed set of sellable product variants and their
//! unit prices, implemented purely as deterministic domain logic (no IO).

pub mod product;

pub use product::{
    KeyboardLayout, MonitorPanel, OsFamily, ParseVariantError, ProductCategory, ProductKind,
};
