//! Console front-end: prompts, order flow orchestration, rendering.
//!
//! All business rules live in `storefront-orders`; this crate only sequences
//! prompts and renders results. Readers and writers are generic so flows can
//! be driven from in-memory buffers in tests.

pub mod controller;
pub mod input;

pub use controller::ShopController;
