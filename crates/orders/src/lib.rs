//! Orders domain module (drafts, placement, history).
//!
//! Business rules for pricing and placing orders against member balances,
//! plus the in-memory store that guards the debit+append pair.

pub mod error;
pub mod order;
pub mod service;
pub mod store;

pub use error::OrderError;
pub use order::{OrderDraft, OrderInfo, PlacedOrder};
pub use service::OrderService;
pub use store::OrderStore;
