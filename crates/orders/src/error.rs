//! Order placement error taxonomy.

use thiserror::Error;

use storefront_core::{DomainError, Money};

/// Error raised when an order cannot be priced or placed.
///
/// Every variant leaves member balance and order history untouched; a failed
/// placement has no partial effect.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// Quantity was never filled in (still the zero placeholder).
    #[error("order quantity must be a positive number")]
    InvalidQuantity,

    /// Delivery location was never filled in.
    #[error("order has no delivery location")]
    MissingLocation,

    /// The member id is not registered in the store.
    #[error("unknown member")]
    UnknownMember,

    /// The order total exceeds the member's balance.
    #[error("insufficient balance: have {balance}, need {required}")]
    InsufficientBalance { balance: Money, required: Money },

    /// Unit price times quantity overflowed the money range.
    #[error("order total overflows the representable amount")]
    PriceOverflow,

    /// The store's lock was poisoned by a panicking writer; its state can no
    /// longer be trusted.
    #[error("order store is unavailable")]
    StoreUnavailable,
}

impl From<DomainError> for OrderError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InsufficientFunds { balance, required } => {
                OrderError::InsufficientBalance {
                    balance: Money::new(balance),
                    required: Money::new(required),
                }
            }
            DomainError::NotFound => OrderError::UnknownMember,
            // Remaining domain failures in this flow are all arithmetic range
            // errors surfaced by Money.
            DomainError::Validation(_)
            | DomainError::InvariantViolation(_)
            | DomainError::InvalidId(_) => OrderError::PriceOverflow,
        }
    }
}
