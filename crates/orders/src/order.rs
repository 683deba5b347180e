use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_catalog::ProductKind;
use storefront_core::{MemberId, Money, OrderId};

use crate::error::OrderError;

/// An unplaced order request.
///
/// Two-phase lifecycle: constructed with the chosen product variant and
/// placeholder quantity/location, then `fill`ed uniformly regardless of
/// variant. Zero quantity and a missing location are valid intermediate
/// states; they are rejected at pricing/placement, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDraft {
    kind: ProductKind,
    quantity: u32,
    location: Option<String>,
}

impl OrderDraft {
    pub fn new(kind: ProductKind) -> Self {
        Self {
            kind,
            quantity: 0,
            location: None,
        }
    }

    /// The single mutation step: set quantity and delivery location.
    pub fn fill(&mut self, quantity: u32, location: impl Into<String>) {
        self.quantity = quantity;
        self.location = Some(location.into());
    }

    pub fn kind(&self) -> ProductKind {
        self.kind
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Total price of the draft: unit price times quantity.
    ///
    /// Pure; fails on the zero-quantity placeholder and on overflow.
    pub fn total_price(&self) -> Result<Money, OrderError> {
        if self.quantity == 0 {
            return Err(OrderError::InvalidQuantity);
        }
        self.kind
            .unit_price()
            .times(self.quantity)
            .map_err(|_| OrderError::PriceOverflow)
    }

    /// Check the draft is complete enough to submit.
    pub(crate) fn validate_filled(&self) -> Result<&str, OrderError> {
        if self.quantity == 0 {
            return Err(OrderError::InvalidQuantity);
        }
        match self.location.as_deref() {
            Some(loc) if !loc.trim().is_empty() => Ok(loc),
            _ => Err(OrderError::MissingLocation),
        }
    }
}

/// An immutable historical record of a placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedOrder {
    pub order_id: OrderId,
    pub member_id: MemberId,
    pub kind: ProductKind,
    pub quantity: u32,
    pub location: String,
    pub unit_price: Money,
    pub total_price: Money,
    pub ordered_at: DateTime<Utc>,
}

/// Read model: one order as rendered in a member's history listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderInfo {
    pub item_name: String,
    pub ordered_at: DateTime<Utc>,
    pub location: String,
    pub unit_price: Money,
    pub quantity: u32,
    pub total_price: Money,
}

impl From<&PlacedOrder> for OrderInfo {
    fn from(order: &PlacedOrder) -> Self {
        Self {
            item_name: order.kind.display_name(),
            ordered_at: order.ordered_at,
            location: order.location.clone(),
            unit_price: order.unit_price,
            quantity: order.quantity,
            total_price: order.total_price,
        }
    }
}
