//! In-memory member and order-history store.
//!
//! One `RwLock` guards both the member table and the histories so the
//! debit+append pair in `place` executes under a single write lock; a failed
//! placement releases the lock without touching either. A poisoned lock is
//! surfaced as `OrderError::StoreUnavailable` rather than a panic.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use storefront_core::{MemberId, Money, OrderId};
use storefront_members::Member;

use crate::error::OrderError;
use crate::order::{OrderDraft, PlacedOrder};

#[derive(Debug, Default)]
struct StoreInner {
    members: HashMap<MemberId, Member>,
    histories: HashMap<MemberId, Vec<PlacedOrder>>,
}

/// Shared in-memory state behind the order service.
#[derive(Debug, Default)]
pub struct OrderStore {
    inner: RwLock<StoreInner>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, StoreInner>, OrderError> {
        self.inner.read().map_err(|_| OrderError::StoreUnavailable)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, StoreInner>, OrderError> {
        self.inner.write().map_err(|_| OrderError::StoreUnavailable)
    }

    /// Seed a member account. Existing state for the id is replaced.
    pub fn register_member(&self, member: Member) -> Result<(), OrderError> {
        let mut inner = self.write()?;
        inner.members.insert(member.id_typed(), member);
        Ok(())
    }

    pub fn member_username(&self, member_id: MemberId) -> Result<String, OrderError> {
        let inner = self.read()?;
        inner
            .members
            .get(&member_id)
            .map(|m| m.username().to_string())
            .ok_or(OrderError::UnknownMember)
    }

    pub fn member_balance(&self, member_id: MemberId) -> Result<Money, OrderError> {
        let inner = self.read()?;
        inner
            .members
            .get(&member_id)
            .map(Member::balance)
            .ok_or(OrderError::UnknownMember)
    }

    /// Execute a validated order: debit the member and append to history,
    /// atomically under the write lock.
    pub fn place(
        &self,
        member_id: MemberId,
        draft: &OrderDraft,
        total_price: Money,
        location: String,
    ) -> Result<PlacedOrder, OrderError> {
        let mut inner = self.write()?;

        let member = inner
            .members
            .get_mut(&member_id)
            .ok_or(OrderError::UnknownMember)?;

        // Debit first; on failure nothing has been appended yet, so the
        // all-or-nothing invariant holds trivially.
        member.debit(total_price)?;

        let placed = PlacedOrder {
            order_id: OrderId::new(),
            member_id,
            kind: draft.kind(),
            quantity: draft.quantity(),
            location,
            unit_price: draft.kind().unit_price(),
            total_price,
            ordered_at: Utc::now(),
        };

        inner.histories.entry(member_id).or_default().push(placed.clone());
        Ok(placed)
    }

    /// Chronological (insertion-order) history for a member.
    ///
    /// An empty history is a normal result; only an unregistered member id
    /// is an error.
    pub fn history(&self, member_id: MemberId) -> Result<Vec<PlacedOrder>, OrderError> {
        let inner = self.read()?;
        if !inner.members.contains_key(&member_id) {
            return Err(OrderError::UnknownMember);
        }
        Ok(inner.histories.get(&member_id).cloned().unwrap_or_default())
    }
}
