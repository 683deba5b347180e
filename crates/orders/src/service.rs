//! Order service: pricing, placement, history projection.

use std::sync::Arc;

use crate::error::OrderError;
use crate::order::{OrderDraft, OrderInfo};
use crate::store::OrderStore;
use storefront_core::{MemberId, Money};

/// Application service over the order store.
///
/// Holds no state of its own; all mutation goes through the store so the
/// debit+append pair stays inside one lock scope.
#[derive(Debug, Clone)]
pub struct OrderService {
    store: Arc<OrderStore>,
}

impl OrderService {
    pub fn new(store: Arc<OrderStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<OrderStore> {
        &self.store
    }

    /// Total price of a draft. Pure; no side effects.
    pub fn order_price(&self, draft: &OrderDraft) -> Result<Money, OrderError> {
        draft.total_price()
    }

    /// Read-side helper for rendering balances around a placement.
    pub fn member_balance(&self, member_id: MemberId) -> Result<Money, OrderError> {
        self.store.member_balance(member_id)
    }

    pub fn member_username(&self, member_id: MemberId) -> Result<String, OrderError> {
        self.store.member_username(member_id)
    }

    /// Place an order: validate the draft, debit the member, append to
    /// history. All-or-nothing; a failure leaves balance and history as
    /// they were.
    pub fn place_order(
        &self,
        member_id: MemberId,
        draft: &OrderDraft,
    ) -> Result<OrderInfo, OrderError> {
        let location = draft.validate_filled()?.to_string();
        let total_price = draft.total_price()?;

        let placed = self.store.place(member_id, draft, total_price, location)?;
        tracing::info!(
            order_id = %placed.order_id,
            member_id = %member_id,
            item = %placed.kind.display_name(),
            quantity = placed.quantity,
            total = placed.total_price.units(),
            "order placed"
        );
        Ok(OrderInfo::from(&placed))
    }

    /// Chronological order history for a member.
    ///
    /// Empty history is a normal empty `Vec`, not an error.
    pub fn orders_for_member(&self, member_id: MemberId) -> Result<Vec<OrderInfo>, OrderError> {
        let history = self.store.history(member_id)?;
        Ok(history.iter().map(OrderInfo::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    use storefront_catalog::{KeyboardLayout, MonitorPanel, OsFamily, ProductKind};
    use storefront_members::Member;

    fn service_with_member(balance: u64) -> (OrderService, MemberId) {
        let store = Arc::new(OrderStore::new());
        let member_id = MemberId::new();
        let member = Member::new(member_id, "kim", Money::new(balance)).unwrap();
        store.register_member(member).unwrap();
        (OrderService::new(store), member_id)
    }

    fn filled_draft(kind: ProductKind, quantity: u32) -> OrderDraft {
        let mut draft = OrderDraft::new(kind);
        draft.fill(quantity, "Seoul");
        draft
    }

    #[test]
    fn monitor_scenario_debits_and_records() {
        // balance 100,000; Monitor x2 at 30,000 => total 60,000, rest 40,000.
        let (service, member_id) = service_with_member(100_000);
        let draft = filled_draft(ProductKind::Monitor(MonitorPanel::Ips), 2);

        assert_eq!(service.order_price(&draft).unwrap(), Money::new(60_000));

        let placed = service.place_order(member_id, &draft).unwrap();
        assert_eq!(placed.total_price, Money::new(60_000));
        assert_eq!(service.member_balance(member_id).unwrap(), Money::new(40_000));

        let history = service.orders_for_member(member_id).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0], placed);
    }

    #[test]
    fn laptop_scenario_fails_without_partial_effect() {
        // balance 10,000; Laptop x1 at 1,200,000 => rejected, balance kept.
        let (service, member_id) = service_with_member(10_000);
        let draft = filled_draft(ProductKind::Laptop(OsFamily::Windows), 1);

        let err = service.place_order(member_id, &draft).unwrap_err();
        assert_eq!(
            err,
            OrderError::InsufficientBalance {
                balance: Money::new(10_000),
                required: Money::new(1_200_000),
            }
        );
        assert_eq!(service.member_balance(member_id).unwrap(), Money::new(10_000));
        assert!(service.orders_for_member(member_id).unwrap().is_empty());
    }

    #[test]
    fn fresh_member_has_empty_history_not_an_error() {
        let (service, member_id) = service_with_member(50_000);
        let history = service.orders_for_member(member_id).unwrap();
        assert!(history.is_empty());
    }

    #[test]
    fn unknown_member_is_distinguished_from_empty_history() {
        let (service, _) = service_with_member(50_000);
        let err = service.orders_for_member(MemberId::new()).unwrap_err();
        assert_eq!(err, OrderError::UnknownMember);
    }

    #[test]
    fn unfilled_draft_is_rejected_before_any_debit() {
        let (service, member_id) = service_with_member(500_000);
        let draft = OrderDraft::new(ProductKind::Keyboard(KeyboardLayout::Full));

        let err = service.place_order(member_id, &draft).unwrap_err();
        assert_eq!(err, OrderError::InvalidQuantity);
        assert_eq!(service.member_balance(member_id).unwrap(), Money::new(500_000));
    }

    #[test]
    fn missing_location_is_rejected_before_any_debit() {
        let (service, member_id) = service_with_member(500_000);
        let mut draft = OrderDraft::new(ProductKind::Keyboard(KeyboardLayout::Compact));
        draft.fill(1, "");

        let err = service.place_order(member_id, &draft).unwrap_err();
        assert_eq!(err, OrderError::MissingLocation);
        assert_eq!(service.member_balance(member_id).unwrap(), Money::new(500_000));
    }

    #[test]
    fn successive_orders_append_in_chronological_order() {
        let (service, member_id) = service_with_member(10_000_000);

        service
            .place_order(member_id, &filled_draft(ProductKind::Monitor(MonitorPanel::Va), 1))
            .unwrap();
        service
            .place_order(member_id, &filled_draft(ProductKind::Laptop(OsFamily::Linux), 2))
            .unwrap();
        service
            .place_order(
                member_id,
                &filled_draft(ProductKind::Keyboard(KeyboardLayout::Tenkeyless), 3),
            )
            .unwrap();

        let history = service.orders_for_member(member_id).unwrap();
        let names: Vec<_> = history.iter().map(|o| o.item_name.as_str()).collect();
        assert_eq!(names, ["VA Monitor", "LINUX Laptop", "TENKEYLESS Keyboard"]);
    }

    fn any_kind() -> impl Strategy<Value = ProductKind> {
        prop_oneof![
            prop::sample::select(MonitorPanel::ALL).prop_map(ProductKind::Monitor),
            prop::sample::select(OsFamily::ALL).prop_map(ProductKind::Laptop),
            prop::sample::select(KeyboardLayout::ALL).prop_map(ProductKind::Keyboard),
        ]
    }

    proptest! {
        /// Property: placement either debits exactly the total and appends
        /// exactly one order (last), or changes nothing at all.
        #[test]
        fn placement_is_all_or_nothing(
            balance in 0u64..10_000_000,
            quantity in 0u32..100,
            kind in any_kind(),
        ) {
            let (service, member_id) = service_with_member(balance);
            let mut draft = OrderDraft::new(kind);
            draft.fill(quantity, "Daegu");

            let before_balance = service.member_balance(member_id).unwrap();
            let before_len = service.orders_for_member(member_id).unwrap().len();

            match service.place_order(member_id, &draft) {
                Ok(placed) => {
                    let total = kind.unit_price().times(quantity).unwrap();
                    prop_assert_eq!(placed.total_price, total);
                    prop_assert_eq!(
                        service.member_balance(member_id).unwrap(),
                        before_balance.checked_sub(total).unwrap()
                    );
                    let history = service.orders_for_member(member_id).unwrap();
                    prop_assert_eq!(history.len(), before_len + 1);
                    prop_assert_eq!(history.last().unwrap(), &placed);
                }
                Err(_) => {
                    prop_assert_eq!(service.member_balance(member_id).unwrap(), before_balance);
                    prop_assert_eq!(
                        service.orders_for_member(member_id).unwrap().len(),
                        before_len
                    );
                }
            }
        }

        /// Property: pricing twice with an unmodified draft yields identical
        /// results and never touches state.
        #[test]
        fn pricing_is_pure(quantity in 1u32..1000, kind in any_kind()) {
            let (service, member_id) = service_with_member(1_000);
            let mut draft = OrderDraft::new(kind);
            draft.fill(quantity, "Gwangju");

            let first = service.order_price(&draft);
            let second = service.order_price(&draft);
            prop_assert_eq!(first, second);
            prop_assert_eq!(service.member_balance(member_id).unwrap(), Money::new(1_000));
        }
    }
}
