//! Shop controller: sequences prompts, invokes the order service, renders
//! results. Contains no business rules.

use std::io::{self, BufRead, Write};

use storefront_catalog::ProductCategory;
use storefront_members::Session;
use storefront_orders::{OrderDraft, OrderInfo, OrderService};

use crate::input::{prompt_nonempty, prompt_u32, prompt_variant};

/// Presentation-layer orchestrator over the order service.
pub struct ShopController {
    service: OrderService,
}

impl ShopController {
    pub fn new(service: OrderService) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &OrderService {
        &self.service
    }

    /// Run the full order flow for one product category.
    ///
    /// Flow: resolve member -> prompt variant, quantity, location -> show
    /// balance and order total -> attempt placement -> show outcome and the
    /// post-operation balance (unchanged on failure). Domain errors are
    /// rendered verbatim and end the flow; only IO errors propagate.
    pub fn create_order<R: BufRead, W: Write>(
        &self,
        session: &Session,
        category: ProductCategory,
        reader: &mut R,
        writer: &mut W,
    ) -> io::Result<()> {
        let member_id = match session.require_member() {
            Ok(id) => id,
            Err(err) => {
                writeln!(writer, "{err}")?;
                return Ok(());
            }
        };
        let username = match self.service.member_username(member_id) {
            Ok(name) => name,
            Err(err) => {
                writeln!(writer, "{err}")?;
                return Ok(());
            }
        };

        let kind = prompt_variant(reader, writer, category)?;
        let mut draft = OrderDraft::new(kind);

        let quantity = prompt_u32(reader, writer, "Enter the quantity to buy")?;
        let location = prompt_nonempty(reader, writer, "Enter the delivery location")?;
        draft.fill(quantity, location);

        let order_price = match self.service.order_price(&draft) {
            Ok(price) => price,
            Err(err) => {
                writeln!(writer, "{err}")?;
                return Ok(());
            }
        };

        let before = match self.service.member_balance(member_id) {
            Ok(balance) => balance,
            Err(err) => {
                writeln!(writer, "{err}")?;
                return Ok(());
            }
        };
        writeln!(writer, "{username}'s current balance is {before}.")?;
        writeln!(writer, "Proceeding with a payment of {order_price}.")?;

        match self.service.place_order(member_id, &draft) {
            Ok(_) => writeln!(writer, "Your order has been placed.")?,
            Err(err) => writeln!(writer, "{err}")?,
        }

        // Read back rather than compute: on failure this shows the balance
        // untouched.
        if let Ok(after) = self.service.member_balance(member_id) {
            writeln!(writer, "{username}'s current balance: {after}")?;
        }
        Ok(())
    }

    /// Render the member's order history, or a no-orders message when the
    /// history is empty.
    pub fn view_my_orders<W: Write>(&self, session: &Session, writer: &mut W) -> io::Result<()> {
        let member_id = match session.require_member() {
            Ok(id) => id,
            Err(err) => {
                writeln!(writer, "{err}")?;
                return Ok(());
            }
        };
        let username = match self.service.member_username(member_id) {
            Ok(name) => name,
            Err(err) => {
                writeln!(writer, "{err}")?;
                return Ok(());
            }
        };

        let orders = match self.service.orders_for_member(member_id) {
            Ok(orders) => orders,
            Err(err) => {
                writeln!(writer, "{err}")?;
                return Ok(());
            }
        };

        if orders.is_empty() {
            writeln!(writer, "{username} has no orders yet.")?;
            return Ok(());
        }

        writeln!(writer, "{username}'s order history")?;
        for order in &orders {
            render_order(writer, order)?;
        }
        Ok(())
    }

    /// Render the signed-in member's username and formatted balance.
    pub fn member_info<W: Write>(&self, session: &Session, writer: &mut W) -> io::Result<()> {
        let member_id = match session.require_member() {
            Ok(id) => id,
            Err(err) => {
                writeln!(writer, "{err}")?;
                return Ok(());
            }
        };
        match self.service.member_username(member_id) {
            Ok(username) => writeln!(writer, "Username : {username}")?,
            Err(err) => {
                writeln!(writer, "{err}")?;
                return Ok(());
            }
        }
        if let Ok(balance) = self.service.member_balance(member_id) {
            writeln!(writer, "Balance  : {balance}")?;
        }
        Ok(())
    }
}

fn render_order<W: Write>(writer: &mut W, order: &OrderInfo) -> io::Result<()> {
    writeln!(writer, "| >> Item       : {}", order.item_name)?;
    writeln!(
        writer,
        "| >> Ordered at : {}",
        order.ordered_at.format("%Y-%m-%d %H:%M:%S")
    )?;
    writeln!(writer, "| >> Deliver to : {}", order.location)?;
    writeln!(writer, "| >> Unit price : {}", order.unit_price)?;
    writeln!(
        writer,
        "| >> Quantity   : {}",
        storefront_core::money::group_digits(u64::from(order.quantity))
    )?;
    writeln!(writer, "| >> Total paid : {}", order.total_price)?;
    writeln!(writer, "| ---------------------------")?;
    Ok(())
}
