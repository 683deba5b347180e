//! Interactive shop binary: seeds member accounts, signs one in, and runs
//! the console menu loop until the user exits.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::Context;

use storefront_catalog::ProductCategory;
use storefront_cli::input::prompt_u32_in_range;
use storefront_cli::ShopController;
use storefront_core::{MemberId, Money};
use storefront_members::{Member, Session};
use storefront_orders::{OrderService, OrderStore};

fn main() -> anyhow::Result<()> {
    storefront_observability::init();

    let store = Arc::new(OrderStore::new());
    let member_id = seed_members(&store)?;
    let session = Session::signed_in(member_id);
    let controller = ShopController::new(OrderService::new(store));

    tracing::info!(member_id = %member_id, "session started");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut writer = io::stdout();
    run_menu(&controller, &session, &mut reader, &mut writer)?;
    Ok(())
}

/// Seed the pre-existing member accounts and return the id to sign in.
///
/// Starting balance comes from `STOREFRONT_BALANCE` when set.
fn seed_members(store: &Arc<OrderStore>) -> anyhow::Result<MemberId> {
    let balance = match std::env::var("STOREFRONT_BALANCE") {
        Ok(raw) => Money::new(
            raw.parse::<u64>()
                .context("STOREFRONT_BALANCE must be a non-negative integer")?,
        ),
        Err(_) => Money::new(1_000_000),
    };

    let member_id = MemberId::new();
    let member = Member::new(member_id, "kim", balance).context("failed to seed member")?;
    store
        .register_member(member)
        .context("order store rejected the seed member")?;
    Ok(member_id)
}

fn run_menu<R: BufRead, W: Write>(
    controller: &ShopController,
    session: &Session,
    reader: &mut R,
    writer: &mut W,
) -> io::Result<()> {
    loop {
        writeln!(writer)?;
        writeln!(writer, "[0] Exit  [1] My page  [2] Shop")?;
        match prompt_u32_in_range(reader, writer, "Select a menu", 0, 2) {
            Ok(0) => {
                writeln!(writer, "Goodbye.")?;
                return Ok(());
            }
            Ok(1) => member_menu(controller, session, reader, writer)?,
            Ok(2) => shop_menu(controller, session, reader, writer)?,
            Ok(_) => unreachable!("prompt enforces the range"),
            // EOF on stdin ends the session like an explicit exit.
            Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => return Ok(()),
            Err(err) => return Err(err),
        }
    }
}

fn member_menu<R: BufRead, W: Write>(
    controller: &ShopController,
    session: &Session,
    reader: &mut R,
    writer: &mut W,
) -> io::Result<()> {
    writeln!(writer, "[1] My info  [2] My orders")?;
    match prompt_u32_in_range(reader, writer, "Select a menu", 1, 2)? {
        1 => controller.member_info(session, writer),
        _ => controller.view_my_orders(session, writer),
    }
}

fn shop_menu<R: BufRead, W: Write>(
    controller: &ShopController,
    session: &Session,
    reader: &mut R,
    writer: &mut W,
) -> io::Result<()> {
    writeln!(writer, "[1] Monitor  [2] Laptop  [3] Keyboard")?;
    let category = match prompt_u32_in_range(reader, writer, "Select a product", 1, 3)? {
        1 => ProductCategory::Monitor,
        2 => ProductCategory::Laptop,
        _ => ProductCategory::Keyboard,
    };
    controller.create_order(session, category, reader, writer)
}
