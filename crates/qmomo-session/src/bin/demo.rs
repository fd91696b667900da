//! # Demo Session Driver
//!
//! Runs a scripted storefront session against the in-memory domain core.
//!
//! ## Usage
//! ```bash
//! cargo run -p qmomo-session --bin demo
//!
//! # With debug-level operation logs
//! RUST_LOG=debug cargo run -p qmomo-session --bin demo
//! ```
//!
//! ## What It Does
//! - Boots the demo session (stock menu, "Momo Lover" at 450 Q-Coins)
//! - Browses the menu, fills a cart with mixed variants and speeds
//! - Shows the checkout summary (Bronze pays the ₹40 delivery fee)
//! - Checks out and dumps the committed order as JSON
//! - Posts a review and prints the community strip
//! - Prints the loyalty card and sorted order history

use qmomo_core::history::SortCriterion;
use qmomo_core::types::{Category, DeliverySpeed};
use qmomo_session::Session;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut session = Session::demo();

    println!("== Menu ({} items) ==", session.catalog().len());
    for item in session.list_catalog(Some(Category::Momos)) {
        println!("  {} - {} ({})", item.id, item.name, item.price());
    }

    if let Err(err) = run_script(&mut session) {
        eprintln!("demo script failed: {err}");
        std::process::exit(1);
    }
}

fn run_script(session: &mut Session) -> Result<(), Box<dyn std::error::Error>> {
    // Fill the cart: steamed paneer momos, an express cold coffee, fries
    session.add_to_cart("m2", Some("Steamed"), 2, DeliverySpeed::Standard)?;
    session.add_to_cart("d1", None, 1, DeliverySpeed::Express)?;
    session.add_to_cart("f1", None, 1, DeliverySpeed::Standard)?;
    // Same key again: merges into the existing paneer line
    session.add_to_cart("m2", Some("Steamed"), 1, DeliverySpeed::Standard)?;

    println!("\n== Cart ==");
    for line in &session.cart().lines {
        println!(
            "  {} x{} ({}/{:?}) = {}",
            line.name,
            line.quantity,
            line.variant.as_deref().unwrap_or("-"),
            line.speed,
            line.line_total()
        );
    }
    println!("  badge count: {}", session.cart_count());

    let summary = session.checkout_summary();
    println!("\n== Checkout Summary ==");
    println!("  subtotal:     {}", summary.subtotal());
    println!("  delivery fee: ₹{}", summary.delivery_fee_rupees);
    println!("  grand total:  {}", summary.grand_total());

    let outcome = session.checkout()?;
    println!("\n== Order ==");
    println!("{}", serde_json::to_string_pretty(&outcome.order)?);

    session.add_review("m2", 5, "The paneer momos keep getting better!")?;

    println!("\n== Recent Reviews ==");
    for entry in session.recent_reviews(5) {
        println!(
            "  [{}★] {} on {}: {}",
            entry.review.rating, entry.review.user_name, entry.item_name, entry.review.comment
        );
    }

    let card = session.tier_card();
    println!("\n== Loyalty ==");
    println!(
        "  {:?} ({} Q-Coins, {:.0}% to next tier)",
        card.name,
        session.profile().points,
        session.progress_percent()
    );
    for benefit in &card.benefits {
        println!("  ✓ {benefit}");
    }

    println!("\n== History (by amount) ==");
    for order in session.sorted_history(SortCriterion::Amount) {
        println!(
            "  #{} {} (+{} Q-Coins)",
            order.id,
            order.total(),
            order.points_earned
        );
    }

    Ok(())
}
