//! Plain-text order summaries for the email body.

use std::fmt::Write;

use crate::shopify::Order;

/// Width of the divider line closing each order block.
const DIVIDER_WIDTH: usize = 40;

/// Render one block per order, blocks separated by a blank line.
#[must_use]
pub fn render_summary(orders: &[Order]) -> String {
    orders
        .iter()
        .map(order_block)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn order_block(order: &Order) -> String {
    let addr = order.shipping_address.as_ref();
    fn part(value: Option<&String>) -> &str {
        value.map(String::as_str).unwrap_or_default()
    }

    let mut block = String::new();
    let _ = writeln!(block, "Order: {}", order.name);
    let _ = writeln!(
        block,
        "Customer: {}",
        part(addr.and_then(|a| a.name.as_ref()))
    );
    let _ = writeln!(block, "Email: {}", part(order.email.as_ref()));
    let _ = writeln!(block, "Shipping Method: {}", order.shipping_method());
    // Empty components keep their separators so the line shape stays stable
    let _ = writeln!(
        block,
        "Address: {}, {}, {} {}, {}",
        part(addr.and_then(|a| a.address1.as_ref())),
        part(addr.and_then(|a| a.city.as_ref())),
        part(addr.and_then(|a| a.province.as_ref())),
        part(addr.and_then(|a| a.zip.as_ref())),
        part(addr.and_then(|a| a.country.as_ref())),
    );
    block.push_str("Items:\n");
    for item in &order.line_items {
        let _ = writeln!(
            block,
            "  - {} x {} (SKU: {})",
            item.quantity,
            item.name,
            item.sku.as_deref().unwrap_or_default()
        );
    }
    block.push_str(&"-".repeat(DIVIDER_WIDTH));
    block
}
