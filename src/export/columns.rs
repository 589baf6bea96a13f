//! Column definitions for the order export.
//!
//! Each column is one independent rule from an order to a display string, so
//! the set stays ordered, testable column by column, and extensible without
//! touching the writer. Absent fields render as empty strings; the shipping
//! method falls back to [`crate::shopify::NOT_SPECIFIED`].

use crate::shopify::{LineItem, Order, ShippingAddress};

/// A single export column: header text plus its extraction rule.
pub struct Column {
    /// Header text, first row of the export.
    pub header: &'static str,
    /// Extraction rule. Pure, infallible.
    pub extract: fn(&Order) -> String,
}

/// The export columns, in output order.
pub const COLUMNS: &[Column] = &[
    Column {
        header: "Name",
        extract: |o| o.name.clone(),
    },
    Column {
        header: "Email",
        extract: |o| or_empty(&o.email),
    },
    Column {
        header: "Financial Status",
        extract: |o| or_empty(&o.financial_status),
    },
    Column {
        header: "Created at",
        extract: |o| or_empty(&o.created_at),
    },
    Column {
        header: "Lineitem quantity",
        extract: |o| {
            o.line_items
                .iter()
                .map(|i| i.quantity)
                .sum::<i64>()
                .to_string()
        },
    },
    Column {
        header: "Payment Method",
        extract: |o| o.payment_gateway_names.first().cloned().unwrap_or_default(),
    },
    Column {
        header: "Shipping Name",
        extract: |o| address_field(o, |a| &a.name),
    },
    Column {
        header: "Shipping Street",
        extract: |o| address_field(o, |a| &a.address1),
    },
    Column {
        header: "Shipping City",
        extract: |o| address_field(o, |a| &a.city),
    },
    Column {
        header: "Shipping Province",
        extract: |o| address_field(o, |a| &a.province),
    },
    Column {
        header: "Shipping Zip",
        extract: |o| address_field(o, |a| &a.zip),
    },
    Column {
        header: "Shipping Country",
        extract: |o| address_field(o, |a| &a.country),
    },
    Column {
        header: "Shipping Method",
        extract: |o| o.shipping_method(),
    },
    Column {
        header: "Lineitem name",
        extract: |o| join_items(o, |i| i.name.clone()),
    },
    Column {
        header: "Lineitem price",
        extract: |o| join_items(o, |i| i.price.clone().unwrap_or_default()),
    },
    Column {
        header: "Lineitem sku",
        extract: |o| join_items(o, |i| i.sku.clone().unwrap_or_default()),
    },
    Column {
        header: "Shipping Phone",
        extract: |o| address_field(o, |a| &a.phone),
    },
    Column {
        header: "Notes",
        extract: |o| or_empty(&o.note),
    },
    Column {
        header: "Note Attributes",
        extract: |o| {
            o.note_attributes
                .iter()
                .map(|attr| attr.display())
                .collect::<Vec<_>>()
                .join(", ")
        },
    },
    Column {
        header: "Total Price",
        extract: |o| or_empty(&o.total_price),
    },
    Column {
        header: "Subtotal",
        extract: |o| or_empty(&o.subtotal_price),
    },
    Column {
        header: "Shipping Price",
        extract: |o| {
            o.total_shipping_price_set
                .as_ref()
                .and_then(|set| set.shop_money.as_ref())
                .and_then(|money| money.amount.clone())
                .unwrap_or_default()
        },
    },
    Column {
        header: "Discount Amount",
        extract: |o| or_empty(&o.total_discounts),
    },
    Column {
        header: "Tags",
        extract: |o| or_empty(&o.tags),
    },
];

/// Header texts in column order.
#[must_use]
pub fn headers() -> Vec<&'static str> {
    COLUMNS.iter().map(|c| c.header).collect()
}

/// Project one order into a row aligned to [`headers`].
#[must_use]
pub fn row(order: &Order) -> Vec<String> {
    COLUMNS.iter().map(|c| (c.extract)(order)).collect()
}

fn or_empty(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn address_field(order: &Order, leaf: fn(&ShippingAddress) -> &Option<String>) -> String {
    order
        .shipping_address
        .as_ref()
        .and_then(|a| leaf(a).clone())
        .unwrap_or_default()
}

fn join_items(order: &Order, part: fn(&LineItem) -> String) -> String {
    order
        .line_items
        .iter()
        .map(part)
        .collect::<Vec<_>>()
        .join(", ")
}
