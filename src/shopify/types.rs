//! Shopify Admin API response types for the `orders.json` endpoint.
//!
//! Only the fields the export and summary consume are modeled. Shopify omits
//! or nulls most of them freely depending on checkout settings (pickup orders
//! carry no shipping address, manual orders no gateway, and so on), so every
//! field beyond the order name is optional or defaulted. Absence never fails
//! a record.
//!
//! Money amounts are decimal strings (e.g. `"42.50"`) and are passed through
//! verbatim, never parsed to float.

use serde::Deserialize;

/// Placeholder shown when an order has no shipping method recorded.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Top-level response from `GET /orders.json`.
#[derive(Debug, Deserialize)]
pub struct OrdersResponse {
    /// Absent when the store has no matching orders.
    #[serde(default)]
    pub orders: Vec<Order>,
}

/// A single order as returned by the Admin API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Order {
    /// Order name, e.g. `"#1001"`. Always present.
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    /// `paid`, `pending`, `refunded`, ...
    #[serde(default)]
    pub financial_status: Option<String>,
    /// ISO 8601 creation timestamp, passed through verbatim.
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
    #[serde(default)]
    pub shipping_address: Option<ShippingAddress>,
    #[serde(default)]
    pub shipping_lines: Vec<ShippingLine>,
    /// Gateways in charge order; the first one is the payment method shown.
    #[serde(default)]
    pub payment_gateway_names: Vec<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub note_attributes: Vec<NoteAttribute>,
    #[serde(default)]
    pub total_price: Option<String>,
    #[serde(default)]
    pub subtotal_price: Option<String>,
    #[serde(default)]
    pub total_shipping_price_set: Option<MoneySet>,
    #[serde(default)]
    pub total_discounts: Option<String>,
    /// Comma-separated tag string. The Admin API sends a string here, unlike
    /// the storefront endpoints which send an array.
    #[serde(default)]
    pub tags: Option<String>,
}

impl Order {
    /// First shipping line's title, or [`NOT_SPECIFIED`] when the order has
    /// no shipping lines (or the title itself is null).
    #[must_use]
    pub fn shipping_method(&self) -> String {
        self.shipping_lines
            .first()
            .and_then(|line| line.title.clone())
            .unwrap_or_else(|| NOT_SPECIFIED.to_string())
    }
}

/// One purchased product entry within an order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LineItem {
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub name: String,
    /// Unit price as a decimal string.
    #[serde(default)]
    pub price: Option<String>,
    /// May be absent or empty depending on the product setup.
    #[serde(default)]
    pub sku: Option<String>,
}

/// Shipping address. Any or all leaves may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShippingAddress {
    #[serde(default)]
    pub name: Option<String>,
    /// Street line.
    #[serde(default)]
    pub address1: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub province: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// One shipping rate chosen at checkout.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShippingLine {
    #[serde(default)]
    pub title: Option<String>,
}

/// A checkout note attribute (name/value pair).
///
/// Shopify sends strings, numbers, or null in `value` depending on how the
/// storefront populated the cart attributes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoteAttribute {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: serde_json::Value,
}

impl NoteAttribute {
    /// Render as `name: value`, with strings unquoted and null empty.
    #[must_use]
    pub fn display(&self) -> String {
        let value = match &self.value {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Null => String::new(),
            other => other.to_string(),
        };
        format!("{}: {}", self.name, value)
    }
}

/// Price in shop and presentment currencies; only the shop side is read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MoneySet {
    #[serde(default)]
    pub shop_money: Option<Money>,
}

/// A single currency amount.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Money {
    /// Decimal string amount.
    #[serde(default)]
    pub amount: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_order_deserializes() {
        let json = r##"{
            "name": "#1001",
            "email": "alice@example.com",
            "financial_status": "paid",
            "created_at": "2025-06-01T09:30:00-04:00",
            "line_items": [
                {"quantity": 2, "name": "Lamb Box", "price": "10.00", "sku": "LAMB-01"},
                {"quantity": 1, "name": "Beef Box", "price": "5.00", "sku": null}
            ],
            "shipping_address": {
                "name": "Alice Ahmed",
                "address1": "1 Main St",
                "city": "Toronto",
                "province": "ON",
                "zip": "M1M 1M1",
                "country": "Canada",
                "phone": "+1 416 555 0100"
            },
            "shipping_lines": [{"title": "Standard Shipping"}],
            "payment_gateway_names": ["shopify_payments"],
            "note": "Leave at door",
            "note_attributes": [{"name": "Delivery day", "value": "Friday"}],
            "total_price": "18.50",
            "subtotal_price": "15.00",
            "total_shipping_price_set": {"shop_money": {"amount": "3.50"}},
            "total_discounts": "0.00",
            "tags": "wholesale"
        }"##;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.name, "#1001");
        assert_eq!(order.line_items.len(), 2);
        assert_eq!(order.line_items[1].sku, None);
        assert_eq!(order.shipping_method(), "Standard Shipping");
        assert_eq!(
            order
                .total_shipping_price_set
                .unwrap()
                .shop_money
                .unwrap()
                .amount
                .as_deref(),
            Some("3.50")
        );
    }

    #[test]
    fn test_bare_order_tolerates_absent_fields() {
        let order: Order = serde_json::from_str(r##"{"name": "#1002"}"##).unwrap();
        assert!(order.email.is_none());
        assert!(order.line_items.is_empty());
        assert!(order.shipping_address.is_none());
        assert_eq!(order.shipping_method(), NOT_SPECIFIED);
    }

    #[test]
    fn test_null_shipping_line_title_falls_back() {
        let order: Order =
            serde_json::from_str(r##"{"name": "#1003", "shipping_lines": [{"title": null}]}"##)
                .unwrap();
        assert_eq!(order.shipping_method(), NOT_SPECIFIED);
    }

    #[test]
    fn test_missing_orders_key_is_empty() {
        let response: OrdersResponse = serde_json::from_str("{}").unwrap();
        assert!(response.orders.is_empty());
    }

    #[test]
    fn test_note_attribute_display() {
        let attr: NoteAttribute =
            serde_json::from_str(r#"{"name": "Gift", "value": "yes"}"#).unwrap();
        assert_eq!(attr.display(), "Gift: yes");

        let numeric: NoteAttribute =
            serde_json::from_str(r#"{"name": "Boxes", "value": 3}"#).unwrap();
        assert_eq!(numeric.display(), "Boxes: 3");

        let null: NoteAttribute = serde_json::from_str(r#"{"name": "Gift"}"#).unwrap();
        assert_eq!(null.display(), "Gift: ");
    }
}
