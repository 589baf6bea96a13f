//! Shopify Admin API access.

mod client;
mod types;

pub use client::{OrdersClient, PAGE_LIMIT};
pub use types::{
    LineItem, Money, MoneySet, NoteAttribute, Order, OrdersResponse, ShippingAddress,
    ShippingLine, NOT_SPECIFIED,
};
