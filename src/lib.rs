//! Unfulfilled-order digest for Shopify stores.
//!
//! This crate provides:
//! - Order fetching from the Shopify Admin API (open + unfulfilled only)
//! - CSV export with a fixed column set
//! - Plain-text per-order summaries for the email body
//! - SMTP delivery with the export attached, deleting the file afterward

pub mod config;
pub mod digest;
pub mod export;
pub mod pipeline;
pub mod shopify;

// Re-export main types
pub use config::Config;
pub use digest::Mailer;
pub use export::ExportWriter;
pub use pipeline::{Pipeline, RunOutcome};
pub use shopify::{Order, OrdersClient};
