//! CSV export of orders.

mod columns;
mod writer;

pub use columns::{headers, row, Column, COLUMNS};
pub use writer::{render, ExportWriter, EXPORT_FILENAME};
