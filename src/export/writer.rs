//! CSV rendering and export-file lifecycle.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::shopify::Order;

use super::columns;

/// Default export filename.
pub const EXPORT_FILENAME: &str = "orders_export.csv";

/// Writes the order export and removes it after delivery.
pub struct ExportWriter {
    path: PathBuf,
}

impl ExportWriter {
    /// Create a writer targeting the given path.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the export file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Render and write the export, overwriting any previous file.
    pub fn write(&self, orders: &[Order]) -> Result<()> {
        std::fs::write(&self.path, render(orders))?;
        tracing::info!(
            path = %self.path.display(),
            orders = orders.len(),
            "Wrote order export"
        );
        Ok(())
    }

    /// Read the export back for attaching to the email.
    pub fn read(&self) -> Result<Vec<u8>> {
        Ok(std::fs::read(&self.path)?)
    }

    /// Delete the export after the send attempt.
    pub fn remove(&self) -> Result<()> {
        std::fs::remove_file(&self.path)?;
        tracing::info!(path = %self.path.display(), "Deleted export after sending");
        Ok(())
    }
}

/// Render the header row and one row per order, in input order, as UTF-8 CSV.
#[must_use]
pub fn render(orders: &[Order]) -> String {
    let mut out = String::new();
    out.push_str(&render_line(&columns::headers()));
    for order in orders {
        let row = columns::row(order);
        out.push_str(&render_line(&row));
    }
    out
}

fn render_line<S: AsRef<str>>(fields: &[S]) -> String {
    let mut line = fields
        .iter()
        .map(|f| csv_field(f.as_ref()))
        .collect::<Vec<_>>()
        .join(",");
    line.push('\n');
    line
}

/// Quote a field when it contains a delimiter, quote, or line break
/// (RFC 4180); embedded quotes are doubled.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
