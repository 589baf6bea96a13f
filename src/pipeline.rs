//! Pipeline - orchestrates the fetch-export-summarize-send flow.

use anyhow::Result;
use std::path::PathBuf;

use crate::config::Config;
use crate::digest::{self, Mailer};
use crate::export::{ExportWriter, EXPORT_FILENAME};
use crate::shopify::OrdersClient;

/// Outcome of a single run, consumed by the CLI for its status line.
#[derive(Debug)]
pub enum RunOutcome {
    /// No open unfulfilled orders; nothing was written or sent.
    NoOrders,
    /// Orders were exported but no recipient is configured; the export is
    /// left on disk.
    RecipientMissing {
        /// Where the export was written.
        export_path: PathBuf,
    },
    /// The digest was sent and the export deleted.
    Sent {
        /// Number of orders included.
        orders: usize,
    },
}

/// Orchestrates one end-to-end run.
pub struct Pipeline {
    config: Config,
    export_path: PathBuf,
}

impl Pipeline {
    /// Create a pipeline writing its export to the given path.
    #[must_use]
    pub const fn new(config: Config, export_path: PathBuf) -> Self {
        Self {
            config,
            export_path,
        }
    }

    /// Run a single fetch-export-send cycle.
    pub async fn run(&self) -> Result<RunOutcome> {
        let client = OrdersClient::new(&self.config)?;
        self.run_with_client(&client).await
    }

    /// Run against an existing client (tests inject a mock-server client).
    pub async fn run_with_client(&self, client: &OrdersClient) -> Result<RunOutcome> {
        tracing::info!(store = %self.config.store, "Starting order digest run");

        let orders = client.fetch_unfulfilled().await?;
        if orders.is_empty() {
            tracing::info!("No unfulfilled orders found");
            return Ok(RunOutcome::NoOrders);
        }
        tracing::info!(count = orders.len(), "Processing unfulfilled orders");

        let writer = ExportWriter::new(self.export_path.clone());
        writer.write(&orders)?;

        let body = digest::render_summary(&orders);

        if self.config.recipient.is_none() {
            tracing::warn!(
                path = %self.export_path.display(),
                "RECIPIENT_EMAIL is not configured; skipping email and keeping the export"
            );
            return Ok(RunOutcome::RecipientMissing {
                export_path: self.export_path.clone(),
            });
        }

        let filename = self
            .export_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| EXPORT_FILENAME.to_string());
        let attachment = (filename, writer.read()?);

        let mailer = Mailer::new(self.config.clone());
        mailer.send(digest::SUBJECT, &body, Some(attachment)).await?;

        writer.remove()?;

        Ok(RunOutcome::Sent {
            orders: orders.len(),
        })
    }
}
