//! Order digest CLI - exports and emails a store's unfulfilled orders.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use order_digest::digest::{self, Mailer};
use order_digest::export::EXPORT_FILENAME;
use order_digest::shopify::OrdersClient;
use order_digest::{Config, Pipeline, RunOutcome};

/// Order digest CLI - email a store's open unfulfilled orders.
#[derive(Parser)]
#[command(name = "order-digest")]
#[command(about = "Export and email a store's open unfulfilled orders")]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a single fetch-export-email cycle (for cron use)
    Run {
        /// Path for the CSV export
        #[arg(long, default_value = EXPORT_FILENAME)]
        output: PathBuf,
    },

    /// Fetch orders and print the summary without writing or sending
    Preview,

    /// Send a test email to verify SMTP configuration
    TestEmail,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        EnvFilter::new("order_digest=debug,info")
    } else {
        EnvFilter::new("order_digest=info,warn")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let config = Config::from_env()?;

    match cli.command {
        Commands::Run { output } => run_digest(config, output).await,
        Commands::Preview => run_preview(config).await,
        Commands::TestEmail => run_test_email(config).await,
    }
}

async fn run_digest(config: Config, output: PathBuf) -> Result<()> {
    let pipeline = Pipeline::new(config, output);

    match pipeline.run().await? {
        RunOutcome::NoOrders => {
            println!("✅ No unfulfilled orders found. No email sent.");
        }
        RunOutcome::RecipientMissing { export_path } => {
            println!(
                "❌ RECIPIENT_EMAIL is not configured. Export kept at {}.",
                export_path.display()
            );
        }
        RunOutcome::Sent { orders } => {
            println!("✅ Email sent with CSV attachment ({orders} orders).");
        }
    }

    Ok(())
}

async fn run_preview(config: Config) -> Result<()> {
    let client = OrdersClient::new(&config)?;
    let orders = client.fetch_unfulfilled().await?;

    if orders.is_empty() {
        println!("✅ No unfulfilled orders found.");
        return Ok(());
    }

    println!("{}", digest::render_summary(&orders));
    println!("\nTotal: {} orders", orders.len());

    Ok(())
}

async fn run_test_email(config: Config) -> Result<()> {
    let mailer = Mailer::new(config);
    mailer.send_test().await?;
    println!("✅ Test email sent.");
    Ok(())
}
