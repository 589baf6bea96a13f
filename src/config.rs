//! Configuration for the order digest run.

use anyhow::{Context, Result};

/// Default Shopify Admin API version.
pub const DEFAULT_API_VERSION: &str = "2023-04";

/// Default SMTP host.
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

/// Default SMTP port (STARTTLS).
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Runtime configuration, constructed once at startup and passed to each
/// component. Nothing outside [`Config::from_env`] reads the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Store subdomain under `.myshopify.com`.
    pub store: String,
    /// Admin API version path segment.
    pub api_version: String,
    /// Admin API access token.
    pub access_token: String,
    /// SMTP server hostname.
    pub smtp_host: String,
    /// SMTP server port.
    pub smtp_port: u16,
    /// Sender email address (also the SMTP username).
    pub sender: String,
    /// SMTP password (Gmail app password, not the account password).
    pub sender_password: String,
    /// Recipient email address. Absence is not a load error; the pipeline
    /// skips sending and reports the condition instead.
    pub recipient: Option<String>,
}

impl Config {
    /// Create configuration from environment variables.
    ///
    /// # Required Environment Variables
    /// - `SHOPIFY_STORE_NAME`: store subdomain
    /// - `SHOPIFY_ADMIN_API_TOKEN`: Admin API access token
    /// - `SENDER_EMAIL`: sending address / SMTP username
    /// - `SENDER_PASSWORD`: SMTP password
    ///
    /// # Optional Environment Variables
    /// - `SHOPIFY_API_VERSION`: API version (default: 2023-04)
    /// - `SMTP_HOST`: SMTP server (default: smtp.gmail.com)
    /// - `SMTP_PORT`: SMTP port (default: 587)
    /// - `RECIPIENT_EMAIL`: digest recipient
    pub fn from_env() -> Result<Self> {
        let store = std::env::var("SHOPIFY_STORE_NAME")
            .context("SHOPIFY_STORE_NAME environment variable not set")?;

        let access_token = std::env::var("SHOPIFY_ADMIN_API_TOKEN")
            .context("SHOPIFY_ADMIN_API_TOKEN environment variable not set")?;

        let sender = std::env::var("SENDER_EMAIL")
            .context("SENDER_EMAIL environment variable not set")?;

        let sender_password = std::env::var("SENDER_PASSWORD")
            .context("SENDER_PASSWORD environment variable not set")?;

        let api_version = std::env::var("SHOPIFY_API_VERSION")
            .unwrap_or_else(|_| DEFAULT_API_VERSION.to_string());

        let smtp_host =
            std::env::var("SMTP_HOST").unwrap_or_else(|_| DEFAULT_SMTP_HOST.to_string());

        let smtp_port = std::env::var("SMTP_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_SMTP_PORT);

        let recipient = std::env::var("RECIPIENT_EMAIL")
            .ok()
            .filter(|v| !v.is_empty());

        Ok(Self {
            store,
            api_version,
            access_token,
            smtp_host,
            smtp_port,
            sender,
            sender_password,
            recipient,
        })
    }

    /// Base URL of the store's Admin API.
    #[must_use]
    pub fn api_base(&self) -> String {
        format!(
            "https://{}.myshopify.com/admin/api/{}",
            self.store, self.api_version
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            store: "example-store".to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            access_token: "shpat_test".to_string(),
            smtp_host: DEFAULT_SMTP_HOST.to_string(),
            smtp_port: DEFAULT_SMTP_PORT,
            sender: "sender@example.com".to_string(),
            sender_password: "secret".to_string(),
            recipient: Some("ops@example.com".to_string()),
        }
    }

    #[test]
    fn test_api_base() {
        let config = test_config();
        assert_eq!(
            config.api_base(),
            "https://example-store.myshopify.com/admin/api/2023-04"
        );
    }

    #[test]
    fn test_api_base_tracks_version() {
        let config = Config {
            api_version: "2024-01".to_string(),
            ..test_config()
        };
        assert!(config.api_base().ends_with("/admin/api/2024-01"));
    }
}
