//! Email digest of unfulfilled orders.
//!
//! Renders the plain-text per-order summaries and delivers them over SMTP
//! with the CSV export attached.

mod email;
mod summary;

pub use email::{Mailer, SUBJECT};
pub use summary::render_summary;
