//! Utility modules for networking and display formatting.
//!
//! Provides:
//! - [`fetch_json`] - JSON fetching over the browser Fetch API with timeout
//! - [`format`] - Money, date, quantity, and position formatting

pub mod fetch;
pub mod format;

pub use fetch::fetch_json;
