//! Pure, host-testable application logic.
//!
//! - [`carousel`] - Single-item browsing with swipe gesture interpretation
//! - [`error`] - Fetch error taxonomy for the API boundary
//! - [`filter`] - Free-text record filtering for the browser pages

pub mod carousel;
pub mod error;
pub mod filter;

pub use carousel::{Carousel, GestureConfig, NavPolicy};
pub use error::FetchError;
pub use filter::{TextFilter, filter_by_text};
