//! Boundary traits for the Vignette comic generation library.
//!
//! The external image/text provider and the admission store are consumed
//! through the traits here, so implementations can be swapped without
//! touching the orchestration core.

mod driver;
mod rate_store;

pub use driver::{ImageDriver, TextDriver};
pub use rate_store::{RateLimitHeaders, RateStore};
