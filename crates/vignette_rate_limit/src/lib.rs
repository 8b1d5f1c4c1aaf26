//! Per-identifier admission control for generation sequences.
//!
//! The governor bounds how often a caller may start a generation
//! sequence. State is shared and process-wide, behind the injectable
//! [`vignette_interface::RateStore`] trait so multi-instance deployments
//! can swap in an external store without changing call sites.

mod config;
mod persist;
mod store;

pub use config::GovernorConfig;
pub use persist::FileRateStore;
pub use store::MemoryRateStore;
