//! # Utility Modules
//!
//! Supporting utilities shared by the rewriting layers.
//!
//! ## Components
//! - **Logging**: Structured logging configuration
//! - **Metrics**: Thread-safe observability counters

pub mod logging;
pub mod metrics;
