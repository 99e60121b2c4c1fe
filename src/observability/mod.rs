//! Observability module.
//!
//! This module sets up structured logging through `tracing`.

pub mod logging;

pub use logging::{env_filter, init_tracing};
