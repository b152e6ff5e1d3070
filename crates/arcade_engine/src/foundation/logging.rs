//! Logging utilities
//!
//! Thin wrapper over the `log` facade with an `env_logger` backend. Binaries
//! call [`init`] once at startup; `RUST_LOG` overrides the default filter.

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system with an `info` default filter
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
