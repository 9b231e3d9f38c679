//! Logging utilities

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system
///
/// Filters come from `RUST_LOG`; without it the engine logs at `info`.
pub fn init() {
    let env = env_logger::Env::default().default_filter_or("info");
    // A second init (e.g. from tests) keeps the first logger.
    let _ = env_logger::Builder::from_env(env).try_init();
}
