//! Logging setup on top of the `log` facade

pub use log::{debug, error, info, trace, warn};

/// Initialize `env_logger` at `Info`, overridable through `RUST_LOG`
///
/// Repeated calls are ignored.
pub fn init() {
    let _ = env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .is_test(cfg!(test))
        .try_init();
}
