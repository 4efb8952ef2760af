//! Logger bootstrap

/// Install the `env_logger` backend, filtered by `RUST_LOG`.
///
/// Safe to call more than once; later calls leave the first logger in place.
pub fn init() {
    if env_logger::try_init().is_err() {
        log::debug!("logger already installed, keeping the existing one");
    }
}
