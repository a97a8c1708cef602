// ==========================================
// Siparis Converter - logging setup
// ==========================================
// `tracing` + `tracing-subscriber` initialization, level driven by
// the RUST_LOG environment variable.
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the global tracing subscriber.
///
/// # Environment
/// - `RUST_LOG`: level filter (defaults to `info`).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();
}

/// Initialize logging for tests (idempotent, test writer).
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
