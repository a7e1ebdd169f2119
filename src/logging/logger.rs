// file: src/logging/logger.rs
// version: 1.1.0
// guid: f4a06d83-29c7-4b5e-8d10-67e3b2f9c450

//! Logger initialization and configuration

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system.
///
/// A second initialization in the same process is a no-op; handlers never
/// log their own errors, so the trace output is diagnostics only.
pub fn init_logger(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}
