//! Diagnostic logging.

use std::io;
use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static INIT: Once = Once::new();

/// Log filter for a `-v` count: warnings by default, then info, debug, trace.
pub fn filter_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the stderr subscriber. Only the first call has any effect.
///
/// Program output owns stdout, so diagnostics never go there.
pub fn init(verbosity: u8) {
    INIT.call_once(|| {
        let filter = EnvFilter::new(filter_for(verbosity));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(io::stderr)
                    .with_target(true)
                    .without_time(),
            )
            .with(filter)
            .init();
    });
}
