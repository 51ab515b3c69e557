//! Test logging: one `tracing` subscriber per test binary.

use std::sync::Once;

use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

static INIT: Once = Once::new();

/// Routes builder logs into the captured test output.
///
/// Honors `RUST_LOG`; without it, `lcfixture` logs at debug level.
pub fn init_test_setup() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("lcfixture=debug"));
        // fails only if the binary installed its own subscriber first
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_span_events(FmtSpan::CLOSE)
            .try_init();
    });
}
