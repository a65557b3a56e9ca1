pub mod build_info;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Installs the global tracing subscriber once.
///
/// `RUST_LOG` wins when set; otherwise the crate logs at `level`. Output goes
/// to stderr so it never mixes with command output.
pub fn init_tracing(level: &str) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(format!("solo_finance={level}")))
            .unwrap_or_else(|_| EnvFilter::new("solo_finance=warn"));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
        tracing::info!(level, "Solo Finance tracing initialized.");
    });
}
