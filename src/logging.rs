//! Diagnostics on stderr through `tracing`.
//!
//! Quiet by default: only warnings are shown. `--verbose` raises the crate's
//! own level to `debug`. `RUST_LOG` takes precedence over both:
//! ```bash
//! RUST_LOG=docit=trace docit gen include/demo/stack.h demo docs/stack.md
//! ```

use std::sync::Once;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: Once = Once::new();

const DEFAULT_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "warn,docit=debug";

/// Install the global subscriber. Only the first call takes effect.
pub fn init(verbose: bool) {
    INIT.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if verbose {
            EnvFilter::new(VERBOSE_FILTER)
        } else {
            EnvFilter::new(DEFAULT_FILTER)
        };

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_filter(filter);

        tracing_subscriber::registry().with(fmt_layer).init();
    });
}
