use std::io;

use tracing::debug;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_FILTER: &str = "warn";

/// Installs the stderr subscriber. The orchestrator echoes stderr, so the
/// default filter stays quiet unless `RUST_LOG` asks for more.
///
/// Returns `false` when another global subscriber was already installed.
pub fn init_logging(json: bool) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::NONE)
        .with_ansi(false)
        .with_writer(io::stderr);

    let installed = if json {
        tracing::subscriber::set_global_default(builder.json().with_current_span(false).finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    match installed {
        Ok(()) => true,
        Err(error) => {
            debug!(%error, "keeping the tracing subscriber that is already installed");
            false
        }
    }
}
