//! Tracing initialisation.
//!
//! Call [`init`] once at program start. Diagnostic logs go to stderr so they
//! never interleave with table or search output on stdout.

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable with a filter directive, e.g. `AUR_LOG=aur=debug`
const LOG_ENV: &str = "AUR_LOG";

/// Initialise the global tracing subscriber.
///
/// `AUR_LOG` wins over `RUST_LOG`; without either the level is `warn`, or
/// `debug` when `verbose` is set. Only the first call takes effect.
pub fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init()
        .ok();
}
