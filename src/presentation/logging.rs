//! Logging setup
//!
//! Everything goes to stderr. `APPENGINE_LOG` takes an `EnvFilter` directive;
//! without it the level comes from the `-v` count.

use is_terminal::IsTerminal;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding a filter directive (e.g. `appengine_deploy=debug`)
pub const LOG_ENV: &str = "APPENGINE_LOG";

/// Filter level for a `-v` count
pub fn level_for_verbosity(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "warn";
    }
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber; a second call is a no-op
pub fn init_logging(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbose, quiet)));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(verbose > 1)
        .without_time();

    // try_init fails only when a subscriber is already installed
    let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
}
