//! logging
//!
//! Diagnostic logging setup.
//!
//! Diagnostics are `tracing` events written to stderr. The default level is
//! `warn`; `--debug` raises it to `debug`. `GIT_SUMMARIZE_BRANCH_LOG` takes
//! an `EnvFilter` directive (for example `git_summarize_branch=trace`) and
//! overrides both.

use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding a filter directive.
pub const LOG_ENV: &str = "GIT_SUMMARIZE_BRANCH_LOG";

/// Install the global subscriber.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(debug: bool) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(if debug {
            LevelFilter::DEBUG.into()
        } else {
            LevelFilter::WARN.into()
        })
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    let fmt = fmt::layer()
        .with_target(true)
        .without_time()
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(fmt)
        .with(env_filter)
        .try_init();
}
