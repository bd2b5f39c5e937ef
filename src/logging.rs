use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Result, WayfindError};

/// Environment variable consulted when `RUST_LOG` is not set.
pub const LOG_ENV_VAR: &str = "WAYFIND_LOG";

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some search ...
/// trace_time!(start, "depth_first_search");
/// // Or with additional fields:
/// trace_time!(start, "depth_first_search", visited = path.visited().len());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Map a host application's verbosity settings onto an `EnvFilter` directive.
///
/// A bare level such as `trace` is scoped to this crate; anything containing
/// `=` is passed through untouched.
pub fn build_filter_directive(verbose: bool, log_level: Option<&str>) -> String {
    match (verbose, log_level) {
        (_, Some(level)) if level.contains('=') => level.to_string(),
        (_, Some(level)) => format!("wayfind={}", level),
        (true, None) => "wayfind=debug".to_string(),
        (false, None) => "wayfind=warn".to_string(),
    }
}

/// Initialize structured logging for a host application
pub fn init_tracing(verbose: bool, log_level: Option<&str>, log_json: bool) -> Result<()> {
    let directive = build_filter_directive(verbose, log_level);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV_VAR))
        .unwrap_or_else(|_| EnvFilter::new(directive));

    let registry = tracing_subscriber::registry().with(filter);

    let installed = if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(
                        tracing_subscriber::fmt::format::FmtSpan::NEW
                            | tracing_subscriber::fmt::format::FmtSpan::CLOSE,
                    ),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()
    };

    installed.map_err(|e| WayfindError::Logging(e.to_string()))
}
