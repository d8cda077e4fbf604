//! Tracing subscriber setup for the selected log formatter.

use bebopc_flags::LogFormatter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber, writing to stderr.
///
/// `structured` emits one JSON object per event; `msbuild` emits compact,
/// uncoloured lines. `RUST_LOG` overrides the default `info` level.
pub fn init(format: LogFormatter) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = match format {
        LogFormatter::Structured => builder.json().with_current_span(false).try_init(),
        LogFormatter::MSBuild => builder
            .compact()
            .without_time()
            .with_target(false)
            .with_ansi(false)
            .try_init(),
    };

    if let Err(err) = result {
        eprintln!("warning: logging was already initialised: {err}");
    }
}
