//! Structured logging foundation for shake.
//!
//! stdout is reserved for command payloads; all log output goes to stderr,
//! human-readable by default or JSON lines for agent workflows. `RUST_LOG`
//! overrides the verbosity flags when set.

use std::io::IsTerminal;

use tracing_subscriber::{fmt, EnvFilter};

/// Log output shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Human,
    Json,
}

/// Map -v/-q flags to a default filter directive.
fn default_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Initialize the global subscriber. Call once at startup.
pub fn init_logging(verbose: u8, quiet: bool, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    let builder = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal());

    let result = match format {
        LogFormat::Human => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    // A second init (tests, embedding) keeps the first subscriber.
    let _ = result;
}
