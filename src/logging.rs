//! Tracing setup.
//!
//! The TUI owns the terminal, so it logs to a file through a non-blocking
//! appender. CLI commands log to stderr unless a log directory is
//! configured. `LEGALGUIDE_LOG` takes precedence over the configured level.

use std::fs;
use std::io;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Environment variable holding a tracing filter directive.
pub const ENV_VAR: &str = "LEGALGUIDE_LOG";

const LOG_FILE: &str = "legalguide.log";

fn filter(config: &Config, fallback: &str) -> EnvFilter {
    let env = std::env::var(ENV_VAR).ok();
    select(env.as_deref(), config.log_level.as_deref(), fallback)
}

/// The first directive that parses: environment, then config, then `fallback`.
fn select(env: Option<&str>, configured: Option<&str>, fallback: &str) -> EnvFilter {
    [env, configured]
        .into_iter()
        .flatten()
        .find_map(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(fallback))
}

/// Log to stderr. Quiet by default so command output stays readable.
pub fn init_stderr(config: &Config) {
    // A subscriber may already be installed (tests); keep the first one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(config, "warn"))
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

/// Log to `<dir>/legalguide.log`.
///
/// The returned guard flushes buffered lines when dropped; hold it for
/// the life of the program.
pub fn init_file(config: &Config, dir: &Path) -> io::Result<WorkerGuard> {
    fs::create_dir_all(dir)?;
    let appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(config, "info"))
        .with_ansi(false)
        .with_writer(writer)
        .try_init();

    Ok(guard)
}
