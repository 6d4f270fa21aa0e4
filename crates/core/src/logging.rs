use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_DIR_ENV: &str = "STENCIL_LS_LOG_DIR";

/// Directory that receives the rolling log files.
/// `STENCIL_LS_LOG_DIR` wins over `$HOME/.stencil-ls/logs`.
pub fn log_dir() -> PathBuf {
    resolve_log_dir(
        std::env::var_os(LOG_DIR_ENV).map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

fn resolve_log_dir(explicit: Option<PathBuf>, home: Option<PathBuf>) -> PathBuf {
    explicit
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| home.unwrap_or_else(|| PathBuf::from(".")).join(".stencil-ls/logs"))
}

/// `RUST_LOG` when set and valid, `info` otherwise.
fn level_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Daily-rotated `<component>.log.<date>` writer under `dir`.
fn file_writer(dir: &Path, component: &str) -> (NonBlocking, WorkerGuard) {
    if let Err(e) = std::fs::create_dir_all(dir) {
        eprintln!("cannot create log directory {}: {}", dir.display(), e);
    }
    tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, component))
}

/// Installs the global subscriber. Keep the returned guard alive for the
/// lifetime of the process or buffered lines are lost.
///
/// The LSP transport owns stdout, so console output only ever goes to
/// stderr and only when `to_stderr` is set.
pub fn init_logging(component: &str, to_stderr: bool) -> WorkerGuard {
    let (writer, guard) = file_writer(&log_dir(), component);

    let stderr = to_stderr.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
    });

    let installed = tracing_subscriber::registry()
        .with(level_filter())
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .with(stderr)
        .try_init();
    if let Err(e) = installed {
        eprintln!("logging already initialized: {}", e);
    }

    guard
}
