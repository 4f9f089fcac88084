//! Logging setup
//!
//! Stdout carries NDJSON only, so logs go to stderr or to a file:
//!
//! - `LOG_FILE` set: the file is truncated and receives logs at the level
//!   chosen by `LOG_LEVEL` (`0` silent, `1` info, anything else debug;
//!   default `0`).
//! - `LOG_FILE` unset: stderr, filtered by `RUST_LOG` (default `warn`).

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::error;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_FILE_ENV: &str = "LOG_FILE";
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Map a `LOG_LEVEL` value to a filter
pub fn level_filter(level: Option<&str>) -> LevelFilter {
    match level.map(str::trim) {
        None | Some("0") => LevelFilter::OFF,
        Some("1") => LevelFilter::INFO,
        Some(_) => LevelFilter::DEBUG,
    }
}

/// Install the global subscriber.
///
/// Fails only when `LOG_FILE` names a file that cannot be created.
pub fn init() -> std::io::Result<()> {
    let log_file = std::env::var_os(LOG_FILE_ENV).filter(|p| !p.is_empty());

    match log_file {
        Some(path) => {
            let file = File::create(Path::new(&path))?;
            let level = std::env::var(LOG_LEVEL_ENV).ok();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false)
                        .with_filter(level_filter(level.as_deref())),
                )
                .init();
        }
        None => {
            let filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr).with_filter(filter))
                .init();
        }
    }
    Ok(())
}

/// Whether a GitHub token has a recognised prefix
pub fn is_valid_github_token(token: &str) -> bool {
    token.starts_with("ghp_") || token.starts_with("github_pat_")
}

/// `GITHUB_TOKEN` if non-empty, else `GH_TOKEN` if non-empty
fn select_github_token(github: Option<String>, gh: Option<String>) -> Option<String> {
    github
        .filter(|t| !t.is_empty())
        .or_else(|| gh.filter(|t| !t.is_empty()))
}

/// Report a malformed `GITHUB_TOKEN`/`GH_TOKEN` on stderr and in the log.
/// Processing continues either way.
pub fn check_github_token() {
    let token = select_github_token(
        std::env::var("GITHUB_TOKEN").ok(),
        std::env::var("GH_TOKEN").ok(),
    );

    if let Some(token) = token {
        if !is_valid_github_token(&token) {
            eprintln!("Invalid GitHub token provided");
            error!("Invalid GitHub token provided");
        }
    }
}
