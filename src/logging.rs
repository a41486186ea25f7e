//! Tracing setup.
//!
//! The terminal UI owns stdout, so events go to a log file. Level comes from
//! `--debug`, then `RUST_LOG`, then defaults to info for this crate.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Where log output should go when the file cannot be opened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fallback {
    Stderr,
    Silent,
}

fn filter(debug: bool) -> EnvFilter {
    if debug {
        EnvFilter::new("tickdown=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tickdown=info"))
    }
}

pub fn init(log_path: Option<&Path>, debug: bool, fallback: Fallback) {
    let file = log_path.and_then(|path| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .ok()
    });

    let result = match (file, fallback) {
        (Some(file), _) => tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(false)
                    .with_writer(Mutex::new(file)),
            )
            .with(filter(debug))
            .try_init(),
        (None, Fallback::Stderr) => tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .with(filter(debug))
            .try_init(),
        (None, Fallback::Silent) => return,
    };

    if result.is_ok() {
        tracing::debug!(
            version = env!("CARGO_PKG_VERSION"),
            platform = std::env::consts::OS,
            "logging initialised"
        );
    }
}
