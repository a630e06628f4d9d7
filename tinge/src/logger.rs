// tinge/src/logger.rs
//! Logging setup for the CLI.
//!
//! Diagnostics go to stderr in a message-only format, keeping stdout
//! reserved for painted lines so the colorized data channel is never
//! polluted by error text. `RUST_LOG` still wins over the defaults.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

pub fn init(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    Builder::from_env(Env::default().default_filter_or(default_level.as_str()))
        .format_timestamp(None)
        .format_target(false)
        .target(Target::Stderr)
        .init();
}
