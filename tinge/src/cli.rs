// tinge/src/cli.rs
//! This file defines the command-line interface (CLI) for the tinge
//! application, including all available flags and their arguments.

use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "tinge",
    author = "Carlo M.",
    version = env!("CARGO_PKG_VERSION"),
    about = "Colorize the output of any command-line tool",
    long_about = "Tinge is a command-line output colorizer. It reads text lines from \
standard input (or from a command it spawns for you) and rewrites every substring \
matching one of your pattern=>style rules with terminal escape-code decorations, \
in real time. Rules come from an inline request, a config file, or a built-in preset.",
    group(ArgGroup::new("source").required(true).args(["request", "file", "preset", "list"])),
)]
pub struct Cli {
    /// The requested pattern/style mapping string.
    #[arg(
        long,
        short = 'r',
        value_name = "REQUEST",
        help = "The requested pattern=>style mapping string. Multiple rules are separated \
by spaces or newlines. Regular expressions are supported, e.g. \"error=>red [Ww]arning=>yellow_bold\"."
    )]
    pub request: Option<String>,

    /// Path to a custom pattern=>style configuration file.
    #[arg(
        long,
        short = 'f',
        value_name = "FILE",
        help = "Path to a custom pattern=>style configuration file. Relative names are \
also looked up in ~/.tinge and among the built-in presets."
    )]
    pub file: Option<PathBuf>,

    /// Use a built-in preset for a known output stream.
    #[arg(
        long,
        short = 'p',
        value_name = "PRESET",
        help = "Use a built-in preset for coloring known output streams (gcc, cmake, dmesg, errors)."
    )]
    pub preset: Option<String>,

    /// Spawn a command instead of reading from a pipe.
    #[arg(
        long,
        short = 'c',
        value_name = "COMMAND",
        help = "Instead of using tinge with pipes, set the command line to be executed \
by tinge directly, e.g. -c \"dmesg -w\". Its stdout and stderr are captured as one stream."
    )]
    pub command: Option<String>,

    /// Delimiter between pattern and style name.
    #[arg(
        long,
        short = 'd',
        value_name = "DELIMITER",
        default_value = "=>",
        help = "If you don't like \"=>\" as the delimiter between pattern and style, use \
this flag to change it, e.g. -d \"&\"."
    )]
    pub delimiter: String,

    /// Only emit lines that matched at least one rule.
    #[arg(
        long = "match-only",
        short = 'm',
        help = "Discard lines that match no rule instead of passing them through unchanged."
    )]
    pub match_only: bool,

    /// List all the available styles and presets.
    #[arg(long, short = 'l', help = "List all the available styles and presets, then exit.")]
    pub list: bool,

    /// Enable debug logging.
    #[arg(long, short = 'v', help = "Enable debug logging.")]
    pub verbose: bool,
}
