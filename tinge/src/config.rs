// tinge/src/config.rs
//! Request assembly: turning CLI input into the flattened rule text the
//! commission builder consumes.
//!
//! A request can come from three places: an inline `--request` string, a
//! `--file` config file, or a built-in `--preset`. Config files are plain
//! text with one rule per line; blank lines and `#`-prefixed lines are
//! ignored, and `include <name>` lines splice in another file or preset.
//! Relative names are looked up on disk first, then in the user's
//! `~/.tinge` directory, then among the presets embedded in the binary.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use log::{debug, info};
use thiserror::Error;

use crate::cli::Cli;

/// Built-in presets compiled into the binary. Each file's first line is a
/// `#` description shown by `--list`.
const BUILTIN_PRESETS: &[(&str, &str)] = &[
    ("cmake", include_str!("../presets/cmake")),
    ("dmesg", include_str!("../presets/dmesg")),
    ("errors", include_str!("../presets/errors")),
    ("gcc", include_str!("../presets/gcc")),
];

/// Nested `include` resolution stops here. Config files including each
/// other in a cycle would otherwise recurse forever.
const MAX_INCLUDE_DEPTH: usize = 16;

/// Errors for missing or unresolvable rule sources. These map to the
/// "config error" exit path, distinct from rule-syntax errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not find configuration file '{}'", .0.display())]
    FileNotFound(PathBuf),

    #[error("no preset named '{0}'")]
    UnknownPreset(String),

    #[error("too many nested includes while resolving '{0}'")]
    IncludeDepth(String),
}

/// Where a named rule source was found.
enum RuleSource {
    Disk(PathBuf),
    Builtin(&'static str),
}

/// Assembles the flattened request text for the given CLI invocation.
pub fn assemble_request(args: &Cli) -> Result<String> {
    if let Some(request) = &args.request {
        debug!("got inline request \"{}\"", request);
        return Ok(request.clone());
    }
    if let Some(path) = &args.file {
        return request_from_file(path);
    }
    if let Some(name) = &args.preset {
        return request_from_preset(name);
    }
    // clap's source group guarantees one of the flags above (or --list,
    // which never reaches request assembly).
    bail!("no rule source given")
}

/// Splits a flattened request into rule tokens. Rules are separated by
/// spaces or newlines; patterns express literal spaces as `\s`.
pub fn split_request(request: &str) -> Vec<String> {
    request.split_whitespace().map(str::to_string).collect()
}

/// Loads and flattens a config file, resolving `include` directives.
pub fn request_from_file(path: &Path) -> Result<String> {
    match locate(path) {
        Some(RuleSource::Disk(resolved)) => {
            info!("loading rules from {}", resolved.display());
            let text = fs::read_to_string(&resolved)
                .with_context(|| format!("failed to read config file {}", resolved.display()))?;
            flatten_request(&text, 0)
        }
        Some(RuleSource::Builtin(text)) => flatten_request(text, 0),
        None => Err(ConfigError::FileNotFound(path.to_path_buf()).into()),
    }
}

/// Flattens a built-in preset by name.
pub fn request_from_preset(name: &str) -> Result<String> {
    let text =
        builtin_preset(name).ok_or_else(|| ConfigError::UnknownPreset(name.to_string()))?;
    debug!("using preset '{}'", name);
    flatten_request(text, 0)
}

/// The built-in preset names with their one-line descriptions, for `--list`.
pub fn preset_summaries() -> Vec<(&'static str, String)> {
    BUILTIN_PRESETS
        .iter()
        .map(|(name, text)| {
            let description = text
                .lines()
                .next()
                .filter(|first| first.starts_with('#'))
                .map(|first| first.trim_start_matches('#').trim().to_string())
                .unwrap_or_default();
            (*name, description)
        })
        .collect()
}

/// The directory for user config files and custom presets.
pub fn user_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".tinge"))
}

fn builtin_preset(name: &str) -> Option<&'static str> {
    BUILTIN_PRESETS
        .iter()
        .find(|(preset, _)| *preset == name)
        .map(|(_, text)| *text)
}

/// Resolution order: the literal path, then `~/.tinge/<basename>`, then the
/// embedded presets.
fn locate(path: &Path) -> Option<RuleSource> {
    if path.exists() {
        return Some(RuleSource::Disk(path.to_path_buf()));
    }

    if let (Some(dir), Some(file_name)) = (user_config_dir(), path.file_name()) {
        let candidate = dir.join(file_name);
        if candidate.exists() {
            debug!("found '{}' in {}", candidate.display(), dir.display());
            return Some(RuleSource::Disk(candidate));
        }
    }

    path.to_str().and_then(builtin_preset).map(RuleSource::Builtin)
}

/// Collapses config text into a single space-joined request, skipping
/// comments and blank lines and splicing `include`d sources in place.
fn flatten_request(text: &str, depth: usize) -> Result<String> {
    let mut request = String::new();

    for line in text.lines() {
        let line = line.trim_end();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(name) = line.strip_prefix("include ") {
            let name = name.trim();
            if depth >= MAX_INCLUDE_DEPTH {
                return Err(ConfigError::IncludeDepth(name.to_string()).into());
            }
            debug!("including '{}'", name);
            let inner = match locate(Path::new(name)) {
                Some(RuleSource::Disk(resolved)) => {
                    let text = fs::read_to_string(&resolved).with_context(|| {
                        format!("failed to read included file {}", resolved.display())
                    })?;
                    flatten_request(&text, depth + 1)?
                }
                Some(RuleSource::Builtin(text)) => flatten_request(text, depth + 1)?,
                None => return Err(ConfigError::FileNotFound(PathBuf::from(name)).into()),
            };
            request.push_str(&inner);
            continue;
        }

        request.push_str(line);
        request.push(' ');
    }

    Ok(request)
}
