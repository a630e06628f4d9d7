// tinge/src/runner.rs
//! The stream runner: drives the line-by-line paint loop.
//!
//! Two modes. In pipe mode the runner reads the process's own standard
//! input until end-of-input. In command mode it spawns the given command
//! line through the shell with stderr folded into stdout, and reads the
//! merged stream; because a long-running child may never deliver a prompt
//! end-of-file, two consecutive empty lines are treated as the end of the
//! stream (a single empty line is an ordinary blank line and passes
//! through). This heuristic is a compatibility compromise for interactive
//! and streaming child tools and must be preserved exactly.
//!
//! Lines are emitted in the order they were produced and flushed one at a
//! time, so colorized output appears live when wrapping something like a
//! log follower.

use std::io::{self, BufRead, BufReader, Write};
use std::process::{Child, Command, Stdio};

use anyhow::{Context, Result};
use log::debug;

use tinge_core::Painter;

/// Where the line stream comes from.
#[derive(Debug, Clone)]
pub enum Source {
    /// Read the process's standard input (tinge at the end of a pipe).
    Stdin,
    /// Spawn a shell command and read its merged stdout+stderr.
    Command(String),
}

/// Feeds lines from a [`Source`] through a [`Painter`] to standard output.
pub struct Runner {
    painter: Painter,
}

impl Runner {
    pub fn new(painter: Painter) -> Self {
        Runner { painter }
    }

    pub fn run(&self, source: &Source) -> Result<()> {
        match source {
            Source::Stdin => self.run_pipe(),
            Source::Command(command) => self.run_command(command),
        }
    }

    /// Pipe mode: read stdin until end-of-input.
    fn run_pipe(&self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut out = stdout.lock();

        for line in stdin.lock().lines() {
            let line = line.context("failed to read from standard input")?;
            if !self.emit(&mut out, &line)? {
                break;
            }
        }

        debug!("end of stream");
        Ok(())
    }

    /// Command mode: spawn the child and read its merged output stream.
    fn run_command(&self, command: &str) -> Result<()> {
        let mut child = spawn_merged(command)?;
        let pipe = child
            .stdout
            .take()
            .context("child process has no captured output stream")?;
        let mut reader = BufReader::new(pipe);

        let stdout = io::stdout();
        let mut out = stdout.lock();
        let mut buf = String::new();
        let mut end_of_stream = false;

        loop {
            buf.clear();
            let read = reader
                .read_line(&mut buf)
                .context("failed to read from child process")?;
            if read == 0 {
                debug!("child closed its stream");
                break;
            }

            let line = buf.trim_end();
            if line.is_empty() {
                if end_of_stream {
                    debug!("two consecutive empty lines, ending stream");
                    break;
                }
                end_of_stream = true;
            } else {
                end_of_stream = false;
            }

            if !self.emit(&mut out, line)? {
                break;
            }
        }

        debug!("end of stream");
        Ok(())
    }

    /// Paints one line and writes it out, flushing immediately. Returns
    /// `false` when the downstream consumer is gone and the loop should
    /// stop quietly.
    fn emit(&self, out: &mut impl Write, line: &str) -> Result<bool> {
        let Some(text) = self.painter.paint(line).into_text() else {
            return Ok(true);
        };

        if let Err(err) = writeln!(out, "{}", text).and_then(|()| out.flush()) {
            if err.kind() == io::ErrorKind::BrokenPipe {
                debug!("downstream closed the pipe, shutting down");
                return Ok(false);
            }
            return Err(err).context("failed to write painted line");
        }

        Ok(true)
    }
}

/// Spawns `command` through the shell with stderr redirected into stdout,
/// so the parent reads a single merged line stream. The child's exit is not
/// separately awaited; the end-of-stream handling in the read loop governs
/// termination.
fn spawn_merged(command: &str) -> Result<Child> {
    debug!("spawning child command: {}", command);
    Command::new("sh")
        .arg("-c")
        .arg(format!("( {} ) 2>&1", command))
        .stdin(Stdio::inherit())
        .stdout(Stdio::piped())
        .spawn()
        .with_context(|| format!("failed to spawn '{}'", command))
}
