// tinge/src/lib.rs
//! # Tinge CLI Application
//!
//! This crate provides the command-line front end for the `tinge-core`
//! painting engine: argument parsing, request assembly (inline requests,
//! config files with `include` resolution, built-in presets), logging
//! setup, and the stream runner that feeds lines from stdin or a spawned
//! child command through the painter.

pub mod cli;
pub mod config;
pub mod logger;
pub mod runner;
