//! The Trellis Command-Line Interface.
//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the core library functions.

use std::path::{Path, PathBuf};
use std::{fs, io, process};

use clap::Parser;
use miette::{Diagnostic, Report};
use thiserror::Error;
use tracing::{debug, Level};
use walkdir::WalkDir;

use crate::cli::args::{Command, TrellisArgs};
use crate::errors::{ConfigError, SettingsError};
use crate::settings::{self, SettingsOptions};
use crate::source::SourceBuffer;

pub mod args;
pub mod output;

/// Failures that stop the CLI before or between files.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("failed to read {path}")]
    #[diagnostic(code(trellis::cli::io))]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to walk directory")]
    #[diagnostic(code(trellis::cli::walk))]
    Walk(#[from] walkdir::Error),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}

/// The main entry point for the CLI.
pub fn run() {
    let args = TrellisArgs::parse();
    init_tracing(args.verbose);

    let result = match args.command {
        Command::Check {
            path,
            ext,
            radix,
            eol_space,
            comment,
            json,
        } => {
            let options = SettingsOptions {
                radix,
                eol_is_space: eol_space,
                comment,
            };
            handle_check(&path, &ext, &options, json)
        }
    };

    match result {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("{:?}", Report::new(e));
            process::exit(2);
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .try_init();
}

/// Handles the `check` subcommand. Returns whether every file parsed.
fn handle_check(
    path: &Path,
    ext: &str,
    options: &SettingsOptions,
    json: bool,
) -> Result<bool, CliError> {
    let grammar = settings::grammar(options)?;
    let files = discover_files(path, ext)?;
    let mut failed = 0;

    for file in &files {
        let content = fs::read_to_string(file).map_err(|source| CliError::Io {
            path: file.clone(),
            source,
        })?;
        debug!(file = %file.display(), bytes = content.len(), "checking");
        let buffer = SourceBuffer::new(file.display().to_string(), content);
        let io_result = match settings::parse_with(&grammar, buffer) {
            Ok(parsed) => output::print_settings(file, &parsed, json),
            Err(SettingsError::Parse(error)) => {
                failed += 1;
                output::print_failure(file, error)
            }
            Err(SettingsError::Config(error)) => return Err(error.into()),
        };
        io_result.map_err(|source| CliError::Io {
            path: file.clone(),
            source,
        })?;
    }

    debug!(files = files.len(), failed, "check finished");
    Ok(failed == 0)
}

/// A single file, or every file below a directory with the given extension,
/// sorted for deterministic output.
fn discover_files(path: &Path, ext: &str) -> Result<Vec<PathBuf>, CliError> {
    if !path.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }
    let mut files = Vec::new();
    for entry in WalkDir::new(path) {
        let entry = entry?;
        if entry.file_type().is_file() && entry.path().extension().is_some_and(|e| e == ext) {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}
