//! Defines the command-line arguments and subcommands for the Trellis CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "trellis",
    version,
    about = "Check settings files with the Trellis parser-combinator engine."
)]
pub struct TrellisArgs {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse settings files and report their entries or diagnostics.
    Check {
        /// A settings file, or a directory to search for settings files.
        #[arg(required = true)]
        path: PathBuf,
        /// File extension to look for when `path` is a directory.
        #[arg(long, default_value = "conf")]
        ext: String,
        /// Radix of number values (2 to 36).
        #[arg(long, default_value_t = 10)]
        radix: u32,
        /// Allow line breaks around `=`.
        #[arg(long)]
        eol_space: bool,
        /// Start of a line comment.
        #[arg(long, default_value = "#")]
        comment: String,
        /// Print the parsed settings as JSON.
        #[arg(long)]
        json: bool,
    },
}
