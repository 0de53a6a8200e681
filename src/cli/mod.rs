//! CLI module for cleanfy

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::clean::{CaseMode, DateMode, DateStyle};

pub mod commands;

#[derive(Parser, Debug)]
#[command(name = "cleanfy", about = "Normalize file and directory names into portable ASCII")]
#[command(version, author)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub clean: CleanArgs,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Options for a cleaning run; unset values come from the config file
#[derive(Args, Debug, Default, Clone)]
pub struct CleanArgs {
    /// Files or directories to process (defaults to the current directory)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Perform the renames (default: preview only)
    #[arg(short = 'd', long = "do")]
    pub apply: bool,

    /// Recurse into subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Print results as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Pretty-print JSON output (implies --json)
    #[arg(short, long)]
    pub pretty: bool,

    /// Case transform
    #[arg(long, value_enum, value_name = "MODE")]
    pub case: Option<CaseMode>,

    /// Date prefix source
    #[arg(long, value_enum, value_name = "SOURCE")]
    pub date: Option<DateMode>,

    /// Date prefix layout: iso, compact, month, short, withtime
    #[arg(long, value_name = "STYLE")]
    pub date_style: Option<DateStyle>,

    /// Delimiter between the date prefix and the name
    #[arg(long, value_name = "DELIM", allow_hyphen_values = true)]
    pub delim: Option<String>,

    /// Resolve name conflicts by adding numeric suffixes (_2, _3, ...)
    #[arg(long, value_name = "BOOL", action = ArgAction::Set)]
    pub unique: Option<bool>,

    /// Also process names starting with a dot
    #[arg(long)]
    pub dotfiles: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the config file location and effective defaults
    Config {
        /// Write a config file with the built-in defaults if none exists
        #[arg(long)]
        init: bool,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}
