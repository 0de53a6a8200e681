//! CLI command handlers

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::generate;
use colored::Colorize;
use std::io::{self, BufWriter, IsTerminal};
use std::path::PathBuf;
use tracing::{debug, info};

use super::CleanArgs;
use crate::clean::{FsProbe, NameCleaner, TransformConfig};
use crate::config::Settings;
use crate::rename::{self, OutputFormat, RunOptions, Summary};

/// Merge command-line values over the stored defaults
pub fn resolve_options(
    args: &CleanArgs,
    settings: &Settings,
) -> Result<(TransformConfig, RunOptions)> {
    let mut transform = settings.transform();
    if let Some(case) = args.case {
        transform.case = case;
    }
    if let Some(date) = args.date {
        transform.date = date;
    }
    if let Some(style) = args.date_style {
        transform.date_style = style;
    }
    if let Some(delim) = &args.delim {
        transform.delimiter = delim.clone();
    }
    transform.validate()?;

    let options = RunOptions {
        apply: args.apply,
        unique: args.unique.unwrap_or(settings.unique),
        dotfiles: args.dotfiles || settings.dotfiles,
    };

    Ok((transform, options))
}

/// Handle a cleaning run
///
/// Returns whether every entry was processed without error.
pub fn clean(args: CleanArgs) -> Result<bool> {
    let settings = Settings::load()?;
    let (transform, options) = resolve_options(&args, &settings)?;
    debug!("Transform: {:?}, options: {:?}", transform, options);

    let cleaner = NameCleaner::new(transform);
    let roots = if args.paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        args.paths.clone()
    };

    let results = rename::walk(&roots, args.recursive, |path, is_dir| {
        rename::process_one(path, is_dir, &options, &cleaner, &FsProbe)
    });

    let format = if args.json || args.pretty {
        OutputFormat::Json {
            pretty: args.pretty,
        }
    } else {
        OutputFormat::Text {
            quiet: args.quiet,
            color: io::stdout().is_terminal(),
        }
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    rename::output::emit(&mut out, &results, format)?;

    let summary = Summary::of(&results);
    info!(
        "{} renamed, {} pending, {} unchanged, {} skipped, {} errors",
        summary.renamed, summary.pending, summary.unchanged, summary.skipped, summary.errors
    );

    let preview = matches!(format, OutputFormat::Text { quiet: false, .. });
    if !options.apply && summary.pending > 0 && preview {
        eprintln!("{}", "Preview only. Run with --do to apply.".yellow());
    }

    Ok(summary.errors == 0)
}

/// Handle the `config` command
pub fn config(init: bool) -> Result<()> {
    let path = Settings::config_path()?;

    if init {
        if path.exists() {
            println!("Config already exists at {}", path.display());
        } else {
            Settings::default().save_to(&path)?;
            println!("{} {}", "Wrote default config to".green(), path.display());
        }
    }

    let settings = Settings::load_from(&path)?;
    println!("{} {}", "Config file:".bold(), path.display());
    println!("  case:       {}", serde_json::to_string(&settings.case)?);
    println!("  date:       {}", serde_json::to_string(&settings.date)?);
    println!("  date_style: {}", settings.date_style);
    println!("  delim:      {:?}", settings.delim);
    println!("  unique:     {}", settings.unique);
    println!("  dotfiles:   {}", settings.dotfiles);

    Ok(())
}

/// Handle the `completion` command
pub fn completion(shell: clap_complete::Shell) {
    let mut cmd = super::Cli::command();
    generate(shell, &mut cmd, "cleanfy", &mut io::stdout());
}
