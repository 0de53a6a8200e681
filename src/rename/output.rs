//! Result reporting as JSON or plain text

use anyhow::{Context, Result};
use colored::Colorize;
use std::io::Write;

use super::result::RenameResult;

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json { pretty: bool },
    /// One line per entry; `quiet` keeps only error lines
    Text { quiet: bool, color: bool },
}

/// Write all results to `w` in the given format
pub fn emit<W: Write>(w: &mut W, results: &[RenameResult], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json { pretty } => write_json(w, results, pretty),
        OutputFormat::Text { quiet, color } => {
            for result in results {
                if quiet && !result.has_error() {
                    continue;
                }
                writeln!(w, "{}", format_line(result, color)).context("Failed to write output")?;
            }
            w.flush().context("Failed to flush output")
        }
    }
}

fn write_json<W: Write>(w: &mut W, results: &[RenameResult], pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *w, results)
    } else {
        serde_json::to_writer(&mut *w, results)
    }
    .context("Failed to serialize results")?;

    writeln!(w).context("Failed to write output")?;
    w.flush().context("Failed to flush output")
}

/// Render one result as a human-readable line
pub fn format_line(r: &RenameResult, color: bool) -> String {
    let paint = |tag: &str, style: fn(&str) -> colored::ColoredString| {
        if color {
            style(tag).to_string()
        } else {
            tag.to_string()
        }
    };

    if let Some(error) = &r.error {
        return format!("{} {} : {}", paint("ERR    ", |s| s.red().bold()), r.path.display(), error);
    }
    if r.was_skipped {
        return format!("{} {}", paint("SKIP   ", |s| s.dimmed()), r.old_name);
    }
    if r.new_name.is_empty() || r.new_name == r.old_name {
        return format!("{} {}", paint("OK     ", |s| s.green()), r.old_name);
    }

    if r.auto_renamed {
        format!(
            "{} {} -> {}   (auto-resolved)",
            paint("RENAME*", |s| s.yellow().bold()),
            r.old_name,
            r.new_name
        )
    } else {
        format!("{} {} -> {}", paint("RENAME ", |s| s.cyan()), r.old_name, r.new_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn sample() -> Vec<RenameResult> {
        let p = Path::new("/tmp/My File.txt");
        let mut auto = RenameResult::planned(p, "Copy.txt", "copy_2.txt", false);
        auto.renamed = true;
        auto.auto_renamed = true;

        vec![
            RenameResult::planned(p, "My File.txt", "my_file.txt", false),
            RenameResult::unchanged(p, "clean.txt", false),
            RenameResult::skipped(p, ".env", false),
            auto,
            RenameResult::failed(p, "My File.txt", false, "destination exists"),
        ]
    }

    fn text(results: &[RenameResult], quiet: bool) -> String {
        let mut out = Vec::new();
        emit(&mut out, results, OutputFormat::Text { quiet, color: false }).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_lines() {
        let out = text(&sample(), false);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "RENAME  My File.txt -> my_file.txt");
        assert_eq!(lines[1], "OK      clean.txt");
        assert_eq!(lines[2], "SKIP    .env");
        assert_eq!(lines[3], "RENAME* Copy.txt -> copy_2.txt   (auto-resolved)");
        assert_eq!(lines[4], "ERR     /tmp/My File.txt : destination exists");
    }

    #[test]
    fn test_quiet_keeps_errors() {
        let out = text(&sample(), true);
        assert_eq!(out, "ERR     /tmp/My File.txt : destination exists\n");
    }

    #[test]
    fn test_json_output() {
        let mut out = Vec::new();
        emit(&mut out, &sample(), OutputFormat::Json { pretty: false }).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);

        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        let entries = parsed.as_array().unwrap();
        assert_eq!(entries.len(), 5);
        assert_eq!(entries[3]["auto_renamed"], true);
        assert_eq!(entries[4]["error"], "destination exists");
    }

    #[test]
    fn test_pretty_json_output() {
        let mut out = Vec::new();
        emit(&mut out, &sample()[..1], OutputFormat::Json { pretty: true }).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\n  {"));
        assert!(text.contains("\"new_name\": \"my_file.txt\""));
    }
}
