//! Date prefixes
//!
//! Formats timestamps according to the selected style (iso, compact, month,
//! short, withtime) and resolves where the timestamp comes from.

use chrono::{DateTime, Local, NaiveDateTime};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

/// Where the date prefix comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DateMode {
    /// No date prefix
    #[default]
    None,
    /// Last modification time of the entry
    Mtime,
    /// Current wall-clock time
    Now,
}

/// Layout of the date prefix
///
/// Unknown style names parse as [`DateStyle::Iso`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DateStyle {
    /// `2024-03-05`
    #[default]
    Iso,
    /// `20240305`
    Compact,
    /// `2024-03`
    Month,
    /// `240305`
    Short,
    /// `2024-03-05T14.07.09`
    WithTime,
}

impl DateStyle {
    pub const ALL: [DateStyle; 5] = [
        DateStyle::Iso,
        DateStyle::Compact,
        DateStyle::Month,
        DateStyle::Short,
        DateStyle::WithTime,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DateStyle::Iso => "iso",
            DateStyle::Compact => "compact",
            DateStyle::Month => "month",
            DateStyle::Short => "short",
            DateStyle::WithTime => "withtime",
        }
    }

    /// chrono format string for this style
    pub fn layout(self) -> &'static str {
        match self {
            DateStyle::Iso => "%Y-%m-%d",
            DateStyle::Compact => "%Y%m%d",
            DateStyle::Month => "%Y-%m",
            DateStyle::Short => "%y%m%d",
            DateStyle::WithTime => "%Y-%m-%dT%H.%M.%S",
        }
    }

    /// Parse a style name, falling back to ISO for anything unrecognized
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(name.trim()))
            .unwrap_or_default()
    }
}

impl FromStr for DateStyle {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl From<String> for DateStyle {
    fn from(s: String) -> Self {
        Self::from_name(&s)
    }
}

impl From<DateStyle> for String {
    fn from(style: DateStyle) -> Self {
        style.name().to_string()
    }
}

impl fmt::Display for DateStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Render a local wall-clock time in the given style
pub fn format_date(t: &NaiveDateTime, style: DateStyle) -> String {
    t.format(style.layout()).to_string()
}

/// Resolve the timestamp used for the date prefix of `path`
///
/// Returns `None` when date prefixing is disabled. For [`DateMode::Mtime`] a
/// failed metadata read is an error; a modification time the platform can't
/// report, or one equal to the Unix epoch, falls back to the current time.
pub fn resolve_timestamp(mode: DateMode, path: &Path) -> io::Result<Option<NaiveDateTime>> {
    match mode {
        DateMode::None => Ok(None),
        DateMode::Now => Ok(Some(Local::now().naive_local())),
        DateMode::Mtime => {
            let metadata = fs::metadata(path)?;
            let modified = metadata.modified().ok().filter(|t| *t != UNIX_EPOCH);
            Ok(Some(local_time(modified.unwrap_or_else(SystemTime::now))))
        }
    }
}

fn local_time(t: SystemTime) -> NaiveDateTime {
    DateTime::<Local>::from(t).naive_local()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::fs::File;
    use std::time::Duration;
    use tempfile::TempDir;

    fn sample() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(14, 7, 9)
            .unwrap()
    }

    #[test]
    fn test_format_styles() {
        let t = sample();
        assert_eq!(format_date(&t, DateStyle::Iso), "2024-03-05");
        assert_eq!(format_date(&t, DateStyle::Compact), "20240305");
        assert_eq!(format_date(&t, DateStyle::Month), "2024-03");
        assert_eq!(format_date(&t, DateStyle::Short), "240305");
        assert_eq!(format_date(&t, DateStyle::WithTime), "2024-03-05T14.07.09");
    }

    #[test]
    fn test_style_names() {
        for style in DateStyle::ALL {
            assert_eq!(DateStyle::from_name(style.name()), style);
        }
        assert_eq!(DateStyle::from_name("COMPACT"), DateStyle::Compact);
        assert_eq!(DateStyle::from_name("rfc2822"), DateStyle::Iso);
        assert_eq!(DateStyle::from_name(""), DateStyle::Iso);
        assert_eq!("month".parse::<DateStyle>(), Ok(DateStyle::Month));
    }

    #[test]
    fn test_style_serde_falls_back() {
        let style: DateStyle = serde_json::from_str("\"withtime\"").unwrap();
        assert_eq!(style, DateStyle::WithTime);
        let style: DateStyle = serde_json::from_str("\"bogus\"").unwrap();
        assert_eq!(style, DateStyle::Iso);
        assert_eq!(serde_json::to_string(&DateStyle::Short).unwrap(), "\"short\"");
    }

    #[test]
    fn test_resolve_disabled() {
        let resolved = resolve_timestamp(DateMode::None, Path::new("/does/not/exist")).unwrap();
        assert!(resolved.is_none());
    }

    #[test]
    fn test_resolve_now_ignores_path() {
        let resolved = resolve_timestamp(DateMode::Now, Path::new("/does/not/exist")).unwrap();
        assert!(resolved.is_some());
    }

    #[test]
    fn test_resolve_mtime() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.txt");
        let file = File::create(&path).unwrap();
        let modified = UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        file.set_modified(modified).unwrap();

        let resolved = resolve_timestamp(DateMode::Mtime, &path).unwrap().unwrap();
        assert_eq!(resolved, local_time(modified));
    }

    #[test]
    fn test_resolve_mtime_epoch_falls_back_to_now() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("old.txt");
        let file = File::create(&path).unwrap();
        file.set_modified(UNIX_EPOCH).unwrap();

        let resolved = resolve_timestamp(DateMode::Mtime, &path).unwrap().unwrap();
        assert!(resolved > local_time(UNIX_EPOCH + Duration::from_secs(86_400)));
    }

    #[test]
    fn test_resolve_mtime_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = resolve_timestamp(DateMode::Mtime, &dir.path().join("missing")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
