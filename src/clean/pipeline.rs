//! Filename normalization pipeline
//!
//! Steps, each feeding the next:
//! 1. Split base and extension
//! 2. Fold both to ASCII
//! 3. POSIX filtering
//! 4. Case transform
//! 5. Optional date prefix, re-filtered so the delimiter can't leave runs
//!    or trailing separators behind
//! 6. Reassemble
//! 7. Reserved name protection

use chrono::NaiveDateTime;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use super::ascii::AsciiFolder;
use super::case::CaseMode;
use super::date::{DateMode, DateStyle, format_date, resolve_timestamp};
use super::posix::{PLACEHOLDER, posixify};
use super::reserved::is_windows_reserved;

/// Errors produced while cleaning a single name
#[derive(Debug, Error)]
pub enum CleanError {
    #[error("failed to read metadata for {}: {source}", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("empty result name")]
    EmptyResult,

    #[error("failed to check whether {} exists: {source}", path.display())]
    Probe {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid delimiter {0:?}: only A-Z, a-z, 0-9, '.', '_' and '-' are allowed")]
    InvalidDelimiter(String),
}

/// Run-wide transform settings, fixed for the duration of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformConfig {
    pub case: CaseMode,
    pub date: DateMode,
    pub date_style: DateStyle,
    /// Placed between the date prefix and the name
    pub delimiter: String,
}

impl TransformConfig {
    /// Reject delimiters that could carry a name out of portable form, such
    /// as a path separator
    pub fn validate(&self) -> Result<(), CleanError> {
        let valid = self
            .delimiter
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
        if valid {
            Ok(())
        } else {
            Err(CleanError::InvalidDelimiter(self.delimiter.clone()))
        }
    }
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            case: CaseMode::None,
            date: DateMode::None,
            date_style: DateStyle::Iso,
            delimiter: "_".to_string(),
        }
    }
}

/// Split a name into base and extension
///
/// Directories never have an extension. For files the split happens at the
/// last `.`, unless that dot is the first or last character.
pub fn split_name(name: &str, is_dir: bool) -> (&str, &str) {
    if is_dir {
        return (name, "");
    }

    match name.rfind('.') {
        Some(i) if i > 0 && i < name.len() - 1 => (&name[..i], &name[i + 1..]),
        _ => (name, ""),
    }
}

/// Turns raw entry names into clean, portable names
#[derive(Debug, Clone)]
pub struct NameCleaner {
    folder: AsciiFolder,
    config: TransformConfig,
}

impl NameCleaner {
    /// Create a cleaner using the standard fold table
    pub fn new(config: TransformConfig) -> Self {
        Self::with_folder(AsciiFolder::standard(), config)
    }

    pub fn with_folder(folder: AsciiFolder, config: TransformConfig) -> Self {
        Self { folder, config }
    }

    /// Clean `name`, the final component of `full_path`
    ///
    /// `full_path` is only read when the date prefix comes from the
    /// modification time.
    pub fn clean(&self, full_path: &Path, name: &str, is_dir: bool) -> Result<String, CleanError> {
        let timestamp =
            resolve_timestamp(self.config.date, full_path).map_err(|source| CleanError::Metadata {
                path: full_path.to_path_buf(),
                source,
            })?;

        self.clean_at(name, is_dir, timestamp.as_ref())
    }

    /// Clean `name` using an already resolved timestamp for the date prefix
    ///
    /// A `None` timestamp means no prefix, whatever the configured date mode.
    pub fn clean_at(
        &self,
        name: &str,
        is_dir: bool,
        timestamp: Option<&NaiveDateTime>,
    ) -> Result<String, CleanError> {
        let (base, ext) = split_name(name, is_dir);

        let base = self.folder.fold(base);
        let ext = self.folder.fold(ext);

        let base = posixify(&base);
        // An extension with nothing portable left is dropped, not kept as "._"
        let ext = match posixify(&ext) {
            ext if ext == PLACEHOLDER => String::new(),
            ext => ext,
        };

        let case = self.config.case;
        let base = case.apply(&base);
        let ext = if case.applies_to_extension() {
            case.apply(&ext)
        } else {
            ext
        };

        let base = match timestamp {
            Some(t) => posixify(&format!(
                "{}{}{}",
                format_date(t, self.config.date_style),
                self.config.delimiter,
                base
            )),
            None => base,
        };

        let mut cleaned = base.clone();
        if !ext.is_empty() {
            cleaned.push('.');
            cleaned.push_str(&ext);
        }

        if cleaned.is_empty() {
            return Err(CleanError::EmptyResult);
        }

        // Windows treats "CON.tar.gz" like "CON", so only the part before the
        // first dot matters.
        let stem = base.split('.').next().unwrap_or_default();
        if is_windows_reserved(stem) {
            debug!("Prefixing reserved name: {}", cleaned);
            cleaned.insert(0, '_');
        }

        Ok(cleaned)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn has_clean_shape(name: &str) -> bool {
        let edge = |c: Option<char>| c.is_some_and(|c| c.is_ascii_alphanumeric());
        edge(name.chars().next())
            && edge(name.chars().last())
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
            && !name.contains("__")
            && !name.contains("--")
    }

    fn style() -> impl Strategy<Value = DateStyle> {
        prop::sample::select(DateStyle::ALL.to_vec())
    }

    fn case() -> impl Strategy<Value = CaseMode> {
        prop::sample::select(vec![
            CaseMode::None,
            CaseMode::Lower,
            CaseMode::Upper,
            CaseMode::Title,
        ])
    }

    proptest! {
        #[test]
        fn prop_date_prefixed_names_are_clean(
            name in any::<String>(),
            is_dir in any::<bool>(),
            date_style in style(),
            case in case(),
        ) {
            let cleaner = NameCleaner::new(TransformConfig {
                case,
                date: DateMode::Now,
                date_style,
                ..TransformConfig::default()
            });
            let t = NaiveDate::from_ymd_opt(2024, 3, 5)
                .unwrap()
                .and_hms_opt(14, 7, 9)
                .unwrap();

            let cleaned = cleaner.clean_at(&name, is_dir, Some(&t)).unwrap();
            prop_assert!(has_clean_shape(&cleaned), "{:?} -> {:?}", name, cleaned);
        }

        #[test]
        fn prop_cleaning_is_stable(name in any::<String>()) {
            let cleaner = NameCleaner::new(TransformConfig::default());
            let once = cleaner.clean_at(&name, false, None).unwrap();
            let twice = cleaner.clean_at(&once, false, None).unwrap();
            prop_assert_eq!(once, twice);
        }
    }
}
