//! Case transformations: lower, upper, and title

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Case applied to a cleaned name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CaseMode {
    /// Keep the original case
    #[default]
    None,
    Lower,
    Upper,
    /// Capitalize the first letter or digit of every word
    Title,
}

impl CaseMode {
    pub fn apply(self, s: &str) -> String {
        match self {
            CaseMode::None => s.to_string(),
            CaseMode::Lower => s.to_lowercase(),
            CaseMode::Upper => s.to_uppercase(),
            CaseMode::Title => to_title(s),
        }
    }

    /// Whether the extension is cased along with the base
    pub fn applies_to_extension(self) -> bool {
        matches!(self, CaseMode::Lower | CaseMode::Upper)
    }
}

/// Title-case every maximal run of letters and digits
///
/// The first character of a run is upper-cased, the rest lower-cased. Anything
/// else passes through unchanged and starts a new word.
pub fn to_title(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut word_start = true;

    for c in s.chars() {
        if c.is_alphanumeric() {
            if word_start {
                out.extend(c.to_uppercase());
                word_start = false;
            } else {
                out.extend(c.to_lowercase());
            }
        } else {
            word_start = true;
            out.push(c);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_title() {
        assert_eq!(to_title("hello world"), "Hello World");
        assert_eq!(to_title("HELLO WORLD"), "Hello World");
        assert_eq!(to_title("hELLo WoRLD"), "Hello World");
        assert_eq!(to_title("heLLo"), "Hello");
        assert_eq!(to_title("a"), "A");
        assert_eq!(to_title(""), "");
    }

    #[test]
    fn test_to_title_separators() {
        assert_eq!(to_title("hello_world"), "Hello_World");
        assert_eq!(to_title("hello-world"), "Hello-World");
        assert_eq!(to_title("hello.world"), "Hello.World");
        assert_eq!(to_title("hello  world"), "Hello  World");
    }

    #[test]
    fn test_to_title_digits_start_words() {
        assert_eq!(to_title("file 123 name"), "File 123 Name");
        assert_eq!(to_title("123"), "123");
        assert_eq!(to_title("2nd_take"), "2nd_Take");
    }

    #[test]
    fn test_apply_modes() {
        assert_eq!(CaseMode::None.apply("MiXed"), "MiXed");
        assert_eq!(CaseMode::Lower.apply("MiXed"), "mixed");
        assert_eq!(CaseMode::Upper.apply("MiXed"), "MIXED");
        assert_eq!(CaseMode::Title.apply("mIXED case"), "Mixed Case");
    }

    #[test]
    fn test_extension_casing() {
        assert!(CaseMode::Lower.applies_to_extension());
        assert!(CaseMode::Upper.applies_to_extension());
        assert!(!CaseMode::Title.applies_to_extension());
        assert!(!CaseMode::None.applies_to_extension());
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&CaseMode::Title).unwrap(), "\"title\"");
        let parsed: CaseMode = serde_json::from_str("\"upper\"").unwrap();
        assert_eq!(parsed, CaseMode::Upper);
    }
}
