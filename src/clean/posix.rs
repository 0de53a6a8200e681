//! POSIX portable filename filtering

use regex::Regex;
use std::sync::LazyLock;

/// Returned whenever filtering leaves nothing behind
pub const PLACEHOLDER: &str = "_";

static DISALLOWED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9._-]+").unwrap());
static UNDERSCORES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_{2,}").unwrap());
static DASHES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-{2,}").unwrap());

/// Restrict a name to the portable filename character set `[A-Za-z0-9._-]`
///
/// Spaces and runs of other characters become a single `_`, repeated `_` and
/// `-` collapse to one, and leading/trailing `.`, `_` and `-` are trimmed.
/// Never returns an empty string.
///
/// ```ignore
/// assert_eq!(posixify("My File (v2)"), "My_File_v2");
/// assert_eq!(posixify("..."), "_");
/// ```
pub fn posixify(name: &str) -> String {
    if name.is_empty() {
        return PLACEHOLDER.to_string();
    }

    let spaced = name.replace(' ', "_");
    let filtered = DISALLOWED_RE.replace_all(&spaced, "_");
    let filtered = UNDERSCORES_RE.replace_all(&filtered, "_");
    let filtered = DASHES_RE.replace_all(&filtered, "-");

    let trimmed = filtered.trim_matches(['.', '_', '-']);
    if trimmed.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        trimmed.to_string()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use regex::Regex;

    proptest! {
        #[test]
        fn prop_posixify_is_idempotent(s in any::<String>()) {
            let once = posixify(&s);
            let twice = posixify(&once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_posixify_output_shape(s in any::<String>()) {
            let shape = Regex::new(r"^[A-Za-z0-9]([A-Za-z0-9._-]*[A-Za-z0-9])?$").unwrap();
            let out = posixify(&s);
            prop_assert!(out == PLACEHOLDER || shape.is_match(&out), "bad output {:?}", out);
            prop_assert!(!out.contains("__"));
            prop_assert!(!out.contains("--"));
        }

        #[test]
        fn prop_posixify_keeps_alphanumeric(s in "[a-zA-Z0-9]+") {
            prop_assert_eq!(posixify(&s), s);
        }
    }
}
