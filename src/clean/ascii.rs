//! Unicode to ASCII folding
//!
//! Names are decomposed with NFKD so accented letters split into a base letter
//! plus combining marks. The marks are dropped, printable ASCII is kept, and
//! everything else goes through a [`FoldTable`].

use std::collections::HashMap;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Stand-in for any non-ASCII character the table does not cover
pub const PLACEHOLDER: char = '_';

/// Characters folded by [`FoldTable::standard`]
const STANDARD_FOLDS: &[(char, &str)] = &[
    ('ß', "ss"),
    ('Æ', "ae"),
    ('Ǽ', "ae"),
    ('æ', "ae"),
    ('ǽ', "ae"),
    ('Œ', "oe"),
    ('œ', "oe"),
    ('Đ', "d"),
    ('đ', "d"),
    ('Ð', "d"),
    ('ð', "d"),
    ('Ł', "l"),
    ('ł', "l"),
    ('₫', "d"),
    ('–', "-"), // en dash
    ('—', "-"), // em dash
    ('“', "'"),
    ('”', "'"),
    ('„', "'"),
    ('«', "'"),
    ('»', "'"),
    ('′', "'"),
    ('″', "'"),
    ('·', "-"),
    ('•', "-"),
    ('∙', "-"),
];

/// Immutable substitution table for non-ASCII characters
#[derive(Debug, Clone)]
pub struct FoldTable {
    entries: HashMap<char, &'static str>,
}

impl FoldTable {
    /// The built-in table: ligatures, stroked letters, dashes, quotes and bullets
    pub fn standard() -> Self {
        Self::from_pairs(STANDARD_FOLDS)
    }

    /// Build a table from explicit `(character, replacement)` pairs
    pub fn from_pairs(pairs: &[(char, &'static str)]) -> Self {
        Self {
            entries: pairs.iter().copied().collect(),
        }
    }

    /// Replacement for `c`, if the table has one
    pub fn get(&self, c: char) -> Option<&'static str> {
        self.entries.get(&c).copied()
    }
}

/// Folds arbitrary text into printable ASCII
#[derive(Debug, Clone)]
pub struct AsciiFolder {
    table: FoldTable,
}

impl AsciiFolder {
    pub fn new(table: FoldTable) -> Self {
        Self { table }
    }

    /// Folder backed by [`FoldTable::standard`]
    pub fn standard() -> Self {
        Self::new(FoldTable::standard())
    }

    /// Fold `s` to ASCII
    ///
    /// The output only contains code points in `32..=127`. ASCII control
    /// characters are dropped, unmapped non-ASCII characters become
    /// [`PLACEHOLDER`].
    pub fn fold(&self, s: &str) -> String {
        let mut out = String::with_capacity(s.len());

        for c in s.nfkd() {
            if is_combining_mark(c) {
                continue;
            }

            if c.is_ascii() {
                if c as u32 >= 32 {
                    out.push(c);
                }
                continue;
            }

            match self.table.get(c) {
                Some(replacement) => out.push_str(replacement),
                None => out.push(PLACEHOLDER),
            }
        }

        out
    }
}

impl Default for AsciiFolder {
    fn default() -> Self {
        Self::standard()
    }
}
