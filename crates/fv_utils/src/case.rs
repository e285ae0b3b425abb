//! Identifier case conversion.
//!
//! Field identifiers are assumed to be written in their canonical Rust
//! form (`snake_case`). A [`Case`] turns such an identifier into the
//! naming convention expected by an external format.
//!
//! Conversion splits the identifier on `_` and drops empty segments, so
//! leading, trailing and doubled underscores never produce empty words.
//! An identifier made only of underscores is returned unchanged.
//!
//! # Examples
//!
//! ```
//! use fv_utils::case::Case;
//!
//! assert_eq!(Case::Camel.convert("pos_x"), "posX");
//! assert_eq!(Case::Pascal.convert("pos_x"), "PosX");
//! assert_eq!(Case::Kebab.convert("pos_x"), "pos-x");
//! assert_eq!(Case::parse("camelCase"), Some(Case::Camel));
//! ```

use alloc::string::String;
use core::fmt;

/// A target naming convention.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Case {
    /// Keep the identifier as written.
    #[default]
    Preserve,
    /// `lowercase`
    Lower,
    /// `UPPERCASE`
    Upper,
    /// `camelCase`
    Camel,
    /// `PascalCase`
    Pascal,
    /// `snake_case`
    Snake,
    /// `SCREAMING_SNAKE_CASE`
    ScreamingSnake,
    /// `kebab-case`
    Kebab,
}

impl Case {
    /// Every supported case, in declaration order.
    pub const ALL: [Case; 8] = [
        Case::Preserve,
        Case::Lower,
        Case::Upper,
        Case::Camel,
        Case::Pascal,
        Case::Snake,
        Case::ScreamingSnake,
        Case::Kebab,
    ];

    /// The conventional spelling, as accepted by [`Case::parse`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Case::Preserve => "preserve",
            Case::Lower => "lowercase",
            Case::Upper => "UPPERCASE",
            Case::Camel => "camelCase",
            Case::Pascal => "PascalCase",
            Case::Snake => "snake_case",
            Case::ScreamingSnake => "SCREAMING_SNAKE_CASE",
            Case::Kebab => "kebab-case",
        }
    }

    /// Parses a case from its conventional spelling.
    ///
    /// Returns `None` for unknown spellings.
    pub fn parse(name: &str) -> Option<Case> {
        Case::ALL.into_iter().find(|case| case.as_str() == name)
    }

    /// Converts a `snake_case` identifier into this case.
    pub fn convert(self, ident: &str) -> String {
        let mut words = ident.split('_').filter(|word| !word.is_empty()).peekable();
        if words.peek().is_none() {
            return String::from(ident);
        }

        let mut out = String::with_capacity(ident.len());
        match self {
            Case::Preserve => out.push_str(ident),
            Case::Lower => out.push_str(&ident.to_lowercase()),
            Case::Upper => out.push_str(&ident.to_uppercase()),
            Case::Camel => {
                for (index, word) in words.enumerate() {
                    if index == 0 {
                        out.push_str(word);
                    } else {
                        push_capitalized(&mut out, word);
                    }
                }
            }
            Case::Pascal => words.for_each(|word| push_capitalized(&mut out, word)),
            Case::Snake => join_into(&mut out, words, '_', false),
            Case::ScreamingSnake => join_into(&mut out, words, '_', true),
            Case::Kebab => join_into(&mut out, words, '-', false),
        }
        out
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn push_capitalized(out: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
}

fn join_into<'a>(
    out: &mut String,
    words: impl Iterator<Item = &'a str>,
    separator: char,
    upper: bool,
) {
    for (index, word) in words.enumerate() {
        if index != 0 {
            out.push(separator);
        }
        if upper {
            out.push_str(&word.to_uppercase());
        } else {
            out.push_str(&word.to_lowercase());
        }
    }
}
