use std::{ops::Deref, sync::LazyLock};

use regex::Regex;

use crate::CleanText;

static DECIMAL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d)\.(\d)").unwrap());

// Private-use codepoint standing in for a protected decimal point while
// splitting. Restored before any fragment leaves this module.
const DOT_MASK: char = '\u{F8FF}';

/// Ordered, non-empty, trimmed sentences in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sentences(Vec<String>);

impl Sentences {
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl Deref for Sentences {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<String>> for Sentences {
    fn from(value: Vec<String>) -> Self {
        Sentences(value)
    }
}

/// Splits cleaned text into sentences at `". "` boundaries.
///
/// A period directly between two digits (`3.14`) is never treated as a
/// boundary. Fragments are trimmed and empty fragments are dropped, so
/// an empty input yields an empty sequence and text without any
/// boundary yields a single-element one.
pub fn segment(text: &CleanText) -> Sentences {
    let masked = DECIMAL_RE.replace_all(text, "${1}\u{F8FF}${2}");

    let sentences = masked
        .split(". ")
        .map(|fragment| fragment.replace(DOT_MASK, ".").trim().to_string())
        .filter(|fragment| !fragment.is_empty())
        .collect();

    Sentences(sentences)
}
