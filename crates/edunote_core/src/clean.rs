use std::{ops::Deref, sync::LazyLock};

use regex::Regex;

/// Words removed as noise when [`NormalizePolicy::StripFillers`] is active.
pub const FILLER_WORDS: &[&str] = &["um", "ah", "okay", "so", "like"];

static FILLER_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r"(?i)\b(?:{})\b", FILLER_WORDS.join("|"));
    Regex::new(&pattern).unwrap()
});

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Which of the two observed cleaning behaviors to apply.
///
/// The extractive pipeline historically stripped quote characters only,
/// while the generative one additionally dropped spoken filler words.
/// Both are kept as explicit, non-merged variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NormalizePolicy {
    /// Remove `"` characters and collapse whitespace, nothing else.
    #[default]
    QuotesOnly,
    /// Additionally remove whole-word, case-insensitive filler words.
    StripFillers,
}

/// Normalized lecture text. Immutable once produced; the only way to
/// obtain one is through [`normalize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanText(String);

impl CleanText {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for CleanText {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<CleanText> for String {
    fn from(value: CleanText) -> Self {
        value.0
    }
}

/// Cleans raw lecture text.
///
/// Removes literal double quotes, optionally removes filler words,
/// collapses every whitespace run to a single space, and trims. Accepts
/// any input, including empty, and is idempotent under either policy.
pub fn normalize(raw: &str, policy: NormalizePolicy) -> CleanText {
    let mut text = raw.replace('"', "");
    if policy == NormalizePolicy::StripFillers {
        text = FILLER_RE.replace_all(&text, "").into_owned();
    }
    let text = WHITESPACE_RE.replace_all(&text, " ");
    CleanText(text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_quotes_and_collapses_whitespace() {
        let clean = normalize("She said \"hello\"  \t to\neveryone", NormalizePolicy::QuotesOnly);
        assert_eq!(clean.as_str(), "She said hello to everyone");
    }

    #[test]
    fn test_quotes_only_keeps_filler_words() {
        let clean = normalize("Okay so this is um the topic", NormalizePolicy::QuotesOnly);
        assert_eq!(clean.as_str(), "Okay so this is um the topic");
    }

    #[test]
    fn test_strip_fillers_is_case_insensitive_whole_word() {
        let clean = normalize("Okay so this is um the topic", NormalizePolicy::StripFillers);
        assert_eq!(clean.as_str(), "this is the topic");
    }

    #[test]
    fn test_strip_fillers_does_not_touch_substrings() {
        // "so" in "sorting" and "like" in "unlikely" must survive
        let clean = normalize("sorting is unlikely", NormalizePolicy::StripFillers);
        assert_eq!(clean.as_str(), "sorting is unlikely");
    }

    #[test]
    fn test_empty_and_whitespace_only_inputs() {
        assert_eq!(normalize("", NormalizePolicy::QuotesOnly).as_str(), "");
        assert_eq!(normalize("   \n\t ", NormalizePolicy::StripFillers).as_str(), "");
    }

    #[test]
    fn test_idempotent_under_both_policies() {
        for policy in [NormalizePolicy::QuotesOnly, NormalizePolicy::StripFillers] {
            let raw = "Um,  \"quoted\"   text with   3.14 and\nso on";
            let once = normalize(raw, policy);
            let twice = normalize(once.as_str(), policy);
            assert_eq!(once, twice, "normalize should be idempotent for {policy:?}");
        }
    }
}
