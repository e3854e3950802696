use itertools::Itertools;
use serde::Serialize;

use crate::Sentences;

/// How many leading sentences feed the summary.
pub const SUMMARY_SENTENCES: usize = 3;
/// How many leading sentences become key points.
pub const KEY_POINT_SENTENCES: usize = 5;
/// How many leading sentences are considered for quiz questions.
pub const QUIZ_SENTENCES: usize = 3;
/// Sentences with this many words or fewer produce no quiz question.
pub const QUIZ_WORD_FLOOR: usize = 4;

/// How emitted quiz questions are numbered.
///
/// The observed behavior numbered questions by sentence position, so a
/// skipped short sentence leaves a gap in the numbering. That stays the
/// default; `EmittedCount` renumbers emitted questions consecutively.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuizNumbering {
    #[default]
    SentencePosition,
    EmittedCount,
}

/// The three derived note artifacts, produced deterministically from a
/// sentence sequence and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotesBundle {
    pub summary: String,
    pub key_points: Vec<String>,
    pub quiz: Vec<String>,
}

impl NotesBundle {
    /// Derives all three artifacts positionally from `sentences`.
    pub fn extract(sentences: &Sentences, numbering: QuizNumbering) -> Self {
        NotesBundle {
            summary: summarize(sentences),
            key_points: key_points(sentences),
            quiz: quiz(sentences, numbering),
        }
    }
}

/// Joins the first [`SUMMARY_SENTENCES`] sentences with `". "` and a
/// trailing period.
///
/// An empty sequence yields the degenerate `"."`; callers are expected
/// to reject empty input before display rather than rely on this.
pub fn summarize(sentences: &Sentences) -> String {
    let mut summary = sentences.iter().take(SUMMARY_SENTENCES).join(". ");
    summary.push('.');
    summary
}

/// Bullets the first [`KEY_POINT_SENTENCES`] sentences in source order.
///
/// Selection is purely positional. Early sentences win regardless of
/// salience; that tradeoff is part of the contract.
pub fn key_points(sentences: &Sentences) -> Vec<String> {
    sentences
        .iter()
        .take(KEY_POINT_SENTENCES)
        .map(|point| format!("• {point}"))
        .collect()
}

/// Emits a templated question per eligible leading sentence.
///
/// A sentence with [`QUIZ_WORD_FLOOR`] words or fewer is skipped. The
/// question keyword is the sentence's first word.
pub fn quiz(sentences: &Sentences, numbering: QuizNumbering) -> Vec<String> {
    let mut questions: Vec<String> = Vec::new();

    for (position, sentence) in sentences.iter().take(QUIZ_SENTENCES).enumerate() {
        let words: Vec<&str> = sentence.split_whitespace().collect();
        if words.len() <= QUIZ_WORD_FLOOR {
            continue;
        }
        let keyword = words[0];
        let index = match numbering {
            QuizNumbering::SentencePosition => position + 1,
            QuizNumbering::EmittedCount => questions.len() + 1,
        };
        questions.push(format!(
            "{index}. Explain the concept of '{keyword}' in the lecture."
        ));
    }

    questions
}
