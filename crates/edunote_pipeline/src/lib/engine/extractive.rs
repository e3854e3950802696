use std::convert::Infallible;

use edunote_core::{normalize, segment, NormalizePolicy, NotesBundle, QuizNumbering};

use crate::NotesEngine;

/// The deterministic engine: cleans, segments, and derives notes from
/// sentence positions. No collaborators, cannot fail.
///
/// Defaults match the observed behavior: quote-stripping normalization
/// and quiz numbering by sentence position.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractiveEngine {
    policy: NormalizePolicy,
    numbering: QuizNumbering,
}

impl ExtractiveEngine {
    pub fn new(policy: NormalizePolicy, numbering: QuizNumbering) -> Self {
        Self { policy, numbering }
    }
}

impl NotesEngine for ExtractiveEngine {
    type Error = Infallible;

    #[tracing::instrument(skip_all)]
    async fn generate_notes(&self, lecture: &str) -> Result<NotesBundle, Self::Error> {
        let clean = normalize(lecture, self.policy);
        let sentences = segment(&clean);
        tracing::debug!(sentences = sentences.len(), "Segmented lecture text");

        Ok(NotesBundle::extract(&sentences, self.numbering))
    }
}
