use edunote_core::{normalize, NormalizePolicy, NotesBundle};

use crate::{Generator, NotesEngine};

const SUMMARY_PROMPT: &str = include_str!("../llm/prompts/summary.txt");
const KEY_POINTS_PROMPT: &str = include_str!("../llm/prompts/key_points.txt");
const QUIZ_PROMPT: &str = include_str!("../llm/prompts/quiz.txt");

const SUMMARY_MAX_TOKENS: u32 = 200;
const KEY_POINTS_MAX_TOKENS: u32 = 300;
const QUIZ_MAX_TOKENS: u32 = 300;

/// The model-backed engine. Strips filler words before prompting, fills
/// one template per artifact, and passes the generated text through
/// with minimal decoding (line-splitting for key points and quiz).
///
/// Opt-in alternative to [`crate::ExtractiveEngine`]; the two are never
/// mixed within a request.
pub struct GenerativeEngine<G> {
    generator: G,
}

impl<G> GenerativeEngine<G>
where
    G: Generator + Send + Sync,
{
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Embeds the lecture into a prompt template, bounded by the
    /// generator's context window.
    fn fill(template: &str, lecture: &str) -> String {
        let bounded: String = lecture.chars().take(G::CONTEXT_WINDOW_LIMIT).collect();
        template.replace("{lecture}", &bounded)
    }

    fn lines(text: &str) -> Vec<String> {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl<G> NotesEngine for GenerativeEngine<G>
where
    G: Generator + Send + Sync,
{
    type Error = G::Error;

    #[tracing::instrument(skip_all, fields(model = G::GENERATOR_MODEL))]
    async fn generate_notes(&self, lecture: &str) -> Result<NotesBundle, Self::Error> {
        let clean = normalize(lecture, NormalizePolicy::StripFillers);

        let summary = self
            .generator
            .generate(&Self::fill(SUMMARY_PROMPT, &clean), SUMMARY_MAX_TOKENS)
            .await?
            .trim()
            .to_string();

        let key_points_text = self
            .generator
            .generate(&Self::fill(KEY_POINTS_PROMPT, &clean), KEY_POINTS_MAX_TOKENS)
            .await?;
        let key_points = Self::lines(&key_points_text)
            .into_iter()
            .map(|line| {
                if line.starts_with("• ") {
                    line
                } else {
                    format!("• {line}")
                }
            })
            .collect();

        let quiz_text = self
            .generator
            .generate(&Self::fill(QUIZ_PROMPT, &clean), QUIZ_MAX_TOKENS)
            .await?;
        let quiz = Self::lines(&quiz_text);

        Ok(NotesBundle {
            summary,
            key_points,
            quiz,
        })
    }
}
