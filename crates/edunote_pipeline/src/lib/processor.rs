pub mod builder;

use std::path::PathBuf;

use edunote_core::{assemble, NotesBundle};

use crate::{error::Error, NotesEngine, NotesRenderer, Transcriber};

/// Default cap on lecture size. Downstream stages scale linearly with
/// sentence count, so unbounded input means unbounded latency.
pub const DEFAULT_MAX_INPUT_CHARS: usize = 200_000;

/// A single lecture to process: pasted text, or an audio recording to
/// be routed through the configured transcriber first.
#[derive(Debug, Clone)]
pub enum NotesInput {
    Text(String),
    Audio(PathBuf),
}

/// Everything a run produces: the derived bundle, the assembled report,
/// and where the renderer put it.
#[derive(Debug, Clone)]
pub struct GeneratedNotes {
    pub bundle: NotesBundle,
    pub report: String,
    pub path: PathBuf,
}

// The core lecture-to-notes processor
pub struct NotesProcessor<E, T, R>
where
    E: NotesEngine + Send + Sync + 'static,
    T: Transcriber + Send + Sync + 'static,
    R: NotesRenderer + Send + Sync + 'static,
{
    output_dir: PathBuf,
    max_input_chars: usize,
    engine: E,
    transcriber: T,
    renderer: R,
}

impl<E, T, R> NotesProcessor<E, T, R>
where
    E: NotesEngine + Send + Sync + 'static,
    T: Transcriber + Send + Sync + 'static,
    R: NotesRenderer + Send + Sync + 'static,
{
    /// Rejects input the pipeline should not attempt to process:
    /// empty/whitespace-only text and text over the configured size cap.
    fn validate(&self, raw: &str) -> Result<(), Error> {
        if raw.trim().is_empty() {
            return Err(Error::EmptyInput);
        }

        let actual = raw.chars().count();
        if actual > self.max_input_chars {
            return Err(Error::InputTooLarge {
                actual,
                limit: self.max_input_chars,
            });
        }

        Ok(())
    }

    #[tracing::instrument(skip_all)]
    pub async fn run(&self, input: NotesInput) -> anyhow::Result<GeneratedNotes> {
        let lecture = match input {
            NotesInput::Text(text) => text,
            NotesInput::Audio(path) => {
                let transcribed = self
                    .transcriber
                    .transcribe(&path)
                    .await
                    .map_err(|e| anyhow::anyhow!("Failed to transcribe audio: {e:?}"))?;
                tracing::info!(
                    duration = transcribed.duration,
                    "Transcribed audio to lecture text"
                );
                transcribed.text
            }
        };

        self.validate(&lecture)?;

        let bundle = self
            .engine
            .generate_notes(&lecture)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to generate notes: {e:?}"))?;

        let report = assemble(&bundle);

        let file_name = format!(
            "lecture_notes_{}.txt",
            chrono::Utc::now().format("%Y%m%d%H%M%S")
        );
        let output_path = self.output_dir.join(file_name);
        let path = self
            .renderer
            .render(&report, &output_path)
            .map_err(|e| anyhow::anyhow!("Failed to render notes report: {e:?}"))?;

        Ok(GeneratedNotes {
            bundle,
            report,
            path,
        })
    }
}
