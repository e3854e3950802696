use std::{fmt::Debug, future::Future, path::Path};

use serde::Deserialize;

/// An external speech-to-text collaborator. Transcription internals
/// stay outside the pipeline; this seam only turns an audio file into
/// lecture text.
pub trait Transcriber {
    const TRANSCRIBER_MODEL: &'static str;

    type Error: Debug;

    fn transcribe(
        &self,
        audio_path: &Path,
    ) -> impl Future<Output = Result<TranscribeResponse, Self::Error>> + Send;
}

impl<T: Transcriber + Sync> Transcriber for &T {
    const TRANSCRIBER_MODEL: &'static str = T::TRANSCRIBER_MODEL;

    type Error = T::Error;

    async fn transcribe(&self, audio_path: &Path) -> Result<TranscribeResponse, Self::Error> {
        (**self).transcribe(audio_path).await
    }
}

/// Stand-in used when no speech-to-text collaborator is configured.
/// Text input works as usual; audio input is rejected with a distinct
/// error instead of silently producing empty notes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTranscriber;

impl Transcriber for NoTranscriber {
    const TRANSCRIBER_MODEL: &'static str = "none";

    type Error = crate::Error;

    async fn transcribe(&self, _audio_path: &Path) -> Result<TranscribeResponse, Self::Error> {
        Err(crate::Error::NoTranscriber)
    }
}

#[derive(Debug, Deserialize)]
pub struct TranscribeResponse {
    pub duration: f64,
    pub text: String,
    pub segments: Option<Vec<TranscribeSegment>>,
}

#[derive(Debug, Deserialize)]
pub struct TranscribeSegment {
    pub start: f64,
    pub end: f64,
    pub text: String,
}
