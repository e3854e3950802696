/// Failures raised by the pipeline itself, before any collaborator or
/// engine runs. Collaborator errors carry their own types and are
/// propagated, never absorbed.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("lecture input is empty or whitespace-only")]
    EmptyInput,
    #[error("lecture input is too large: {actual} chars exceeds the limit of {limit}")]
    InputTooLarge { actual: usize, limit: usize },
    #[error("audio input supplied but no transcriber is configured")]
    NoTranscriber,
}
