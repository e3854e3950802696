mod engine;
mod error;
mod llm;
mod processor;
mod render;
pub mod tracing;

pub use engine::{ExtractiveEngine, GenerativeEngine, NotesEngine};
pub use error::Error;
pub use llm::openai;
pub use llm::{
    generator::Generator,
    transcriber::{NoTranscriber, TranscribeResponse, TranscribeSegment, Transcriber},
};
pub use processor::{
    builder::NotesProcessorBuilder, GeneratedNotes, NotesInput, NotesProcessor,
    DEFAULT_MAX_INPUT_CHARS,
};
pub use render::{NotesRenderer, TextFileRenderer};
