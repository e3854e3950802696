use std::path::PathBuf;

use crate::{
    NoTranscriber, NotesEngine, NotesProcessor, NotesRenderer, Transcriber,
    DEFAULT_MAX_INPUT_CHARS,
};

pub struct NotesProcessorBuilder<E = (), T = NoTranscriber, R = ()> {
    output_dir: PathBuf,
    max_input_chars: usize,
    engine: E,
    transcriber: T,
    renderer: R,
}

impl NotesProcessorBuilder {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
            engine: (),
            transcriber: NoTranscriber,
            renderer: (),
        }
    }
}

impl<E, T, R> NotesProcessorBuilder<E, T, R> {
    pub fn engine<E2: NotesEngine + Send + Sync + 'static>(
        self,
        engine: E2,
    ) -> NotesProcessorBuilder<E2, T, R> {
        NotesProcessorBuilder {
            output_dir: self.output_dir,
            max_input_chars: self.max_input_chars,
            engine,
            transcriber: self.transcriber,
            renderer: self.renderer,
        }
    }

    pub fn transcriber<T2: Transcriber + Send + Sync + 'static>(
        self,
        transcriber: T2,
    ) -> NotesProcessorBuilder<E, T2, R> {
        NotesProcessorBuilder {
            output_dir: self.output_dir,
            max_input_chars: self.max_input_chars,
            engine: self.engine,
            transcriber,
            renderer: self.renderer,
        }
    }

    pub fn renderer<R2: NotesRenderer + Send + Sync + 'static>(
        self,
        renderer: R2,
    ) -> NotesProcessorBuilder<E, T, R2> {
        NotesProcessorBuilder {
            output_dir: self.output_dir,
            max_input_chars: self.max_input_chars,
            engine: self.engine,
            transcriber: self.transcriber,
            renderer,
        }
    }

    pub fn max_input_chars(mut self, max_input_chars: usize) -> Self {
        self.max_input_chars = max_input_chars;
        self
    }
}

impl<E, T, R> NotesProcessorBuilder<E, T, R>
where
    E: NotesEngine + Send + Sync + 'static,
    T: Transcriber + Send + Sync + 'static,
    R: NotesRenderer + Send + Sync + 'static,
{
    pub fn build(self) -> NotesProcessor<E, T, R> {
        NotesProcessor {
            output_dir: self.output_dir,
            max_input_chars: self.max_input_chars,
            engine: self.engine,
            transcriber: self.transcriber,
            renderer: self.renderer,
        }
    }
}
