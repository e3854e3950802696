//! # EduNote Core
//!
//! The deterministic heart of the lecture-notes generator: text
//! normalization, decimal-safe sentence segmentation, and positional
//! (first-N) derivation of summary, key points, and quiz questions.
//!
//! Every function here is total over string inputs and free of I/O;
//! the orchestration layer in `edunote_pipeline` is responsible for
//! input validation and for routing output to collaborators.

mod clean;
mod notes;
mod report;
mod segment;

pub use clean::{normalize, CleanText, NormalizePolicy, FILLER_WORDS};
pub use notes::{
    key_points, quiz, summarize, NotesBundle, QuizNumbering, KEY_POINT_SENTENCES, QUIZ_SENTENCES,
    QUIZ_WORD_FLOOR, SUMMARY_SENTENCES,
};
pub use report::assemble;
pub use segment::{segment, Sentences};
