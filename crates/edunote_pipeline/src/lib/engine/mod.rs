mod extractive;
mod generative;

use std::{fmt::Debug, future::Future};

use edunote_core::NotesBundle;

pub use extractive::ExtractiveEngine;
pub use generative::GenerativeEngine;

/// A note-generation strategy. The extractive engine derives notes
/// positionally from the lecture text itself; the generative one
/// delegates to an external model. Both produce the same bundle shape
/// so the rest of the pipeline does not care which one ran.
pub trait NotesEngine {
    type Error: Debug;

    fn generate_notes(
        &self,
        lecture: &str,
    ) -> impl Future<Output = Result<NotesBundle, Self::Error>> + Send;
}
