use std::{
    fmt::Debug,
    fs,
    path::{Path, PathBuf},
};

/// The rendering collaborator seam. Document serialization (PDF and
/// friends) lives outside the pipeline; implementations only have to
/// put the assembled report somewhere and say where it landed.
pub trait NotesRenderer {
    type Error: Debug;

    fn render(&self, report: &str, output_path: &Path) -> Result<PathBuf, Self::Error>;
}

/// Writes the report verbatim to a UTF-8 text file, creating the parent
/// directory if needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFileRenderer;

impl NotesRenderer for TextFileRenderer {
    type Error = std::io::Error;

    fn render(&self, report: &str, output_path: &Path) -> Result<PathBuf, Self::Error> {
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(output_path, report)?;
        tracing::info!(path = %output_path.display(), "Wrote notes report");
        Ok(output_path.to_path_buf())
    }
}
