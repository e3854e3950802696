use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use edunote_pipeline::NotesRenderer;

#[derive(Clone)]
pub struct MockRenderer {
    pub rendered: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl Default for MockRenderer {
    fn default() -> Self {
        Self {
            rendered: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }
}

impl MockRenderer {
    pub fn failing(msg: &str) -> Self {
        Self {
            rendered: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

impl NotesRenderer for MockRenderer {
    type Error = anyhow::Error;

    fn render(&self, report: &str, output_path: &Path) -> Result<PathBuf, Self::Error> {
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        self.rendered.lock().unwrap().push(report.to_string());
        Ok(output_path.to_path_buf())
    }
}
