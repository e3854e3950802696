use std::sync::{Arc, Mutex};

use edunote_core::NotesBundle;
use edunote_pipeline::NotesEngine;

#[derive(Clone)]
pub struct MockEngine {
    pub bundle: NotesBundle,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl MockEngine {
    pub fn new(summary: &str) -> Self {
        Self {
            bundle: NotesBundle {
                summary: summary.to_string(),
                key_points: vec!["• mock point".to_string()],
                quiz: vec!["1. Explain the concept of 'mock' in the lecture.".to_string()],
            },
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Self::new("")
        }
    }
}

impl NotesEngine for MockEngine {
    type Error = anyhow::Error;

    async fn generate_notes(&self, lecture: &str) -> Result<NotesBundle, Self::Error> {
        self.calls.lock().unwrap().push(lecture.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(self.bundle.clone())
    }
}
