use std::sync::{Arc, Mutex};

use edunote_pipeline::Generator;

#[derive(Clone)]
pub struct MockGenerator {
    pub response: String,
    pub prompts: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl MockGenerator {
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            prompts: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            response: String::new(),
            prompts: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

impl Generator for MockGenerator {
    const GENERATOR_MODEL: &'static str = "mock-gpt";

    type Error = anyhow::Error;

    async fn generate(&self, prompt: &str, _max_new_tokens: u32) -> Result<String, Self::Error> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(self.response.clone())
    }
}
