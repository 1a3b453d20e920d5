use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{LlmError, TextGenerator};

/// Scripted generator for handler and pipeline tests.
/// Replays queued outcomes in order and records every prompt it receives.
#[derive(Clone, Default)]
pub struct MockTextGenerator {
    responses: Arc<Mutex<VecDeque<Result<String, String>>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockTextGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(self, text: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(text.to_string()));
        self
    }

    /// Queues a transport-style failure surfaced as `LlmError::Api { status: 500 }`.
    pub fn with_failure(self, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(message.to_string()));
        self
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        match self.responses.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(LlmError::Api {
                status: 500,
                message,
            }),
            None => Err(LlmError::EmptyContent),
        }
    }

    fn model(&self) -> &str {
        "mock"
    }
}
