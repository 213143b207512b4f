#![allow(dead_code)]
//! Shared test helpers: a scripted language model that records every prompt.

use async_trait::async_trait;
use extract::{LanguageModel, PromptError};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct ScriptedLlm {
    pub prompts: Arc<Mutex<Vec<String>>>,
    responses: Arc<Mutex<Vec<String>>>,
}

impl ScriptedLlm {
    /// Responses are handed out in the given order, one per call.
    pub fn new(responses: Vec<&str>) -> Self {
        Self {
            prompts: Arc::new(Mutex::new(Vec::new())),
            responses: Arc::new(Mutex::new(
                responses.into_iter().rev().map(str::to_string).collect(),
            )),
        }
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn prompt(&self, index: usize) -> String {
        self.prompts.lock().unwrap()[index].clone()
    }
}

#[async_trait]
impl LanguageModel for ScriptedLlm {
    async fn generate(&self, prompt: &str) -> Result<String, PromptError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop()
            .ok_or(PromptError::EmptyResponse)
    }

    fn model_name(&self) -> &str {
        "scripted"
    }
}
