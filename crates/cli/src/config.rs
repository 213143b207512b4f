use anyhow::{Context, Result};
use extract::llm::ollama::{DEFAULT_OLLAMA_MODEL, DEFAULT_OLLAMA_URL};
use extract::{LanguageModel, OllamaClient, OpenAiCompatClient};
use ingest::DEFAULT_MAX_TOKEN_LIMIT;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use synth::SynthesizerConfig;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub llm: LlmConfig,
    pub extraction: ExtractionConfig,
    pub synthesis: SynthesizerConfig,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Ollama,  // Local Ollama server, /api/generate
    OpenAi,  // Any /v1/chat/completions endpoint
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub provider: Provider,
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    pub max_token_limit: usize,
    pub max_keyphrases: usize,
    pub max_headlines: usize,
    pub max_entities: usize,
    pub max_themes: usize,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: Provider::Ollama,
            base_url: DEFAULT_OLLAMA_URL.to_string(),
            model: DEFAULT_OLLAMA_MODEL.to_string(),
            api_key: None,
        }
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_token_limit: DEFAULT_MAX_TOKEN_LIMIT,
            max_keyphrases: 5,
            max_headlines: 5,
            max_entities: 10,
            max_themes: 10,
        }
    }
}

impl AppConfig {
    /// Defaults, overlaid by an optional JSON file, overlaid by environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        serde_json::from_str(&raw).with_context(|| format!("Invalid config file: {:?}", path))
    }

    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(base_url) = lookup("TESTSET_LLM_BASE_URL") {
            self.llm.base_url = base_url;
        }
        if let Some(model) = lookup("TESTSET_LLM_MODEL") {
            self.llm.model = model;
        }
        if let Some(api_key) = lookup("TESTSET_LLM_API_KEY") {
            self.llm.api_key = Some(api_key);
        }
    }

    pub fn build_llm(&self) -> Arc<dyn LanguageModel> {
        let llm = &self.llm;
        match llm.provider {
            Provider::Ollama => Arc::new(OllamaClient::new(llm.base_url.clone(), llm.model.clone())),
            Provider::OpenAi => Arc::new(OpenAiCompatClient::new(
                llm.base_url.clone(),
                llm.model.clone(),
                llm.api_key.clone(),
            )),
        }
    }
}
