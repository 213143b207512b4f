use async_trait::async_trait;
use ingest::{Node, PropertyValue, TokenSplitter};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use crate::error::PromptError;
use crate::llm::LanguageModel;
use crate::prompt::{OutputSchema, Prompt};
use crate::prompts;
use crate::schema::{
    Headlines, Keyphrases, NerOutput, StringIo, TextWithExtractionLimit, ThemesAndConcepts,
    TopicDescription,
};

pub type Extraction = (String, Option<PropertyValue>);

/// Derives one named property from a node's `page_content`.
#[async_trait]
pub trait Extractor: Send + Sync {
    fn property_name(&self) -> &str;

    /// Returns the property name with its value, or `None` when the node has no text.
    async fn extract(&self, node: &Node) -> Result<Extraction, PromptError>;
}

/// LLM handle and token-limit policy shared by every extractor.
#[derive(Clone)]
pub struct ExtractorBase {
    llm: Arc<dyn LanguageModel>,
    pub splitter: TokenSplitter,
}

impl ExtractorBase {
    pub fn new(llm: Arc<dyn LanguageModel>) -> Self {
        Self {
            llm,
            splitter: TokenSplitter::default(),
        }
    }

    pub fn with_max_token_limit(mut self, max_token_limit: usize) -> Self {
        self.splitter = TokenSplitter::new(max_token_limit);
        self
    }

    fn chunks(&self, node: &Node) -> Option<Vec<String>> {
        node.page_content().map(|text| self.splitter.split(text))
    }

    /// Single-valued extraction: only the first chunk is sent.
    async fn generate_first<I, O>(
        &self,
        prompt: &Prompt<I, O>,
        chunks: &[String],
        input: impl Fn(&str) -> I,
    ) -> Result<O, PromptError>
    where
        I: Serialize,
        O: Serialize + DeserializeOwned + OutputSchema,
    {
        let first = chunks.first().map(String::as_str).unwrap_or_default();
        prompt.generate(self.llm.as_ref(), &input(first)).await
    }

    /// List-valued extraction: one request per chunk, results concatenated in chunk order.
    async fn generate_each<I, O>(
        &self,
        prompt: &Prompt<I, O>,
        chunks: &[String],
        input: impl Fn(&str) -> I,
        items: impl Fn(O) -> Vec<String>,
    ) -> Result<Vec<String>, PromptError>
    where
        I: Serialize,
        O: Serialize + DeserializeOwned + OutputSchema,
    {
        let mut collected = Vec::new();
        for (index, chunk) in chunks.iter().enumerate() {
            let output = prompt.generate(self.llm.as_ref(), &input(chunk)).await?;
            let batch = items(output);
            debug!(
                prompt = %prompt.name,
                chunk = index,
                items = batch.len(),
                "Chunk extracted"
            );
            collected.extend(batch);
        }
        Ok(collected)
    }
}

pub struct SummaryExtractor {
    pub property_name: String,
    pub prompt: Prompt<StringIo, StringIo>,
    base: ExtractorBase,
}

impl SummaryExtractor {
    pub fn new(base: ExtractorBase) -> Self {
        Self {
            property_name: "summary".to_string(),
            prompt: prompts::summary_prompt(),
            base,
        }
    }
}

#[async_trait]
impl Extractor for SummaryExtractor {
    fn property_name(&self) -> &str {
        &self.property_name
    }

    async fn extract(&self, node: &Node) -> Result<Extraction, PromptError> {
        let Some(chunks) = self.base.chunks(node) else {
            return Ok((self.property_name.clone(), None));
        };
        let result = self
            .base
            .generate_first(&self.prompt, &chunks, |chunk| StringIo::new(chunk))
            .await?;
        Ok((self.property_name.clone(), Some(result.text.into())))
    }
}

pub struct KeyphrasesExtractor {
    pub property_name: String,
    pub prompt: Prompt<TextWithExtractionLimit, Keyphrases>,
    pub max_num: usize,
    base: ExtractorBase,
}

impl KeyphrasesExtractor {
    pub fn new(base: ExtractorBase) -> Self {
        Self {
            property_name: "keyphrases".to_string(),
            prompt: prompts::keyphrases_prompt(),
            max_num: 5,
            base,
        }
    }

    pub fn with_max_num(mut self, max_num: usize) -> Self {
        self.max_num = max_num;
        self
    }
}

#[async_trait]
impl Extractor for KeyphrasesExtractor {
    fn property_name(&self) -> &str {
        &self.property_name
    }

    async fn extract(&self, node: &Node) -> Result<Extraction, PromptError> {
        let Some(chunks) = self.base.chunks(node) else {
            return Ok((self.property_name.clone(), None));
        };
        let keyphrases = self
            .base
            .generate_each(
                &self.prompt,
                &chunks,
                |chunk| TextWithExtractionLimit::new(chunk, self.max_num),
                |output| output.keyphrases,
            )
            .await?;
        Ok((self.property_name.clone(), Some(keyphrases.into())))
    }
}

pub struct TitleExtractor {
    pub property_name: String,
    pub prompt: Prompt<StringIo, StringIo>,
    base: ExtractorBase,
}

impl TitleExtractor {
    pub fn new(base: ExtractorBase) -> Self {
        Self {
            property_name: "title".to_string(),
            prompt: prompts::title_prompt(),
            base,
        }
    }
}

#[async_trait]
impl Extractor for TitleExtractor {
    fn property_name(&self) -> &str {
        &self.property_name
    }

    async fn extract(&self, node: &Node) -> Result<Extraction, PromptError> {
        let Some(chunks) = self.base.chunks(node) else {
            return Ok((self.property_name.clone(), None));
        };
        let result = self
            .base
            .generate_first(&self.prompt, &chunks, |chunk| StringIo::new(chunk))
            .await?;
        Ok((self.property_name.clone(), Some(result.text.into())))
    }
}

pub struct HeadlinesExtractor {
    pub property_name: String,
    pub prompt: Prompt<TextWithExtractionLimit, Headlines>,
    pub max_num: usize,
    base: ExtractorBase,
}

impl HeadlinesExtractor {
    pub fn new(base: ExtractorBase) -> Self {
        Self {
            property_name: "headlines".to_string(),
            prompt: prompts::headlines_prompt(),
            max_num: 5,
            base,
        }
    }

    pub fn with_max_num(mut self, max_num: usize) -> Self {
        self.max_num = max_num;
        self
    }
}

#[async_trait]
impl Extractor for HeadlinesExtractor {
    fn property_name(&self) -> &str {
        &self.property_name
    }

    async fn extract(&self, node: &Node) -> Result<Extraction, PromptError> {
        let Some(chunks) = self.base.chunks(node) else {
            return Ok((self.property_name.clone(), None));
        };
        let headlines = self
            .base
            .generate_each(
                &self.prompt,
                &chunks,
                |chunk| TextWithExtractionLimit::new(chunk, self.max_num),
                |output| output.headlines,
            )
            .await?;
        Ok((self.property_name.clone(), Some(headlines.into())))
    }
}

/// Named entities; a node without text yields an empty list rather than no value.
pub struct NerExtractor {
    pub property_name: String,
    pub prompt: Prompt<TextWithExtractionLimit, NerOutput>,
    pub max_num_entities: usize,
    base: ExtractorBase,
}

impl NerExtractor {
    pub fn new(base: ExtractorBase) -> Self {
        Self {
            property_name: "entities".to_string(),
            prompt: prompts::ner_prompt(),
            max_num_entities: 10,
            base,
        }
    }

    pub fn with_max_num_entities(mut self, max_num_entities: usize) -> Self {
        self.max_num_entities = max_num_entities;
        self
    }
}

#[async_trait]
impl Extractor for NerExtractor {
    fn property_name(&self) -> &str {
        &self.property_name
    }

    async fn extract(&self, node: &Node) -> Result<Extraction, PromptError> {
        let Some(chunks) = self.base.chunks(node) else {
            return Ok((self.property_name.clone(), Some(PropertyValue::List(Vec::new()))));
        };
        let entities = self
            .base
            .generate_each(
                &self.prompt,
                &chunks,
                |chunk| TextWithExtractionLimit::new(chunk, self.max_num_entities),
                |output| output.entities,
            )
            .await?;
        Ok((self.property_name.clone(), Some(entities.into())))
    }
}

pub struct TopicDescriptionExtractor {
    pub property_name: String,
    pub prompt: Prompt<StringIo, TopicDescription>,
    base: ExtractorBase,
}

impl TopicDescriptionExtractor {
    pub fn new(base: ExtractorBase) -> Self {
        Self {
            property_name: "topic_description".to_string(),
            prompt: prompts::topic_description_prompt(),
            base,
        }
    }
}

#[async_trait]
impl Extractor for TopicDescriptionExtractor {
    fn property_name(&self) -> &str {
        &self.property_name
    }

    async fn extract(&self, node: &Node) -> Result<Extraction, PromptError> {
        let Some(chunks) = self.base.chunks(node) else {
            return Ok((self.property_name.clone(), None));
        };
        let result = self
            .base
            .generate_first(&self.prompt, &chunks, |chunk| StringIo::new(chunk))
            .await?;
        Ok((self.property_name.clone(), Some(result.description.into())))
    }
}

/// Themes and concepts; a node without text yields an empty list rather than no value.
pub struct ThemesExtractor {
    pub property_name: String,
    pub prompt: Prompt<TextWithExtractionLimit, ThemesAndConcepts>,
    pub max_num_themes: usize,
    base: ExtractorBase,
}

impl ThemesExtractor {
    pub fn new(base: ExtractorBase) -> Self {
        Self {
            property_name: "themes".to_string(),
            prompt: prompts::themes_prompt(),
            max_num_themes: 10,
            base,
        }
    }

    pub fn with_max_num_themes(mut self, max_num_themes: usize) -> Self {
        self.max_num_themes = max_num_themes;
        self
    }
}

#[async_trait]
impl Extractor for ThemesExtractor {
    fn property_name(&self) -> &str {
        &self.property_name
    }

    async fn extract(&self, node: &Node) -> Result<Extraction, PromptError> {
        let Some(chunks) = self.base.chunks(node) else {
            return Ok((self.property_name.clone(), Some(PropertyValue::List(Vec::new()))));
        };
        let themes = self
            .base
            .generate_each(
                &self.prompt,
                &chunks,
                |chunk| TextWithExtractionLimit::new(chunk, self.max_num_themes),
                |output| output.output,
            )
            .await?;
        Ok((self.property_name.clone(), Some(themes.into())))
    }
}
