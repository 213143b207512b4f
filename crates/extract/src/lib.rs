pub mod error;
pub mod extractors;
pub mod llm;
pub mod prompt;
pub mod prompts;
pub mod schema;

pub use error::PromptError;
pub use extractors::{
    Extraction, Extractor, ExtractorBase, HeadlinesExtractor, KeyphrasesExtractor, NerExtractor,
    SummaryExtractor, ThemesExtractor, TitleExtractor, TopicDescriptionExtractor,
};
pub use llm::{LanguageModel, OllamaClient, OpenAiCompatClient};
pub use prompt::{OutputSchema, Prompt};

use ingest::Node;
use tracing::info;

/// Run extractors in order and merge every produced value into the node.
pub async fn annotate_node(
    node: &mut Node,
    extractors: &[Box<dyn Extractor>],
) -> Result<(), PromptError> {
    for extractor in extractors {
        let (name, value) = extractor.extract(node).await?;
        match value {
            Some(value) => {
                info!(node = %node.id, property = %name, "Property extracted");
                node.add_property(name, value);
            }
            None => info!(node = %node.id, property = %name, "No source text, property skipped"),
        }
    }

    Ok(())
}
