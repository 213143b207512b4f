//! Extraction prompts with their few-shot examples.
//!
//! Every constructor returns a fresh [`Prompt`](crate::prompt::Prompt), so callers may
//! swap the instruction or add examples without affecting other extractors.

pub mod corpus;
pub mod headlines;
pub mod keyphrases;
pub mod ner;
pub mod summary;
pub mod themes;
pub mod title;
pub mod topic;

pub use headlines::headlines_prompt;
pub use keyphrases::keyphrases_prompt;
pub use ner::ner_prompt;
pub use summary::summary_prompt;
pub use themes::themes_prompt;
pub use title::title_prompt;
pub use topic::topic_description_prompt;
