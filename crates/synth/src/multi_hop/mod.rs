pub mod prompts;

pub use prompts::{
    concept_combination_prompt, query_answer_generation_prompt, ConceptCombinations, ConceptsList,
    GeneratedQueryAnswer, QueryConditions,
};

use extract::{LanguageModel, PromptError};
use tracing::debug;

/// Ask the model for at most `max_combinations` cross-node concept combinations.
pub async fn combine_concepts(
    llm: &dyn LanguageModel,
    lists_of_concepts: Vec<Vec<String>>,
    max_combinations: usize,
) -> Result<Vec<Vec<String>>, PromptError> {
    let input = ConceptsList {
        lists_of_concepts,
        max_combinations,
    };
    let output = concept_combination_prompt().generate(llm, &input).await?;
    debug!(combinations = output.combinations.len(), "Concepts combined");

    Ok(output.combinations)
}

pub async fn generate_query_answer(
    llm: &dyn LanguageModel,
    conditions: &QueryConditions,
) -> Result<GeneratedQueryAnswer, PromptError> {
    query_answer_generation_prompt().generate(llm, conditions).await
}
