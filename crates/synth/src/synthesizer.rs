use extract::{LanguageModel, PromptError};
use ingest::{Node, PropertyValue};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

use crate::multi_hop::{combine_concepts, generate_query_answer, QueryConditions};
use crate::persona::{match_personas, Persona, PersonaThemesMapping};
use crate::test_set::{Testset, TestsetSample};

pub const MULTI_HOP_SYNTHESIZER: &str = "multi_hop_abstract";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesizerConfig {
    /// Node property holding the per-node concept list
    pub themes_property: String,
    pub query_styles: Vec<String>,
    pub query_lengths: Vec<String>,
}

impl Default for SynthesizerConfig {
    fn default() -> Self {
        Self {
            themes_property: "themes".to_string(),
            query_styles: vec!["Формальный".to_string(), "Дружелюбный".to_string()],
            query_lengths: vec![
                "Краткий".to_string(),
                "Средний".to_string(),
                "Длинный".to_string(),
            ],
        }
    }
}

/// Builds question/answer pairs that need context from several nodes.
pub struct MultiHopSynthesizer {
    llm: Arc<dyn LanguageModel>,
    config: SynthesizerConfig,
}

impl MultiHopSynthesizer {
    pub fn new(llm: Arc<dyn LanguageModel>, config: SynthesizerConfig) -> Self {
        Self { llm, config }
    }

    /// Generate up to `num_samples` samples from nodes already annotated with themes.
    pub async fn generate_samples(
        &self,
        nodes: &[Node],
        personas: &[Persona],
        num_samples: usize,
    ) -> Result<Testset, PromptError> {
        if num_samples == 0 || personas.is_empty() {
            return Ok(Testset::default());
        }

        let concept_nodes: Vec<(&Node, &[String])> = nodes
            .iter()
            .filter_map(|node| {
                node.get_property(&self.config.themes_property)
                    .and_then(PropertyValue::as_list)
                    .filter(|themes| !themes.is_empty())
                    .map(|themes| (node, themes))
            })
            .collect();

        if concept_nodes.len() < 2 {
            info!(
                nodes = concept_nodes.len(),
                "Multi-hop synthesis needs at least two nodes with themes"
            );
            return Ok(Testset::default());
        }

        let lists_of_concepts = concept_nodes
            .iter()
            .map(|(_, themes)| themes.to_vec())
            .collect();
        let combinations = combine_concepts(self.llm.as_ref(), lists_of_concepts, num_samples).await?;
        if combinations.is_empty() {
            info!("No concept combinations returned");
            return Ok(Testset::default());
        }

        let mapping = match_personas(
            self.llm.as_ref(),
            unique_themes(&concept_nodes),
            personas.to_vec(),
        )
        .await?;

        let mut samples = Vec::new();
        for (index, combination) in combinations.into_iter().take(num_samples).enumerate() {
            let context: Vec<String> = concept_nodes
                .iter()
                .filter(|(_, themes)| combination.iter().any(|concept| themes.contains(concept)))
                .filter_map(|(node, _)| node.page_content())
                .map(str::to_string)
                .collect();

            if context.is_empty() {
                debug!(?combination, "Combination matches no node, skipped");
                continue;
            }

            let persona = pick_persona(personas, &mapping, &combination, index);
            let conditions = QueryConditions {
                persona: persona.clone(),
                themes: combination,
                query_style: cycle(&self.config.query_styles, index),
                query_length: cycle(&self.config.query_lengths, index),
                context,
            };

            let generated = generate_query_answer(self.llm.as_ref(), &conditions).await?;
            samples.push(TestsetSample::from_generation(
                MULTI_HOP_SYNTHESIZER,
                conditions,
                generated,
            ));
        }

        info!(samples = samples.len(), "Multi-hop samples generated");
        Ok(Testset { samples })
    }
}

fn unique_themes(concept_nodes: &[(&Node, &[String])]) -> Vec<String> {
    let mut themes: Vec<String> = Vec::new();
    for (_, node_themes) in concept_nodes {
        for theme in node_themes.iter() {
            if !themes.contains(theme) {
                themes.push(theme.clone());
            }
        }
    }
    themes
}

/// First persona, starting at `index` round-robin, whose themes overlap the combination.
fn pick_persona<'a>(
    personas: &'a [Persona],
    mapping: &PersonaThemesMapping,
    combination: &[String],
    index: usize,
) -> &'a Persona {
    let start = index % personas.len();
    personas[start..]
        .iter()
        .chain(personas[..start].iter())
        .find(|persona| {
            mapping
                .themes_for(&persona.name)
                .iter()
                .any(|theme| combination.contains(theme))
        })
        .unwrap_or(&personas[start])
}

fn cycle(values: &[String], index: usize) -> String {
    if values.is_empty() {
        return String::new();
    }
    values[index % values.len()].clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn personas() -> Vec<Persona> {
        vec![
            Persona::new("Технический специалист", "Обслуживание."),
            Persona::new("Оператор комбайна", "Работа в поле."),
        ]
    }

    #[test]
    fn test_pick_persona_prefers_matching_themes() {
        let personas = personas();
        let mapping = PersonaThemesMapping {
            mapping: BTreeMap::from([
                ("Технический специалист".to_string(), vec!["Безопасность".to_string()]),
                ("Оператор комбайна".to_string(), vec!["GPS".to_string()]),
            ]),
        };
        let combination = vec!["GPS".to_string(), "Урожайность".to_string()];

        assert_eq!(pick_persona(&personas, &mapping, &combination, 0).name, "Оператор комбайна");
        assert_eq!(pick_persona(&personas, &mapping, &combination, 1).name, "Оператор комбайна");
    }

    #[test]
    fn test_pick_persona_falls_back_to_round_robin() {
        let personas = personas();
        let mapping = PersonaThemesMapping::default();
        let combination = vec!["Калибровка".to_string()];

        assert_eq!(pick_persona(&personas, &mapping, &combination, 0).name, "Технический специалист");
        assert_eq!(pick_persona(&personas, &mapping, &combination, 1).name, "Оператор комбайна");
        assert_eq!(pick_persona(&personas, &mapping, &combination, 2).name, "Технический специалист");
    }

    #[test]
    fn test_cycle() {
        let values = vec!["a".to_string(), "b".to_string()];
        assert_eq!(cycle(&values, 3), "b");
        assert_eq!(cycle(&[], 3), "");
    }
}
