use serde::{Deserialize, Serialize};

use crate::multi_hop::{GeneratedQueryAnswer, QueryConditions};

/// One synthesized question/answer pair with the conditions that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestsetSample {
    pub user_input: String,
    pub reference: String,
    pub reference_contexts: Vec<String>,
    pub persona_name: String,
    pub query_style: String,
    pub query_length: String,
    pub themes: Vec<String>,
    pub synthesizer_name: String,
}

impl TestsetSample {
    pub fn from_generation(
        synthesizer_name: &str,
        conditions: QueryConditions,
        generated: GeneratedQueryAnswer,
    ) -> Self {
        Self {
            user_input: generated.query,
            reference: generated.answer,
            reference_contexts: conditions.context,
            persona_name: conditions.persona.name,
            query_style: conditions.query_style,
            query_length: conditions.query_length,
            themes: conditions.themes,
            synthesizer_name: synthesizer_name.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Testset {
    pub samples: Vec<TestsetSample>,
}

impl Testset {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// One JSON object per line
    pub fn to_jsonl(&self) -> serde_json::Result<String> {
        let mut out = String::new();
        for sample in &self.samples {
            out.push_str(&serde_json::to_string(sample)?);
            out.push('\n');
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::Persona;

    #[test]
    fn test_sample_from_generation() {
        let conditions = QueryConditions {
            persona: Persona::new("Оператор комбайна", "Управляет комбайном в поле."),
            themes: vec!["Использование GPS".to_string()],
            query_style: "Формальный".to_string(),
            query_length: "Краткий".to_string(),
            context: vec!["Комбайн оснащен системой GPS.".to_string()],
        };
        let generated = GeneratedQueryAnswer {
            query: "Для чего комбайну GPS?".to_string(),
            answer: "Для точного позиционирования.".to_string(),
        };

        let sample = TestsetSample::from_generation("multi_hop", conditions, generated);
        let testset = Testset {
            samples: vec![sample.clone(), sample],
        };

        let jsonl = testset.to_jsonl().unwrap();
        let lines: Vec<&str> = jsonl.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: TestsetSample = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first.user_input, "Для чего комбайну GPS?");
        assert_eq!(first.persona_name, "Оператор комбайна");
        assert_eq!(first.synthesizer_name, "multi_hop");
    }
}
