use regex::Regex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Write;
use std::sync::LazyLock;
use tracing::debug;

use crate::error::PromptError;
use crate::llm::LanguageModel;

static CODE_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^\s*```[a-zA-Z]*\s*(.*?)\s*```\s*$").expect("code fence regex is valid")
});

/// Output records describe their own JSON shape so the model can be told what to return.
pub trait OutputSchema {
    fn json_schema() -> serde_json::Value;
}

/// A typed prompt: instruction text plus few-shot examples for an `I -> O` exchange.
#[derive(Debug, Clone)]
pub struct Prompt<I, O> {
    pub name: String,
    pub instruction: String,
    pub examples: Vec<(I, O)>,
}

impl<I, O> Prompt<I, O>
where
    I: Serialize,
    O: Serialize + DeserializeOwned + OutputSchema,
{
    pub fn new(name: impl Into<String>, instruction: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instruction: instruction.into(),
            examples: Vec::new(),
        }
    }

    pub fn with_example(mut self, input: I, output: O) -> Self {
        self.examples.push((input, output));
        self
    }

    pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = instruction.into();
        self
    }

    /// Full prompt text sent to the model for `input`
    pub fn render(&self, input: &I) -> Result<String, PromptError> {
        let schema = serde_json::to_string(&O::json_schema()).map_err(PromptError::Serialize)?;

        let mut prompt = String::new();
        prompt.push_str(self.instruction.trim());
        prompt.push_str(
            "\nPlease return the output in a JSON format that complies with the following schema as specified in JSON Schema:\n",
        );
        prompt.push_str(&schema);
        prompt.push_str(
            "\nDo not use single quotes in your response but double quotes, properly escaped with a backslash.\n",
        );

        if !self.examples.is_empty() {
            prompt.push_str("\n--------EXAMPLES-----------\n");
            for (i, (example_input, example_output)) in self.examples.iter().enumerate() {
                let example_input = to_json(example_input)?;
                let example_output = to_json(example_output)?;
                // Writing into a String cannot fail
                let _ = write!(
                    prompt,
                    "Example {}\nInput: {}\nOutput: {}\n\n",
                    i + 1,
                    example_input,
                    example_output
                );
            }
            prompt.push_str("-----------------------------\n");
        }

        prompt.push_str("\nNow perform the same with the following input\n");
        let _ = write!(prompt, "Input: {}\nOutput: ", to_json(input)?);

        Ok(prompt)
    }

    /// One request/response exchange; schema-invalid output is returned as an error.
    pub async fn generate(&self, llm: &dyn LanguageModel, input: &I) -> Result<O, PromptError> {
        let prompt = self.render(input)?;
        debug!(
            prompt = %self.name,
            model = llm.model_name(),
            chars = prompt.len(),
            "Sending prompt"
        );

        let raw = llm.generate(&prompt).await?;
        self.parse_output(&raw)
    }

    pub fn parse_output(&self, raw: &str) -> Result<O, PromptError> {
        let json = strip_code_fences(raw);
        serde_json::from_str(json).map_err(|source| PromptError::InvalidOutput {
            prompt: self.name.clone(),
            raw: raw.to_string(),
            source,
        })
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, PromptError> {
    serde_json::to_string(value).map_err(PromptError::Serialize)
}

/// Strips ```json ... ``` or ``` ... ``` fences some models wrap around JSON.
pub fn strip_code_fences(text: &str) -> &str {
    match CODE_FENCE.captures(text).and_then(|caps| caps.get(1)) {
        Some(inner) => inner.as_str(),
        None => text.trim(),
    }
}
