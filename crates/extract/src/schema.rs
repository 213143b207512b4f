use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::prompt::OutputSchema;

/// Default `max_num` for limit-bearing prompt inputs
pub const DEFAULT_MAX_NUM: usize = 10;

fn default_max_num() -> usize {
    DEFAULT_MAX_NUM
}

/// Plain text in, plain text out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringIo {
    pub text: String,
}

impl StringIo {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextWithExtractionLimit {
    pub text: String,
    #[serde(default = "default_max_num")]
    pub max_num: usize,
}

impl TextWithExtractionLimit {
    pub fn new(text: impl Into<String>, max_num: usize) -> Self {
        Self {
            text: text.into(),
            max_num,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyphrases {
    pub keyphrases: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headlines {
    pub headlines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NerOutput {
    pub entities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicDescription {
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemesAndConcepts {
    pub output: Vec<String>,
}

/// Schema of an object whose fields are all strings
pub fn string_fields_schema(title: &str, fields: &[&str]) -> serde_json::Value {
    let properties: serde_json::Map<String, serde_json::Value> = fields
        .iter()
        .map(|field| (field.to_string(), json!({ "type": "string" })))
        .collect();

    json!({
        "title": title,
        "type": "object",
        "properties": properties,
        "required": fields,
    })
}

/// Schema of an object with a single list-of-strings field
pub fn string_list_schema(title: &str, field: &str) -> serde_json::Value {
    json!({
        "title": title,
        "type": "object",
        "properties": {
            field: { "type": "array", "items": { "type": "string" } }
        },
        "required": [field],
    })
}

impl OutputSchema for StringIo {
    fn json_schema() -> serde_json::Value {
        string_fields_schema("StringIO", &["text"])
    }
}

impl OutputSchema for Keyphrases {
    fn json_schema() -> serde_json::Value {
        string_list_schema("Keyphrases", "keyphrases")
    }
}

impl OutputSchema for Headlines {
    fn json_schema() -> serde_json::Value {
        string_list_schema("Headlines", "headlines")
    }
}

impl OutputSchema for NerOutput {
    fn json_schema() -> serde_json::Value {
        string_list_schema("NEROutput", "entities")
    }
}

impl OutputSchema for TopicDescription {
    fn json_schema() -> serde_json::Value {
        string_fields_schema("TopicDescription", &["description"])
    }
}

impl OutputSchema for ThemesAndConcepts {
    fn json_schema() -> serde_json::Value {
        string_list_schema("ThemesAndConcepts", "output")
    }
}
