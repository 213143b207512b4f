use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Property holding the raw text every extractor reads from.
pub const PAGE_CONTENT: &str = "page_content";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Document,
    Chunk,
}

/// Value stored in a node's property bag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum PropertyValue {
    Text(String),
    List(Vec<String>),
    Nested(Vec<Vec<String>>),
}

impl PropertyValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            PropertyValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Text(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

impl From<Vec<String>> for PropertyValue {
    fn from(value: Vec<String>) -> Self {
        PropertyValue::List(value)
    }
}

impl From<Vec<Vec<String>>> for PropertyValue {
    fn from(value: Vec<Vec<String>>) -> Self {
        PropertyValue::Nested(value)
    }
}

/// A unit of source content with a bag of named properties.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub properties: BTreeMap<String, PropertyValue>,
}

impl Node {
    pub fn new(node_type: NodeType) -> Self {
        Self {
            id: Uuid::new_v4(),
            node_type,
            properties: BTreeMap::new(),
        }
    }

    /// Document node with its text stored under `page_content`
    pub fn document(text: impl Into<String>) -> Self {
        let mut node = Self::new(NodeType::Document);
        node.add_property(PAGE_CONTENT, PropertyValue::Text(text.into()));
        node
    }

    pub fn get_property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    /// Text-valued property; other shapes count as absent.
    pub fn text_property(&self, name: &str) -> Option<&str> {
        self.get_property(name).and_then(PropertyValue::as_text)
    }

    pub fn add_property(&mut self, name: impl Into<String>, value: PropertyValue) {
        self.properties.insert(name.into(), value);
    }

    pub fn page_content(&self) -> Option<&str> {
        self.text_property(PAGE_CONTENT)
    }
}
