mod common;

use common::ScriptedLlm;
use extract::{
    annotate_node, Extractor, ExtractorBase, HeadlinesExtractor, KeyphrasesExtractor,
    NerExtractor, PromptError, SummaryExtractor, ThemesExtractor, TitleExtractor,
    TopicDescriptionExtractor,
};
use ingest::{Node, NodeType, PropertyValue};
use std::sync::Arc;

const AFS_800: &str = "Комбайн AMAZONE AFS 800 оснащен системой GPS для точного позиционирования на поле. Сенсоры YieldMaster измеряют урожайность.";

// Twenty words: with a limit of 13 tokens this splits into two chunks of ten words.
const TWO_CHUNKS: &str = "один два три четыре пять шесть семь восемь девять десять \
                          одиннадцать двенадцать тринадцать четырнадцать пятнадцать \
                          шестнадцать семнадцать восемнадцать девятнадцать двадцать";

fn base(llm: &ScriptedLlm) -> ExtractorBase {
    ExtractorBase::new(Arc::new(llm.clone()))
}

fn small_base(llm: &ScriptedLlm) -> ExtractorBase {
    base(llm).with_max_token_limit(13)
}

fn list(items: &[&str]) -> Option<PropertyValue> {
    Some(PropertyValue::List(items.iter().map(|s| s.to_string()).collect()))
}

#[tokio::test]
async fn test_absent_text_makes_no_llm_call() {
    let llm = ScriptedLlm::new(vec![]);
    let node = Node::new(NodeType::Chunk);

    let extractors: Vec<Box<dyn Extractor>> = vec![
        Box::new(SummaryExtractor::new(base(&llm))),
        Box::new(KeyphrasesExtractor::new(base(&llm))),
        Box::new(TitleExtractor::new(base(&llm))),
        Box::new(HeadlinesExtractor::new(base(&llm))),
        Box::new(TopicDescriptionExtractor::new(base(&llm))),
    ];
    for extractor in &extractors {
        let (name, value) = extractor.extract(&node).await.unwrap();
        assert_eq!(name, extractor.property_name());
        assert!(value.is_none());
    }

    let (name, value) = NerExtractor::new(base(&llm)).extract(&node).await.unwrap();
    assert_eq!(name, "entities");
    assert_eq!(value, Some(PropertyValue::List(vec![])));

    let (name, value) = ThemesExtractor::new(base(&llm)).extract(&node).await.unwrap();
    assert_eq!(name, "themes");
    assert_eq!(value, Some(PropertyValue::List(vec![])));

    assert_eq!(llm.calls(), 0);
}

#[tokio::test]
async fn test_keyphrases_single_chunk() {
    let llm = ScriptedLlm::new(vec![
        r#"{"keyphrases": ["комбайн AMAZONE AFS 800", "система GPS", "сенсоры YieldMaster"]}"#,
    ]);
    let node = Node::document(AFS_800);

    let (name, value) = KeyphrasesExtractor::new(base(&llm))
        .extract(&node)
        .await
        .unwrap();

    assert_eq!(name, "keyphrases");
    let keyphrases = value.unwrap();
    let keyphrases = keyphrases.as_list().unwrap();
    assert!(keyphrases.len() <= 5);
    assert!(keyphrases.iter().any(|k| k == "система GPS"));

    assert_eq!(llm.calls(), 1);
    let prompt = llm.prompt(0);
    assert!(prompt.contains(r#""max_num":5}"#));
    assert!(prompt.contains("Комбайн AMAZONE AFS 800 оснащен системой GPS"));
}

#[tokio::test]
async fn test_list_extractors_concatenate_chunks_in_order() {
    let llm = ScriptedLlm::new(vec![
        r#"{"entities": ["один", "два"]}"#,
        r#"{"entities": ["одиннадцать"]}"#,
        r#"{"output": ["тема 1"]}"#,
        r#"{"output": ["тема 2", "тема 3"]}"#,
        r#"{"headlines": []}"#,
        r#"{"headlines": ["Заключение"]}"#,
        r#"{"keyphrases": ["три", "семь"]}"#,
        r#"{"keyphrases": ["двадцать"]}"#,
    ]);
    let node = Node::document(TWO_CHUNKS);

    let (_, entities) = NerExtractor::new(small_base(&llm))
        .extract(&node)
        .await
        .unwrap();
    assert_eq!(entities, list(&["один", "два", "одиннадцать"]));

    let (_, themes) = ThemesExtractor::new(small_base(&llm))
        .extract(&node)
        .await
        .unwrap();
    assert_eq!(themes, list(&["тема 1", "тема 2", "тема 3"]));

    let (_, headlines) = HeadlinesExtractor::new(small_base(&llm))
        .extract(&node)
        .await
        .unwrap();
    assert_eq!(headlines, list(&["Заключение"]));

    let (name, keyphrases) = KeyphrasesExtractor::new(small_base(&llm))
        .extract(&node)
        .await
        .unwrap();
    assert_eq!(name, "keyphrases");
    assert_eq!(keyphrases, list(&["три", "семь", "двадцать"]));
    assert!(llm.prompt(7).contains(r#""text":"одиннадцать двенадцать"#));

    assert_eq!(llm.calls(), 8);
    assert!(llm.prompt(0).contains(r#""text":"один два"#));
    assert!(llm.prompt(1).contains(r#""text":"одиннадцать двенадцать"#));
}

#[tokio::test]
async fn test_single_value_extractors_use_first_chunk_only() {
    let llm = ScriptedLlm::new(vec![
        r#"{"text": "Краткое содержание"}"#,
        r#"{"text": "Заголовок"}"#,
        r#"{"description": "Описание тем"}"#,
    ]);
    let node = Node::document(TWO_CHUNKS);

    let (name, summary) = SummaryExtractor::new(small_base(&llm))
        .extract(&node)
        .await
        .unwrap();
    assert_eq!(name, "summary");
    assert_eq!(summary, Some(PropertyValue::Text("Краткое содержание".to_string())));

    let (_, title) = TitleExtractor::new(small_base(&llm))
        .extract(&node)
        .await
        .unwrap();
    assert_eq!(title, Some(PropertyValue::Text("Заголовок".to_string())));

    let (name, topic) = TopicDescriptionExtractor::new(small_base(&llm))
        .extract(&node)
        .await
        .unwrap();
    assert_eq!(name, "topic_description");
    assert_eq!(topic, Some(PropertyValue::Text("Описание тем".to_string())));

    assert_eq!(llm.calls(), 3);
    for i in 0..3 {
        let prompt = llm.prompt(i);
        assert!(prompt.contains(r#"Input: {"text":"один два"#));
        assert!(!prompt.contains(r#"Input: {"text":"одиннадцать"#));
    }
}

#[tokio::test]
async fn test_schema_invalid_output_propagates() {
    let llm = ScriptedLlm::new(vec![r#"{"keyphrases": "not a list"}"#]);
    let node = Node::document(AFS_800);

    let err = KeyphrasesExtractor::new(base(&llm))
        .extract(&node)
        .await
        .unwrap_err();

    assert!(matches!(err, PromptError::InvalidOutput { .. }));
    assert_eq!(llm.calls(), 1);
}

#[tokio::test]
async fn test_llm_failure_stops_list_extraction() {
    // Only one scripted answer for a two-chunk node
    let llm = ScriptedLlm::new(vec![r#"{"entities": ["один"]}"#]);
    let node = Node::document(TWO_CHUNKS);

    let err = NerExtractor::new(small_base(&llm))
        .extract(&node)
        .await
        .unwrap_err();

    assert!(matches!(err, PromptError::EmptyResponse));
    assert_eq!(llm.calls(), 2);
}

#[tokio::test]
async fn test_custom_property_name_and_limit() {
    let llm = ScriptedLlm::new(vec![r#"{"keyphrases": ["GPS"]}"#]);
    let node = Node::document(AFS_800);

    let mut extractor = KeyphrasesExtractor::new(base(&llm)).with_max_num(3);
    extractor.property_name = "key_terms".to_string();

    let (name, _) = extractor.extract(&node).await.unwrap();
    assert_eq!(name, "key_terms");
    assert!(llm.prompt(0).contains(r#""max_num":3}"#));
}

#[tokio::test]
async fn test_annotate_node_merges_properties() {
    let llm = ScriptedLlm::new(vec![
        r#"```json
{"text": "Инструкция по эксплуатации комбайна AMAZONE AFS 800"}
```"#,
        r#"{"output": ["Система GPS", "Урожайность"]}"#,
    ]);
    let mut node = Node::document(AFS_800);

    let extractors: Vec<Box<dyn Extractor>> = vec![
        Box::new(TitleExtractor::new(base(&llm))),
        Box::new(ThemesExtractor::new(base(&llm))),
    ];
    annotate_node(&mut node, &extractors).await.unwrap();

    assert_eq!(
        node.text_property("title"),
        Some("Инструкция по эксплуатации комбайна AMAZONE AFS 800")
    );
    assert_eq!(node.get_property("themes"), list(&["Система GPS", "Урожайность"]).as_ref());
    assert_eq!(node.page_content(), Some(AFS_800));
}
