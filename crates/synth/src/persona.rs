use extract::{LanguageModel, OutputSchema, Prompt, PromptError};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;
use tracing::info;

/// A named role used to steer query style and focus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    pub name: String,
    pub role_description: String,
}

impl Persona {
    pub fn new(name: impl Into<String>, role_description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role_description: role_description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemesPersonasInput {
    pub themes: Vec<String>,
    pub personas: Vec<Persona>,
}

/// Persona name to the themes assigned to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaThemesMapping {
    pub mapping: BTreeMap<String, Vec<String>>,
}

impl PersonaThemesMapping {
    pub fn themes_for(&self, persona_name: &str) -> &[String] {
        self.mapping
            .get(persona_name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Themes from `themes` that no persona received. Inspection only; nothing is repaired.
    pub fn unassigned<'a>(&self, themes: &'a [String]) -> Vec<&'a str> {
        themes
            .iter()
            .filter(|theme| !self.mapping.values().any(|assigned| assigned.contains(*theme)))
            .map(String::as_str)
            .collect()
    }
}

impl OutputSchema for PersonaThemesMapping {
    fn json_schema() -> serde_json::Value {
        json!({
            "title": "PersonaThemesMapping",
            "type": "object",
            "properties": {
                "mapping": {
                    "type": "object",
                    "additionalProperties": { "type": "array", "items": { "type": "string" } }
                }
            },
            "required": ["mapping"],
        })
    }
}

pub const THEMES_PERSONAS_MATCHING_INSTRUCTION: &str = "Учитывая список тем и персонажей с их ролями, сопоставьте каждого персонажа с релевантными темами на основе описания их роли.";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

pub fn themes_personas_matching_prompt() -> Prompt<ThemesPersonasInput, PersonaThemesMapping> {
    Prompt::new("themes_personas_matching", THEMES_PERSONAS_MATCHING_INSTRUCTION)
        .with_example(
            ThemesPersonasInput {
                themes: strings(&[
                    "Техническое обслуживание",
                    "Эффективность",
                    "Управление ресурсами",
                    "Безопасность",
                    "Использование GPS",
                    "Мониторинг урожайности",
                ]),
                personas: vec![
                    Persona::new(
                        "Технический специалист",
                        "Отвечает за регулярное техническое обслуживание и проверку оборудования.",
                    ),
                    Persona::new(
                        "Оператор комбайна",
                        "Управляет комбайном в поле, используя системы GPS и мониторинг урожайности.",
                    ),
                ],
            },
            PersonaThemesMapping {
                mapping: BTreeMap::from([
                    (
                        "Технический специалист".to_string(),
                        strings(&["Техническое обслуживание", "Безопасность", "Управление ресурсами"]),
                    ),
                    (
                        "Оператор комбайна".to_string(),
                        strings(&["Эффективность", "Использование GPS", "Мониторинг урожайности"]),
                    ),
                ]),
            },
        )
        .with_example(
            ThemesPersonasInput {
                themes: strings(&[
                    "Калибровка оборудования",
                    "Управление данными",
                    "Оптимизация маршрутов",
                    "Поддержка пользователей",
                    "Интеграция систем",
                ]),
                personas: vec![
                    Persona::new(
                        "Инженер по калибровке",
                        "Занимается точной калибровкой весов и сенсоров для обеспечения точности измерений.",
                    ),
                    Persona::new(
                        "Менеджер по работе с клиентами",
                        "Обеспечивает поддержку пользователей и помогает с интеграцией систем AMAZONE в рабочие процессы.",
                    ),
                ],
            },
            PersonaThemesMapping {
                mapping: BTreeMap::from([
                    (
                        "Инженер по калибровке".to_string(),
                        strings(&["Калибровка оборудования", "Оптимизация маршрутов"]),
                    ),
                    (
                        "Менеджер по работе с клиентами".to_string(),
                        strings(&["Управление данными", "Поддержка пользователей", "Интеграция систем"]),
                    ),
                ]),
            },
        )
}

/// Ask the model which themes each persona cares about.
pub async fn match_personas(
    llm: &dyn LanguageModel,
    themes: Vec<String>,
    personas: Vec<Persona>,
) -> Result<PersonaThemesMapping, PromptError> {
    let prompt = themes_personas_matching_prompt();
    let input = ThemesPersonasInput { themes, personas };
    let mapping = prompt.generate(llm, &input).await?;

    let unassigned = mapping.unassigned(&input.themes);
    info!(
        personas = mapping.mapping.len(),
        unassigned = unassigned.len(),
        "Personas matched to themes"
    );

    Ok(mapping)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_examples_cover_every_theme() {
        for (input, output) in &themes_personas_matching_prompt().examples {
            assert!(output.unassigned(&input.themes).is_empty());
            let names: Vec<&str> = input.personas.iter().map(|p| p.name.as_str()).collect();
            let keys: Vec<&str> = output.mapping.keys().map(String::as_str).collect();
            assert_eq!(keys.len(), names.len());
            assert!(keys.iter().all(|key| names.contains(key)));
        }
    }

    #[test]
    fn test_mapping_helpers() {
        let mapping = PersonaThemesMapping {
            mapping: BTreeMap::from([("Оператор".to_string(), strings(&["GPS"]))]),
        };
        let themes = strings(&["GPS", "Безопасность"]);

        assert_eq!(mapping.themes_for("Оператор"), &["GPS".to_string()][..]);
        assert!(mapping.themes_for("Инженер").is_empty());
        assert_eq!(mapping.unassigned(&themes), vec!["Безопасность"]);
    }
}
