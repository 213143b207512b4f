use extract::schema::string_fields_schema;
use extract::{OutputSchema, Prompt};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::persona::Persona;

pub const DEFAULT_MAX_COMBINATIONS: usize = 5;

fn default_max_combinations() -> usize {
    DEFAULT_MAX_COMBINATIONS
}

/// Concept lists, one per node, to be combined across nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptsList {
    pub lists_of_concepts: Vec<Vec<String>>,
    #[serde(default = "default_max_combinations")]
    pub max_combinations: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptCombinations {
    pub combinations: Vec<Vec<String>>,
}

impl OutputSchema for ConceptCombinations {
    fn json_schema() -> serde_json::Value {
        json!({
            "title": "ConceptCombinations",
            "type": "object",
            "properties": {
                "combinations": {
                    "type": "array",
                    "items": { "type": "array", "items": { "type": "string" } }
                }
            },
            "required": ["combinations"],
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryConditions {
    pub persona: Persona,
    pub themes: Vec<String>,
    pub query_style: String,
    pub query_length: String,
    pub context: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedQueryAnswer {
    pub query: String,
    pub answer: String,
}

impl OutputSchema for GeneratedQueryAnswer {
    fn json_schema() -> serde_json::Value {
        string_fields_schema("GeneratedQueryAnswer", &["query", "answer"])
    }
}

pub const CONCEPT_COMBINATION_INSTRUCTION: &str = "\
Сформируйте комбинации, объединяя концепции из как минимум двух разных списков.
**Инструкции:**
- Просмотрите концепции из каждого узла.
- Определите концепции, которые могут быть логически связаны или противопоставлены.
- Сформируйте комбинации, включающие концепции из разных узлов.
- Каждая комбинация должна содержать как минимум одну концепцию из двух или более узлов.
- Перечислите комбинации ясно и лаконично.
- Не повторяйте одну и ту же комбинацию более одного раза.";

pub const QUERY_ANSWER_GENERATION_INSTRUCTION: &str = "\
Сгенерируйте запрос и ответ на основе заданных условий (персона, темы, стиль, длина) и предоставленного контекста. Убедитесь, что ответ полностью соответствует контексту, используя только информацию прямо из предоставленных узлов.
### Инструкции:

1. **Сгенерировать запрос**: Исходя из контекста, персоны, тем, стиля и длины, создайте вопрос, соответствующий перспективе персоны и отражающий темы.
2. **Сгенерировать ответ**: Используя только содержимое предоставленного контекста, создайте точный и подробный ответ на запрос. Не включайте никакой информации, которая отсутствует в контексте или не может быть выведена из него.
### Пример выходных данных:
";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn lists(items: &[&[&str]]) -> Vec<Vec<String>> {
    items.iter().map(|list| strings(list)).collect()
}

pub fn concept_combination_prompt() -> Prompt<ConceptsList, ConceptCombinations> {
    Prompt::new("concept_combination", CONCEPT_COMBINATION_INSTRUCTION)
        .with_example(
            ConceptsList {
                lists_of_concepts: lists(&[
                    &["Техническое обслуживание", "Эффективность"],
                    &["Использование GPS", "Мониторинг урожайности"],
                ]),
                max_combinations: 2,
            },
            ConceptCombinations {
                combinations: lists(&[
                    &["Техническое обслуживание", "Использование GPS"],
                    &["Эффективность", "Мониторинг урожайности"],
                ]),
            },
        )
        .with_example(
            ConceptsList {
                lists_of_concepts: lists(&[
                    &["Оптимизация маршрутов", "Безопасность"],
                    &["Интеграция систем", "Управление ресурсами"],
                    &["Калибровка оборудования", "Поддержка пользователей"],
                ]),
                max_combinations: 3,
            },
            ConceptCombinations {
                combinations: lists(&[
                    &["Оптимизация маршрутов", "Интеграция систем"],
                    &["Безопасность", "Управление ресурсами"],
                    &["Калибровка оборудования", "Поддержка пользователей"],
                ]),
            },
        )
}

pub fn query_answer_generation_prompt() -> Prompt<QueryConditions, GeneratedQueryAnswer> {
    Prompt::new("query_answer_generation", QUERY_ANSWER_GENERATION_INSTRUCTION)
        .with_example(
            QueryConditions {
                persona: Persona::new(
                    "Технический специалист",
                    "Отвечает за техническое обслуживание и настройку оборудования AMAZONE.",
                ),
                themes: strings(&[
                    "Техническое обслуживание",
                    "Использование GPS",
                    "Мониторинг урожайности",
                ]),
                query_style: "Формальный".to_string(),
                query_length: "Краткий".to_string(),
                context: strings(&[
                    "Комбайн AMAZONE AFS 800 оснащен системой GPS для точного позиционирования на поле.",
                    "Регулярное техническое обслуживание включает проверку уровня масла и работу сенсоров YieldMaster для мониторинга урожайности.",
                    "Использование GPS позволяет оптимизировать маршруты уборки и повышать эффективность работы комбайна.",
                ]),
            },
            GeneratedQueryAnswer {
                query: "Какие ключевые аспекты включает техническое обслуживание комбайна AMAZONE AFS 800?".to_string(),
                answer: "Техническое обслуживание комбайна AMAZONE AFS 800 включает проверку уровня масла, работу сенсоров YieldMaster для мониторинга урожайности и обеспечение функционирования системы GPS для оптимизации маршрутов уборки.".to_string(),
            },
        )
        .with_example(
            QueryConditions {
                persona: Persona::new(
                    "Менеджер по работе с клиентами",
                    "Обеспечивает поддержку пользователей и отвечает на их вопросы по эксплуатации техники AMAZONE.",
                ),
                themes: strings(&[
                    "Поддержка пользователей",
                    "Интеграция систем",
                    "Обучение операторов",
                ]),
                query_style: "Дружелюбный".to_string(),
                query_length: "Средний".to_string(),
                context: strings(&[
                    "Менеджеры по работе с клиентами обеспечивают поддержку пользователей техники AMAZONE, помогая с интеграцией систем AMAZONE Control и проведением обучающих сессий для операторов.",
                    "Интеграция систем позволяет пользователям эффективно управлять параметрами оборудования и получать своевременные обновления программного обеспечения.",
                    "Обучение операторов включает практические занятия по использованию сенсоров YieldMaster и систем мониторинга урожайности.",
                ]),
            },
            GeneratedQueryAnswer {
                query: "Как менеджеры по работе с клиентами помогают пользователям эффективно использовать технику AMAZONE?".to_string(),
                answer: "Менеджеры по работе с клиентами помогают пользователям эффективно использовать технику AMAZONE, обеспечивая поддержку при интеграции систем AMAZONE Control, проводя обучающие сессии для операторов и предоставляя помощь в использовании сенсоров YieldMaster и систем мониторинга урожайности.".to_string(),
            },
        )
}
