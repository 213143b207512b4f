use super::corpus::{AFS_800_MANUAL, MCX_500_GUIDE};
use crate::prompt::Prompt;
use crate::schema::{StringIo, TopicDescription};

pub const TOPIC_DESCRIPTION_INSTRUCTION: &str =
    "Предоставьте краткое описание основных тем, обсуждаемых в следующем тексте.";

pub fn topic_description_prompt() -> Prompt<StringIo, TopicDescription> {
    Prompt::new("topic_description_extractor", TOPIC_DESCRIPTION_INSTRUCTION)
        .with_example(
            StringIo::new(AFS_800_MANUAL),
            TopicDescription {
                description: "Описание комбайна AMAZONE AFS 800, включая его технические характеристики, систему GPS, программное обеспечение AMAZONE Control, сенсоры YieldMaster и требования к техническому обслуживанию для обеспечения эффективности и долговечности.".to_string(),
            },
        )
        .with_example(
            StringIo::new(MCX_500_GUIDE),
            TopicDescription {
                description: "Обслуживание трактора AMAZONE MCX 500, включая регулярную проверку давления в шинах, калибровку весов с помощью AMAZONE ScalePro 200, использование системы AMAZONE FieldManager для хранения карт обработанных территорий и мониторинг метрик эффективности для оптимизации ресурсов.".to_string(),
            },
        )
}
