use super::corpus::{strings, AFS_800_INSTRUCTIONS, MCX_500_MAINTENANCE};
use crate::prompt::Prompt;
use crate::schema::{NerOutput, TextWithExtractionLimit};

pub const NER_INSTRUCTION: &str = "Извлеките именованные сущности из данного текста, ограничивая вывод наиболее значимыми сущностями. Убедитесь, что количество сущностей не превышает указанного максимума.";

pub fn ner_prompt() -> Prompt<TextWithExtractionLimit, NerOutput> {
    Prompt::new("ner_extractor", NER_INSTRUCTION)
        .with_example(
            TextWithExtractionLimit::new(AFS_800_INSTRUCTIONS, 10),
            NerOutput {
                entities: strings(&[
                    "комбайн AMAZONE AFS 800",
                    "уровень масла",
                    "80 литров",
                    "GPS",
                    "12 тонн",
                    "различных типах грунта",
                    "карты полей",
                    "программное обеспечение AMAZONE Control",
                    "урожайность",
                    "сенсоры типа YieldMaster",
                ]),
            },
        )
        .with_example(
            TextWithExtractionLimit::new(MCX_500_MAINTENANCE, 10),
            NerOutput {
                entities: strings(&[
                    "трактора AMAZONE MCX 500",
                    "давления в шинах",
                    "каждую неделю",
                    "калибровки весов",
                    "AMAZONE ScalePro 200",
                    "карты обработанных территорий",
                    "AMAZONE FieldManager",
                    "метрики эффективности",
                    "расход топлива",
                    "10 тонн",
                ]),
            },
        )
}
