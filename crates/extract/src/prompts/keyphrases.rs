use super::corpus::{strings, AFS_800_INSTRUCTIONS, MCX_500_MAINTENANCE};
use crate::prompt::Prompt;
use crate::schema::{Keyphrases, TextWithExtractionLimit};

pub const KEYPHRASES_INSTRUCTION: &str =
    "Извлеките топ-ключевых фраз, не превышающих количество max_num, из данного текста.";

pub fn keyphrases_prompt() -> Prompt<TextWithExtractionLimit, Keyphrases> {
    Prompt::new("keyphrases_extractor", KEYPHRASES_INSTRUCTION)
        .with_example(
            TextWithExtractionLimit::new(AFS_800_INSTRUCTIONS, 5),
            Keyphrases {
                keyphrases: strings(&[
                    "инструкция по эксплуатации",
                    "уровень масла",
                    "система GPS",
                    "программное обеспечение AMAZONE Control",
                    "сенсоры YieldMaster",
                ]),
            },
        )
        .with_example(
            TextWithExtractionLimit::new(MCX_500_MAINTENANCE, 5),
            Keyphrases {
                keyphrases: strings(&[
                    "обслуживание трактора",
                    "проверка давления в шинах",
                    "AMAZONE ScalePro 200",
                    "AMAZONE FieldManager",
                    "метрики эффективности",
                ]),
            },
        )
}
