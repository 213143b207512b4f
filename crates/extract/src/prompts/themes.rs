use super::corpus::{strings, AFS_800_MANUAL, MCX_500_GUIDE};
use crate::prompt::Prompt;
use crate::schema::{TextWithExtractionLimit, ThemesAndConcepts};

pub const THEMES_INSTRUCTION: &str = "Извлеките основные темы и концепции из данного текста.";

pub fn themes_prompt() -> Prompt<TextWithExtractionLimit, ThemesAndConcepts> {
    Prompt::new("themes_extractor", THEMES_INSTRUCTION)
        .with_example(
            TextWithExtractionLimit::new(AFS_800_MANUAL, 10),
            ThemesAndConcepts {
                output: strings(&[
                    "Эксплуатация комбайна",
                    "Технические характеристики",
                    "Система GPS",
                    "Программное обеспечение AMAZONE Control",
                    "Сенсоры YieldMaster",
                    "Уровень масла",
                    "Оптимизация маршрутов уборки",
                    "Мониторинг параметров работы",
                    "Техническое обслуживание",
                    "Урожайность",
                ]),
            },
        )
        .with_example(
            TextWithExtractionLimit::new(MCX_500_GUIDE, 10),
            ThemesAndConcepts {
                output: strings(&[
                    "Обслуживание трактора",
                    "Проверка давления в шинах",
                    "Калибровка весов",
                    "Модель AMAZONE ScalePro 200",
                    "Система AMAZONE FieldManager",
                    "Метрики эффективности",
                    "Расход топлива",
                    "Время работы двигателя",
                    "Вес трактора",
                    "Мониторинг состояния техники",
                ]),
            },
        )
}
