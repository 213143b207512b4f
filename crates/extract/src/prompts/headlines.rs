use super::corpus::strings;
use crate::prompt::Prompt;
use crate::schema::{Headlines, TextWithExtractionLimit};

pub const HEADLINES_INSTRUCTION: &str = "Извлеките наиболее важные заголовки, не превышающие количество max_num, из данного текста, которые могут быть использованы для разделения текста на независимые разделы. Сосредоточьтесь на заголовках уровня 2 и уровня 3.";

const MACHINERY_OVERVIEW: &str = "\
Введение
Обзор техники AMAZONE и ее применение в сельском хозяйстве.

Установка оборудования
Пошаговая инструкция по установке техники на рабочем месте.

Эксплуатация
Основные правила использования техники AMAZONE.

Поддержка и обслуживание
Регулярное техническое обслуживание и устранение неполадок.

Карты и схемы
Использование карт и схем для оптимизации работы техники.

Метрики измерения
Ключевые показатели эффективности и их мониторинг.

Заключение
Резюме и рекомендации по использованию техники AMAZONE.
";

const MACHINERY_SETUP: &str = "\
Безопасность при работе с техникой
Меры предосторожности и правила безопасности.

Настройка параметров
Инструкция по настройке ключевых параметров техники.

Калибровка весов
Пошаговая процедура калибровки весов для точных измерений.

Использование сенсоров
Настройка и калибровка сенсоров для оптимальной работы.

Программное обеспечение
Обзор программных инструментов для управления техникой.

Обновления и апгрейды
Процесс обновления программного обеспечения и аппаратных компонентов.

Часто задаваемые вопросы
Ответы на наиболее распространенные вопросы пользователей.
";

pub fn headlines_prompt() -> Prompt<TextWithExtractionLimit, Headlines> {
    Prompt::new("headlines_extractor", HEADLINES_INSTRUCTION)
        .with_example(
            TextWithExtractionLimit::new(MACHINERY_OVERVIEW, 7),
            Headlines {
                headlines: strings(&[
                    "Введение",
                    "Установка оборудования",
                    "Эксплуатация",
                    "Поддержка и обслуживание",
                    "Карты и схемы",
                    "Метрики измерения",
                    "Заключение",
                ]),
            },
        )
        .with_example(
            TextWithExtractionLimit::new(MACHINERY_SETUP, 7),
            Headlines {
                headlines: strings(&[
                    "Безопасность при работе с техникой",
                    "Настройка параметров",
                    "Калибровка весов",
                    "Использование сенсоров",
                    "Программное обеспечение",
                    "Обновления и апгрейды",
                    "Часто задаваемые вопросы",
                ]),
            },
        )
}
