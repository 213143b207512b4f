use super::corpus::{AFS_800_MANUAL, MCX_500_GUIDE};
use crate::prompt::Prompt;
use crate::schema::StringIo;

pub const SUMMARY_INSTRUCTION: &str = "Сократите данный текст до менее чем 10 предложений.";

pub fn summary_prompt() -> Prompt<StringIo, StringIo> {
    Prompt::new("summary_extractor", SUMMARY_INSTRUCTION)
        .with_example(
            StringIo::new(AFS_800_MANUAL),
            StringIo::new(
                "Комбайн AMAZONE AFS 800 обеспечивает эффективную уборку зерновых культур с помощью системы GPS и сенсоров YieldMaster. Перед эксплуатацией необходимо проверить уровень масла (80 литров). Вес техники — 12 тонн, что гарантирует стабильность на различных грунтах. Управление осуществляется через ПО AMAZONE Control, позволяющее загружать карты полей и анализировать данные в реальном времени. Регулярное техническое обслуживание поддерживает высокую эффективность и долговечность оборудования.",
            ),
        )
        .with_example(
            StringIo::new(MCX_500_GUIDE),
            StringIo::new(
                "Трактор AMAZONE MCX 500 предназначен для разнообразных сельскохозяйственных задач с весом 10 тонн, что позволяет работать на крутых склонах. Регулярная проверка давления в шинах осуществляется каждую неделю для поддержания производительности и безопасности. Для калибровки весов используется AMAZONE ScalePro 200, обеспечивающий точные измерения. Карты обработанных территорий сохраняются в системе AMAZONE FieldManager, а метрики эффективности, такие как расход топлива и время работы двигателя, помогают оптимизировать использование ресурсов. Программное обеспечение интегрируется с сенсорами трактора для мониторинга состояния техники и предотвращения возможных неполадок.",
            ),
        )
}
