//! Few-shot source documents shared by several extraction prompts.

pub const AFS_800_MANUAL: &str = "\
Инструкция по эксплуатации комбайна AMAZONE AFS 800

Комбайн AMAZONE AFS 800 предназначен для эффективной уборки зерновых культур. Перед началом эксплуатации убедитесь, что уровень масла в двигателе соответствует требованиям (80 литров). Комбайн оснащен системой GPS для точного позиционирования на поле, что позволяет оптимизировать маршруты уборки и повышать производительность. Вес техники составляет 12 тонн, обеспечивая стабильность на различных типах грунта. Для управления и мониторинга параметров работы используется программное обеспечение AMAZONE Control, которое позволяет загружать карты полей и анализировать данные в реальном времени. Сенсоры YieldMaster интегрированы для измерения урожайности и помогают в принятии решений по управлению ресурсами. Регулярное техническое обслуживание, включая проверку масла и работу системы GPS, гарантирует долгий срок службы оборудования и высокую эффективность работы.
";

pub const MCX_500_GUIDE: &str = "\
Руководство по обслуживанию трактора AMAZONE MCX 500

Трактор AMAZONE MCX 500 разработан для выполнения широкого спектра сельскохозяйственных работ. Регулярная проверка давления в шинах должна проводиться каждую неделю для обеспечения оптимальной производительности и безопасности. Для точной калибровки весов используется модель AMAZONE ScalePro 200, которая позволяет получать точные измерения веса прицепов и навесного оборудования. Карты обработанных территорий сохраняются в системе AMAZONE FieldManager, что облегчает планирование и анализ выполненных работ. Метрики эффективности включают расход топлива и время работы двигателя, что помогает в оптимизации использования ресурсов. Вес трактора составляет 10 тонн, что позволяет работать на крутых склонах без потери мощности. Программное обеспечение AMAZONE FieldManager интегрируется с сенсорами трактора для мониторинга состояния техники и своевременного выявления возможных неполадок.
";

pub const AFS_800_INSTRUCTIONS: &str = "\
Инструкция по эксплуатации комбайна AMAZONE AFS 800:
Для начала работы убедитесь, что уровень масла в двигателе составляет 80 литров.
Комбайн оснащен системой GPS для точного позиционирования на поле.
Вес техники составляет 12 тонн, что обеспечивает стабильность на различных типах грунта.
Карты полей можно загрузить через программное обеспечение AMAZONE Control.
Для измерения урожайности используются сенсоры типа YieldMaster.
";

pub const MCX_500_MAINTENANCE: &str = "\
Обслуживание трактора AMAZONE MCX 500:
Регулярная проверка давления в шинах должна проводиться каждую неделю.
Для точной калибровки весов используйте модель AMAZONE ScalePro 200.
Карты обработанных территорий сохраняются в системе AMAZONE FieldManager.
Метрики эффективности включают расход топлива и время работы двигателя.
Вес трактора составляет 10 тонн, что позволяет работать на крутых склонах.
";

pub(crate) fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}
