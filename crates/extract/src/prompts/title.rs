use crate::prompt::Prompt;
use crate::schema::StringIo;

pub const TITLE_INSTRUCTION: &str = "Извлеките заголовок из данного документа.";

pub fn title_prompt() -> Prompt<StringIo, StringIo> {
    Prompt::new("title_extractor", TITLE_INSTRUCTION)
        .with_example(
            StringIo::new(
                "\
Инструкция по эксплуатации комбайна AMAZONE AFS 800

Введение

Эта инструкция предназначена для эксплуатации комбайна AMAZONE AFS 800. Она содержит информацию о настройке, эксплуатации и техническом обслуживании оборудования.
",
            ),
            StringIo::new("Инструкция по эксплуатации комбайна AMAZONE AFS 800"),
        )
        .with_example(
            StringIo::new(
                "\
Руководство по обслуживанию трактора AMAZONE MCX 500

Безопасность

Перед началом обслуживания убедитесь, что трактор выключен и находится в безопасном положении.
",
            ),
            StringIo::new("Руководство по обслуживанию трактора AMAZONE MCX 500"),
        )
}
