use teloxide::prelude::*;
use std::error::Error;

use crate::dialogue::{DialogueController, Event};

pub async fn message_handler(
    msg: Message,
    controller: DialogueController,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    // Стикеры, фото и прочее диалог не интересует
    let Some(text) = msg.text() else {
        return Ok(());
    };

    if !is_dialogue_text(text) {
        return Ok(());
    }

    let Some(user) = msg.from.as_ref() else {
        return Ok(());
    };

    controller
        .handle(user.id, msg.chat.id, Event::TextMessage(text.to_string()))
        .await?;

    Ok(())
}

/// Неизвестные команды не считаем названием города
fn is_dialogue_text(text: &str) -> bool {
    !text.starts_with('/')
}
