use teloxide::prelude::*;
use std::error::Error;

use crate::dialogue::{DialogueController, Event};

pub async fn callback_handler(
    bot: Bot,
    q: CallbackQuery,
    controller: DialogueController,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    // Убираем "часики" на кнопке, даже если дальше ничего не произойдет
    if let Err(e) = bot.answer_callback_query(q.id.clone()).await {
        log::warn!("Failed to answer callback query: {}", e);
    }

    let (Some(data), Some(message)) = (q.data.as_deref(), q.message.as_ref()) else {
        return Ok(());
    };
    let chat_id = message.chat().id;

    log::debug!("🔘 Button '{}' from user {}", data, q.from.id);

    controller
        .handle(q.from.id, chat_id, Event::ButtonClick(data.to_string()))
        .await?;

    Ok(())
}
