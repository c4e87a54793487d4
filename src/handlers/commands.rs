use teloxide::prelude::*;
use std::error::Error;

use crate::dialogue::{DialogueController, Event};
use crate::Command;

pub async fn command_handler(
    msg: Message,
    cmd: Command,
    controller: DialogueController,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let Some(user) = msg.from.as_ref() else {
        log::warn!("Command without sender in chat {}", msg.chat.id);
        return Ok(());
    };

    match cmd {
        Command::Start => {
            log::info!("👋 /start from user {}", user.id);
            controller.handle(user.id, msg.chat.id, Event::CommandStart).await?;
        }
    }

    Ok(())
}
