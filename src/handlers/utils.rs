use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, InputFile};
use url::Url;

use crate::dialogue::{Keyboard, Outbound, Transport, TransportError};

/// Inline-клавиатура с той же раскладкой строк
pub fn inline_keyboard(keyboard: &Keyboard) -> InlineKeyboardMarkup {
    let rows: Vec<Vec<InlineKeyboardButton>> = keyboard
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|b| InlineKeyboardButton::callback(b.label.clone(), b.callback.clone()))
                .collect()
        })
        .collect();

    InlineKeyboardMarkup::new(rows)
}

#[derive(Clone)]
pub struct TelegramTransport {
    bot: Bot,
}

impl TelegramTransport {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Transport for TelegramTransport {
    async fn deliver(&self, chat_id: ChatId, message: Outbound) -> Result<(), TransportError> {
        let result = match message {
            Outbound::Text(text) => self.bot.send_message(chat_id, text).await.map(|_| ()),
            Outbound::Photo(url) => {
                let url = Url::parse(&url)?;
                self.bot
                    .send_photo(chat_id, InputFile::url(url))
                    .await
                    .map(|_| ())
            }
            Outbound::TextWithButtons { text, keyboard } => self
                .bot
                .send_message(chat_id, text)
                .reply_markup(inline_keyboard(&keyboard))
                .await
                .map(|_| ()),
        };

        if let Err(e) = &result {
            log::error!("❌ Failed to deliver message to {}: {}", chat_id, e);
        }
        result.map_err(TransportError::from)
    }
}
