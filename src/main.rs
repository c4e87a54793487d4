use std::sync::Arc;

use anyhow::Context;
use teloxide::{prelude::*, utils::command::BotCommands};

mod bot_state;
mod config;
mod dialogue;
mod handlers;
mod models;
mod weather;

use crate::bot_state::InMemoryStateStore;
use crate::config::Config;
use crate::dialogue::DialogueController;
use crate::handlers::{callback_handler, command_handler, message_handler, TelegramTransport};
use crate::weather::WeatherClient;

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Доступные команды:")]
pub enum Command {
    #[command(description = "выбрать город")]
    Start,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Загружаем .env и инициализируем логирование
    dotenvy::dotenv().ok();
    env_logger::init();
    log::info!("Starting weather bot...");

    let config = Config::from_env().context("invalid configuration")?;
    let weather = WeatherClient::new(&config).context("failed to build weather client")?;
    log::info!("✅ Weather provider at {}", config.owm_base_url);

    let bot = Bot::new(&config.telegram_token);

    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        log::warn!("Failed to register bot commands: {}", e);
    }

    let controller = DialogueController::new(
        Arc::new(InMemoryStateStore::new()),
        Arc::new(weather),
        Arc::new(TelegramTransport::new(bot.clone())),
    );

    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(command_handler),
        )
        .branch(Update::filter_callback_query().endpoint(callback_handler))
        .branch(Update::filter_message().endpoint(message_handler));

    log::info!("🚀 Starting dispatcher...");

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![controller])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
