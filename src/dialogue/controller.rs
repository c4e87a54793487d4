use std::sync::Arc;

use async_trait::async_trait;
use teloxide::types::{ChatId, UserId};
use thiserror::Error;

use crate::bot_state::UserStateStore;
use crate::dialogue::effect::{Effect, Outbound};
use crate::dialogue::event::{Event, LookupFailure};
use crate::dialogue::transition::transition;
use crate::weather::WeatherSource;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("telegram request failed: {0}")]
    Telegram(#[from] teloxide::RequestError),
    #[error("invalid image url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Доставка исходящих сообщений в чат
#[async_trait]
pub trait Transport: Send + Sync {
    async fn deliver(&self, chat_id: ChatId, message: Outbound) -> Result<(), TransportError>;
}

/// Исполнитель эффектов вокруг чистой функции переходов
#[derive(Clone)]
pub struct DialogueController {
    store: Arc<dyn UserStateStore>,
    weather: Arc<dyn WeatherSource>,
    transport: Arc<dyn Transport>,
}

impl DialogueController {
    pub fn new(
        store: Arc<dyn UserStateStore>,
        weather: Arc<dyn WeatherSource>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            store,
            weather,
            transport,
        }
    }

    pub async fn handle(
        &self,
        user_id: UserId,
        chat_id: ChatId,
        event: Event,
    ) -> Result<(), TransportError> {
        let mut next = Some(event);

        while let Some(event) = next.take() {
            log::debug!("📨 {:?} from user {}", event, user_id);

            let workflow_result = matches!(event, Event::WeatherReady(_));
            let state = self.store.get_or_create(user_id).await;
            let result = transition(&state, event);

            if result.new_state.mode != state.mode {
                log::debug!(
                    "🔀 User {}: {:?} -> {:?}",
                    user_id,
                    state.mode,
                    result.new_state.mode
                );
            }
            if workflow_result {
                // Состояние сохраняется только если пользователь увидел весь ответ
                match self.deliver_all(chat_id, result.effects).await {
                    Ok(()) => self.store.set(user_id, result.new_state).await,
                    Err(e) => {
                        log::warn!("Weather reply for user {} not delivered: {}", user_id, e);
                        next = Some(Event::WeatherFailed(LookupFailure::Other));
                    }
                }
                continue;
            }

            self.store.set(user_id, result.new_state).await;

            for effect in result.effects {
                match effect {
                    Effect::Send(message) => self.transport.deliver(chat_id, message).await?,
                    Effect::FetchWeather { city } => {
                        next = Some(self.run_lookup(user_id, &city).await);
                    }
                }
            }
        }

        Ok(())
    }

    /// Отправка ответа с погодой, эффекты там только `Send`
    async fn deliver_all(&self, chat_id: ChatId, effects: Vec<Effect>) -> Result<(), TransportError> {
        for effect in effects {
            if let Effect::Send(message) = effect {
                self.transport.deliver(chat_id, message).await?;
            }
        }
        Ok(())
    }

    /// Ошибки провайдера дальше не уходят, только как событие для диалога
    async fn run_lookup(&self, user_id: UserId, city: &str) -> Event {
        log::info!("🌤 Weather lookup for '{}' (user {})", city, user_id);

        match self.weather.lookup(city).await {
            Ok(report) => Event::WeatherReady(report),
            Err(e) if e.is_not_found() => {
                log::info!("🏙 City '{}' not found", city);
                Event::WeatherFailed(LookupFailure::NotFound)
            }
            Err(e) => {
                log::warn!("Weather lookup for '{}' failed: {}", city, e);
                Event::WeatherFailed(LookupFailure::Other)
            }
        }
    }
}
