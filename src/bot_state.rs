use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use teloxide::types::UserId;
use tokio::sync::RwLock;

use crate::models::UserState;

/// Хранилище состояний диалога, по одному на пользователя
#[async_trait]
pub trait UserStateStore: Send + Sync {
    /// Возвращает состояние пользователя, при первом обращении создает `Greeting`
    async fn get_or_create(&self, user_id: UserId) -> UserState;

    async fn set(&self, user_id: UserId, state: UserState);
}

/// Живет все время процесса, записи никогда не удаляются
#[derive(Clone, Default)]
pub struct InMemoryStateStore {
    states: Arc<RwLock<HashMap<UserId, UserState>>>,
}

impl InMemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.states.read().await.len()
    }
}

#[async_trait]
impl UserStateStore for InMemoryStateStore {
    async fn get_or_create(&self, user_id: UserId) -> UserState {
        {
            let states = self.states.read().await;
            if let Some(state) = states.get(&user_id) {
                return state.clone();
            }
        }

        let mut states = self.states.write().await;
        let state = states.entry(user_id).or_insert_with(|| {
            log::debug!("🆕 New dialogue state for user {}", user_id);
            UserState::default()
        });
        state.clone()
    }

    async fn set(&self, user_id: UserId, state: UserState) {
        let mut states = self.states.write().await;
        states.insert(user_id, state);
    }
}
