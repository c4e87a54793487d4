use crate::models::WeatherReport;

/// Входящие события диалога
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Команда /start
    CommandStart,
    TextMessage(String),
    /// Нажатие inline-кнопки, `data` из callback
    ButtonClick(String),

    // Результаты запроса погоды, их подает контроллер
    WeatherReady(WeatherReport),
    WeatherFailed(LookupFailure),
}

/// Пользователю важно только "город не найден" или "все остальное"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupFailure {
    NotFound,
    Other,
}
