//! Фиксированный набор сообщений и кнопок бота

use crate::dialogue::effect::{Button, Keyboard};
use crate::models::WeatherReport;

pub const START_TOKEN: &str = "start";
pub const OTHER_TOKEN: &str = "other";
pub const YES_TOKEN: &str = "yes";
pub const NO_TOKEN: &str = "no";

/// (подпись, токен) городов в меню
pub const CITIES: [(&str, &str); 4] = [
    ("🏙 Москва", "Moscow"),
    ("🌆 Кейптаун", "Cape Town"),
    ("🗽 Нью-Йорк", "New York"),
    ("🌃 Шанхай", "Shanghai"),
];

pub const CHOOSE_CITY: &str = "🌍 Выберите город:";
pub const ENTER_CITY: &str = "📝 Введите название города:";
pub const SUN_QUESTION: &str = "Показать время рассвета и заката?";
pub const NEW_REQUEST: &str = "Хотите сделать новый запрос?";
pub const CITY_NOT_FOUND: &str = "🏙 Город не найден, попробуйте другой";
pub const GENERIC_FAILURE: &str = "😢 Что-то пошло не так. Попробуйте другой город";

const OTHER_LABEL: &str = "✏️ Другой город";
const START_OVER_LABEL: &str = "🔄 Начать заново";
const TRY_AGAIN_LABEL: &str = "🔄 Попробовать снова";
const YES_LABEL: &str = "Да ✅";
const NO_LABEL: &str = "Нет ❌";

pub fn is_city_token(data: &str) -> bool {
    CITIES.iter().any(|(_, token)| *token == data)
}

/// Меню из шести кнопок, по одной в строке
pub fn city_menu() -> Keyboard {
    let mut buttons: Vec<Button> = CITIES
        .iter()
        .map(|(label, token)| Button::new(*label, *token))
        .collect();
    buttons.push(Button::new(OTHER_LABEL, OTHER_TOKEN));
    buttons.push(Button::new(START_OVER_LABEL, START_TOKEN));

    Keyboard::single_column(buttons)
}

pub fn sun_question_keyboard() -> Keyboard {
    Keyboard::columns(
        vec![
            Button::new(YES_LABEL, YES_TOKEN),
            Button::new(NO_LABEL, NO_TOKEN),
            Button::new(START_OVER_LABEL, START_TOKEN),
        ],
        2,
    )
}

pub fn start_over_keyboard() -> Keyboard {
    Keyboard::single_column(vec![Button::new(START_OVER_LABEL, START_TOKEN)])
}

pub fn try_again_keyboard() -> Keyboard {
    Keyboard::single_column(vec![Button::new(TRY_AGAIN_LABEL, START_TOKEN)])
}

fn or_na(value: Option<f64>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| v.to_string())
}

pub fn weather_message(report: &WeatherReport) -> String {
    format!(
        "🌡 Температура: {}°C\n📉 Давление: {} мм рт.ст.\n🌪 Ветер: {} м/с",
        or_na(report.temperature),
        report.pressure_mmhg,
        or_na(report.wind_speed)
    )
}

pub fn sun_message(sunrise: &str, sunset: &str) -> String {
    format!("🌅 Рассвет: {}\n🌇 Закат: {}", sunrise, sunset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinates;

    fn report(temperature: Option<f64>, wind_speed: Option<f64>) -> WeatherReport {
        WeatherReport {
            coordinates: Coordinates { lat: 0.0, lon: 0.0 },
            temperature,
            pressure_mmhg: 750,
            wind_speed,
            icon: String::new(),
            sunrise: 0,
            sunset: 0,
            timezone_offset: 0,
        }
    }

    #[test]
    fn menu_has_six_buttons_in_order() {
        let tokens: Vec<_> = city_menu().buttons().map(|b| b.callback.clone()).collect();
        assert_eq!(
            tokens,
            vec!["Moscow", "Cape Town", "New York", "Shanghai", "other", "start"]
        );
    }

    #[test]
    fn weather_message_formats_values() {
        let text = weather_message(&report(Some(21.5), Some(3.0)));
        assert_eq!(
            text,
            "🌡 Температура: 21.5°C\n📉 Давление: 750 мм рт.ст.\n🌪 Ветер: 3 м/с"
        );
    }

    #[test]
    fn weather_message_marks_missing_values() {
        let text = weather_message(&report(None, None));
        assert!(text.contains("Температура: N/A°C"));
        assert!(text.contains("Ветер: N/A м/с"));
    }

    #[test]
    fn only_fixed_cities_are_tokens() {
        assert!(is_city_token("Shanghai"));
        assert!(!is_city_token("yes"));
        assert!(!is_city_token("Paris"));
    }
}
