//! Чистая функция переходов: (состояние, событие) → (новое состояние, эффекты).
//! Никакого I/O, запрос погоды только заказывается через `Effect::FetchWeather`.

use super::effect::Effect;
use super::event::{Event, LookupFailure};
use super::texts;
use crate::models::{Mode, UserState, WeatherReport};
use crate::weather::{format_time, icon_url};

#[derive(Debug)]
pub struct TransitionResult {
    pub new_state: UserState,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(state: UserState) -> Self {
        Self {
            new_state: state,
            effects: vec![],
        }
    }

    /// Событие проигнорировано, состояние то же
    pub fn ignored(state: &UserState) -> Self {
        Self::new(state.clone())
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

pub fn transition(state: &UserState, event: Event) -> TransitionResult {
    match event {
        // "start" перехватывается до разбора по режимам
        Event::CommandStart => show_city_menu(state),
        Event::ButtonClick(data) if data == texts::START_TOKEN => show_city_menu(state),

        Event::ButtonClick(data) => match state.mode {
            Mode::CityChoice if data == texts::OTHER_TOKEN => {
                TransitionResult::new(with_mode(state, Mode::OtherCity))
                    .with_effect(Effect::text(texts::ENTER_CITY))
            }
            Mode::CityChoice if texts::is_city_token(&data) => {
                TransitionResult::ignored(state).with_effect(Effect::FetchWeather { city: data })
            }
            Mode::SunQuestion => answer_sun_question(state, &data),
            Mode::Greeting | Mode::CityChoice | Mode::OtherCity => TransitionResult::ignored(state),
        },

        Event::TextMessage(text) => match state.mode {
            Mode::OtherCity => TransitionResult::ignored(state).with_effect(Effect::FetchWeather {
                city: text.trim().to_string(),
            }),
            Mode::Greeting | Mode::CityChoice | Mode::SunQuestion => TransitionResult::ignored(state),
        },

        Event::WeatherReady(report) => show_weather(&report),

        // Режим при ошибке не меняется
        Event::WeatherFailed(failure) => {
            let message = match failure {
                LookupFailure::NotFound => texts::CITY_NOT_FOUND,
                LookupFailure::Other => texts::GENERIC_FAILURE,
            };
            TransitionResult::ignored(state)
                .with_effect(Effect::buttons(message, texts::try_again_keyboard()))
        }
    }
}

fn with_mode(state: &UserState, mode: Mode) -> UserState {
    UserState {
        mode,
        ..state.clone()
    }
}

fn show_city_menu(state: &UserState) -> TransitionResult {
    TransitionResult::new(with_mode(state, Mode::CityChoice))
        .with_effect(Effect::buttons(texts::CHOOSE_CITY, texts::city_menu()))
}

fn answer_sun_question(state: &UserState, data: &str) -> TransitionResult {
    let mut result = TransitionResult::new(with_mode(state, Mode::CityChoice));
    if data == texts::YES_TOKEN {
        result = result.with_effect(Effect::text(texts::sun_message(
            &state.sunrise,
            &state.sunset,
        )));
    }
    result.with_effect(Effect::buttons(
        texts::NEW_REQUEST,
        texts::start_over_keyboard(),
    ))
}

/// Порядок важен: иконка, метрики, вопрос про рассвет
fn show_weather(report: &WeatherReport) -> TransitionResult {
    let new_state = UserState {
        mode: Mode::SunQuestion,
        sunrise: format_time(report.sunrise, report.timezone_offset),
        sunset: format_time(report.sunset, report.timezone_offset),
    };

    TransitionResult::new(new_state)
        .with_effect(Effect::photo(icon_url(&report.icon)))
        .with_effect(Effect::text(texts::weather_message(report)))
        .with_effect(Effect::buttons(
            texts::SUN_QUESTION,
            texts::sun_question_keyboard(),
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogue::effect::Outbound;
    use crate::models::Coordinates;

    fn state(mode: Mode) -> UserState {
        UserState {
            mode,
            ..UserState::default()
        }
    }

    fn click(data: &str) -> Event {
        Event::ButtonClick(data.to_string())
    }

    fn report() -> WeatherReport {
        WeatherReport {
            coordinates: Coordinates { lat: 55.75, lon: 37.61 },
            temperature: Some(-2.0),
            pressure_mmhg: 759,
            wind_speed: Some(5.5),
            icon: "13d".to_string(),
            sunrise: 3600 * 5,
            sunset: 3600 * 14 + 60 * 7,
            timezone_offset: 3 * 3600,
        }
    }

    fn menu_tokens(effect: &Effect) -> Vec<String> {
        match effect {
            Effect::Send(Outbound::TextWithButtons { keyboard, .. }) => {
                keyboard.buttons().map(|b| b.callback.clone()).collect()
            }
            other => panic!("expected keyboard, got {:?}", other),
        }
    }

    #[test]
    fn command_start_from_any_mode_shows_menu() {
        for mode in [Mode::Greeting, Mode::CityChoice, Mode::OtherCity, Mode::SunQuestion] {
            let result = transition(&state(mode), Event::CommandStart);
            assert_eq!(result.new_state.mode, Mode::CityChoice);
            assert_eq!(result.effects.len(), 1);
            assert_eq!(menu_tokens(&result.effects[0]).len(), 6);
        }
    }

    #[test]
    fn start_button_from_any_mode_shows_menu() {
        for mode in [Mode::Greeting, Mode::CityChoice, Mode::OtherCity, Mode::SunQuestion] {
            let result = transition(&state(mode), click("start"));
            assert_eq!(result.new_state.mode, Mode::CityChoice);
            assert_eq!(
                menu_tokens(&result.effects[0]),
                vec!["Moscow", "Cape Town", "New York", "Shanghai", "other", "start"]
            );
        }
    }

    #[test]
    fn other_button_asks_for_city_name() {
        let result = transition(&state(Mode::CityChoice), click("other"));
        assert_eq!(result.new_state.mode, Mode::OtherCity);
        assert_eq!(result.effects, vec![Effect::text(texts::ENTER_CITY)]);
    }

    #[test]
    fn city_button_requests_weather_without_changing_mode() {
        let result = transition(&state(Mode::CityChoice), click("Moscow"));
        assert_eq!(result.new_state.mode, Mode::CityChoice);
        assert_eq!(
            result.effects,
            vec![Effect::FetchWeather { city: "Moscow".to_string() }]
        );
    }

    #[test]
    fn stale_buttons_in_city_choice_are_ignored() {
        let result = transition(&state(Mode::CityChoice), click("yes"));
        assert_eq!(result.new_state.mode, Mode::CityChoice);
        assert!(result.effects.is_empty());
    }

    #[test]
    fn text_in_other_city_is_trimmed() {
        let result = transition(
            &state(Mode::OtherCity),
            Event::TextMessage("  Paris \n".to_string()),
        );
        assert_eq!(
            result.effects,
            vec![Effect::FetchWeather { city: "Paris".to_string() }]
        );
        assert_eq!(result.new_state.mode, Mode::OtherCity);
    }

    #[test]
    fn text_outside_other_city_is_ignored() {
        for mode in [Mode::Greeting, Mode::CityChoice, Mode::SunQuestion] {
            let result = transition(&state(mode), Event::TextMessage("Paris".to_string()));
            assert_eq!(result.new_state, state(mode));
            assert!(result.effects.is_empty());
        }
    }

    #[test]
    fn buttons_in_other_city_and_greeting_are_ignored() {
        for mode in [Mode::Greeting, Mode::OtherCity] {
            let result = transition(&state(mode), click("Moscow"));
            assert_eq!(result.new_state.mode, mode);
            assert!(result.effects.is_empty());
        }
    }

    #[test]
    fn weather_ready_renders_in_order_and_stores_sun_times() {
        let result = transition(&state(Mode::CityChoice), Event::WeatherReady(report()));

        assert_eq!(result.new_state.mode, Mode::SunQuestion);
        assert_eq!(result.new_state.sunrise, "08:00");
        assert_eq!(result.new_state.sunset, "17:07");

        assert_eq!(result.effects.len(), 3);
        assert_eq!(
            result.effects[0],
            Effect::photo("http://openweathermap.org/img/wn/13d@4x.png")
        );
        assert!(matches!(&result.effects[1], Effect::Send(Outbound::Text(t)) if t.contains("759")));
        assert_eq!(menu_tokens(&result.effects[2]), vec!["yes", "no", "start"]);
    }

    #[test]
    fn not_found_keeps_mode_and_offers_retry() {
        for mode in [Mode::CityChoice, Mode::OtherCity] {
            let result = transition(&state(mode), Event::WeatherFailed(LookupFailure::NotFound));
            assert_eq!(result.new_state.mode, mode);
            match &result.effects[..] {
                [Effect::Send(Outbound::TextWithButtons { text, keyboard })] => {
                    assert!(text.contains("не найден"));
                    assert_eq!(keyboard.buttons().count(), 1);
                    assert_eq!(keyboard.rows[0][0].callback, "start");
                }
                other => panic!("unexpected effects {:?}", other),
            }
        }
    }

    #[test]
    fn other_failure_uses_generic_message() {
        let result = transition(&state(Mode::OtherCity), Event::WeatherFailed(LookupFailure::Other));
        assert_eq!(result.new_state.mode, Mode::OtherCity);
        assert!(matches!(
            &result.effects[0],
            Effect::Send(Outbound::TextWithButtons { text, .. }) if text == texts::GENERIC_FAILURE
        ));
    }

    #[test]
    fn yes_shows_sun_times_then_new_request_prompt() {
        let current = UserState {
            mode: Mode::SunQuestion,
            sunrise: "06:41".to_string(),
            sunset: "19:03".to_string(),
        };
        let result = transition(&current, click("yes"));

        assert_eq!(result.new_state.mode, Mode::CityChoice);
        assert_eq!(result.effects.len(), 2);
        assert!(matches!(
            &result.effects[0],
            Effect::Send(Outbound::Text(t)) if t.contains("06:41") && t.contains("19:03")
        ));
        assert_eq!(menu_tokens(&result.effects[1]), vec!["start"]);
    }

    #[test]
    fn no_skips_sun_times() {
        let result = transition(&state(Mode::SunQuestion), click("no"));
        assert_eq!(result.new_state.mode, Mode::CityChoice);
        assert_eq!(result.effects.len(), 1);
        assert_eq!(menu_tokens(&result.effects[0]), vec!["start"]);
    }
}
