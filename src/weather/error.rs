use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeoError {
    #[error("city not found")]
    NotFound,
    #[error("geocoding provider error: {0}")]
    Provider(String),
}

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("weather provider error: {0}")]
    Provider(String),
}

/// Любая ошибка цепочки геокодинг → погода
#[derive(Debug, Error)]
pub enum LookupError {
    #[error(transparent)]
    Geo(#[from] GeoError),
    #[error(transparent)]
    Weather(#[from] WeatherError),
}

impl LookupError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::Geo(GeoError::NotFound))
    }
}
