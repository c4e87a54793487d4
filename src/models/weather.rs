#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Нормализованный ответ провайдера, живет только на время одного запроса
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub coordinates: Coordinates,
    /// °C, `None` если провайдер не прислал значение
    pub temperature: Option<f64>,
    /// мм рт.ст., уже пересчитано из гПа
    pub pressure_mmhg: i64,
    /// м/с
    pub wind_speed: Option<f64>,
    pub icon: String,
    pub sunrise: i64,
    pub sunset: i64,
    pub timezone_offset: i64,
}
