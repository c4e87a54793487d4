use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct GeoResponseItem {
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct CurrentWeatherResponse {
    #[serde(default)]
    pub weather: Vec<WeatherCondition>,
    #[serde(default)]
    pub main: Option<MainBlock>,
    #[serde(default)]
    pub wind: Option<WindBlock>,
    #[serde(default)]
    pub sys: Option<SysBlock>,
    #[serde(default)]
    pub timezone: Option<i64>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct WeatherCondition {
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct MainBlock {
    #[serde(default)]
    pub temp: Option<f64>,
    /// гПа
    #[serde(default)]
    pub pressure: Option<f64>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct WindBlock {
    #[serde(default)]
    pub speed: Option<f64>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct SysBlock {
    #[serde(default)]
    pub sunrise: Option<i64>,
    #[serde(default)]
    pub sunset: Option<i64>,
}
