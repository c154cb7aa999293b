//! Current weather in Tashkent, rendered as a short fact for the completion API.

pub const NO_TEMPERATURE_MESSAGE: &str = "Нет актуальных данных о температуре.";
pub const WEATHER_FAILED_MESSAGE: &str = "Не удалось получить погоду для Ташкента (ошибка запроса).";

/// Raw "current" block of a forecast response.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CurrentWeather {
    pub temperature: Option<f64>,
    pub weather_code: Option<i64>,
}

/// Maps a WMO weather code to a short Russian description.
///
/// Unknown or missing codes read as clear sky.
pub fn describe_weather_code(code: Option<i64>) -> &'static str {
    match code {
        Some(1..=3) => "переменная облачность",
        Some(51..=67) => "морось или небольшой дождь",
        Some(71..=77) => "снег",
        Some(80..=82) => "дождь",
        Some(95..=99) => "гроза",
        _ => "ясно",
    }
}

/// Renders the weather fact handed to the completion API as ground truth.
pub fn weather_fact(weather: &CurrentWeather) -> String {
    match weather.temperature {
        Some(temperature) => format!(
            "Ташкент: сейчас около {:.0} °C, {}.",
            temperature,
            describe_weather_code(weather.weather_code)
        ),
        None => NO_TEMPERATURE_MESSAGE.to_string(),
    }
}
