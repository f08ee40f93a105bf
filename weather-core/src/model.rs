use serde::{Deserialize, Serialize};

use crate::translate::translate;

#[derive(Debug, Clone)]
pub struct WeatherRequest {
    pub city: String,
}

impl WeatherRequest {
    pub fn new(city: impl Into<String>) -> Self {
        Self { city: city.into() }
    }
}

/// Current conditions as reported upstream, untranslated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub city: String,
    pub temperature_c: f64,
    pub main: String,
    pub description: String,
}

/// Body returned by `/search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub city: String,
    pub temperature: i64,
    pub main: String,
    pub description: String,
}

impl From<&CurrentWeather> for SearchResponse {
    fn from(weather: &CurrentWeather) -> Self {
        Self {
            city: weather.city.clone(),
            // Truncates toward zero.
            temperature: weather.temperature_c as i64,
            main: translate(&weather.main),
            description: translate(&weather.description),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weather(temperature_c: f64) -> CurrentWeather {
        CurrentWeather {
            city: "Lisboa".to_string(),
            temperature_c,
            main: "Clouds".to_string(),
            description: "overcast clouds".to_string(),
        }
    }

    #[test]
    fn search_response_translates_both_conditions() {
        let resp = SearchResponse::from(&weather(21.7));

        assert_eq!(resp.city, "Lisboa");
        assert_eq!(resp.main, "Nuvens");
        assert_eq!(resp.description, "Nuvens");
    }

    #[test]
    fn temperature_truncates_toward_zero() {
        assert_eq!(SearchResponse::from(&weather(21.7)).temperature, 21);
        assert_eq!(SearchResponse::from(&weather(-3.9)).temperature, -3);
        assert_eq!(SearchResponse::from(&weather(0.4)).temperature, 0);
    }

    #[test]
    fn search_response_json_field_names() {
        let json = serde_json::to_value(SearchResponse::from(&weather(10.0))).unwrap();

        assert_eq!(json["city"], "Lisboa");
        assert_eq!(json["temperature"], 10);
        assert_eq!(json["main"], "Nuvens");
        assert_eq!(json["description"], "Nuvens");
    }
}
