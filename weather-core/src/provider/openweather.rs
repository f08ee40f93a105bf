use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::model::{CurrentWeather, WeatherRequest};

use super::{ProviderError, WeatherProvider};

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    units: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string(), "metric".to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String, units: String) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            units,
            http: Client::new(),
        }
    }

    async fn fetch_current(&self, city: &str) -> Result<CurrentWeather, ProviderError> {
        let url = format!("{}/data/2.5/weather", self.base_url);
        tracing::debug!(%city, "requesting OpenWeather current weather");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("units", self.units.as_str()),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(ProviderError::Request)?;

        let status = res.status();
        let body = res.text().await.map_err(ProviderError::Body)?;

        if !status.is_success() {
            let body = truncate_body(&body);
            tracing::warn!(%city, %status, %body, "OpenWeather request failed");
            return Err(ProviderError::Status { status, body });
        }

        let parsed: OwCurrentResponse = serde_json::from_str(&body)?;

        let weather = parsed.weather.into_iter().next().ok_or(ProviderError::MissingCondition)?;

        Ok(CurrentWeather {
            city: parsed.name,
            temperature_c: parsed.main.temp,
            main: weather.main,
            description: weather.description,
        })
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(
        &self,
        request: &WeatherRequest,
    ) -> Result<CurrentWeather, ProviderError> {
        self.fetch_current(&request.city).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
