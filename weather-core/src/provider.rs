use crate::{
    Config,
    model::{CurrentWeather, WeatherRequest},
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::fmt::Debug;

pub mod openweather;

/// Failures talking to the upstream weather API.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("{0}")]
    Request(#[source] reqwest::Error),

    #[error("falha ao ler a resposta: {0}")]
    Body(#[source] reqwest::Error),

    #[error("Não foi possível obter dados da cidade. Código de status: {}", .status.as_u16())]
    Status { status: StatusCode, body: String },

    #[error("resposta inválida: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("resposta sem condição do tempo")]
    MissingCondition,
}

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(
        &self,
        request: &WeatherRequest,
    ) -> Result<CurrentWeather, ProviderError>;
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.api_key()?;
    let ow = &config.openweather;

    Ok(Box::new(OpenWeatherProvider::with_base_url(
        api_key.to_owned(),
        ow.base_url.clone(),
        ow.units.clone(),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_from_config_errors_when_missing_api_key() {
        let cfg = Config::default();
        let err = provider_from_config(&cfg).unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("No OpenWeather API key configured"));
        assert!(msg.contains("Hint: run `weather-server configure`"));
    }

    #[test]
    fn provider_from_config_works_when_configured() {
        let mut cfg = Config::default();
        cfg.set_api_key("KEY".to_string());

        assert!(provider_from_config(&cfg).is_ok());
    }

    #[test]
    fn status_error_message_carries_code() {
        let err = ProviderError::Status { status: StatusCode::NOT_FOUND, body: String::new() };

        assert_eq!(
            err.to_string(),
            "Não foi possível obter dados da cidade. Código de status: 404"
        );
    }
}
