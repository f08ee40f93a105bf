//! Core library for the `weather-server` proxy.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather provider behind a `WeatherProvider` trait
//! - Shared domain models (requests, responses)
//! - Fuzzy translation of condition text into Portuguese
//!
//! It is used by `weather-server`, but can also be reused by other binaries or services.

pub mod config;
pub mod model;
pub mod provider;
pub mod translate;

pub use config::{Config, ProviderConfig, ServerConfig};
pub use model::{CurrentWeather, SearchResponse, WeatherRequest};
pub use provider::{ProviderError, WeatherProvider, provider_from_config};
pub use translate::{ConditionLabel, PORTUGUESE_LABELS, translate};
