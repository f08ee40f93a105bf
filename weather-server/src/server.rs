//! HTTP routes: the search page at `/` and the JSON lookup at `/search`.

use anyhow::Context;
use axum::{
    Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use std::{path::PathBuf, sync::Arc, time::Duration};
use tower_http::{services::ServeFile, timeout::TimeoutLayer, trace::TraceLayer};
use weather_core::{Config, ProviderError, SearchResponse, WeatherProvider, WeatherRequest};

/// Shared state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn WeatherProvider>,
    pub index_file: PathBuf,
}

/// Query params for `/search`
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub city: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Por favor, forneça uma cidade para pesquisar.")]
    MissingCity,

    #[error("Erro ao obter dados do OpenWeather: {0}")]
    Upstream(#[from] ProviderError),

    #[error("Erro ao formatar os dados de resposta.")]
    Encode(#[from] serde_json::Error),
}

impl SearchError {
    fn status(&self) -> StatusCode {
        match self {
            SearchError::MissingCity => StatusCode::BAD_REQUEST,
            SearchError::Upstream(_) | SearchError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        if let SearchError::Upstream(err) = &self {
            tracing::warn!(error = %err, "search failed upstream");
        }
        (self.status(), self.to_string()).into_response()
    }
}

/// GET /search?city=<name>
async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Response, SearchError> {
    let city = query.city.filter(|c| !c.is_empty()).ok_or(SearchError::MissingCity)?;

    let weather = state.provider.current_weather(&WeatherRequest::new(city)).await?;
    let body = to_pretty_json(&SearchResponse::from(&weather))?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// JSON with a 4-space indent and a trailing newline.
fn to_pretty_json<T: Serialize>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}

pub fn router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route_service("/", ServeFile::new(&state.index_file))
        .route("/search", get(search))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
        .with_state(state)
}

/// Bind `config.server.listen_addr` and serve until Ctrl+C.
pub async fn serve(config: &Config, provider: Arc<dyn WeatherProvider>) -> anyhow::Result<()> {
    let state = AppState { provider, index_file: config.server.index_file.clone() };
    let app = router(state, Duration::from_secs(config.server.request_timeout_secs));

    let listener = tokio::net::TcpListener::bind(&config.server.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.listen_addr))?;

    tracing::info!(
        addr = %listener.local_addr()?,
        index = %config.server.index_file.display(),
        "weather server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    tracing::info!("weather server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {e}");
        return;
    }
    tracing::info!("Received Ctrl+C, shutting down gracefully...");
}
