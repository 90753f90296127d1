//! Weather lookup port.

use async_trait::async_trait;

/// Supplies today's weather for new todos.
#[async_trait]
pub trait WeatherClient: Send + Sync {
    async fn today_weather(&self) -> Result<String, WeatherError>;
}

#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Failed to fetch weather data: {0}")]
    Fetch(String),

    #[error("No weather data for {0}")]
    MissingDate(String),
}
