//! Weather lookup clients.

use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use serde::Deserialize;

use taskdesk_core::ports::{WeatherClient, WeatherError};

pub const DEFAULT_WEATHER_URL: &str = "https://f-api.github.io/f-api/weather.json";

/// One entry of the weather feed; `date` is formatted `MM-dd`.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherEntry {
    pub date: String,
    pub weather: String,
}

/// Pick the entry for `today` out of the feed.
pub fn weather_for(entries: &[WeatherEntry], today: NaiveDate) -> Result<String, WeatherError> {
    if entries.is_empty() {
        return Err(WeatherError::Fetch("empty weather feed".to_string()));
    }

    let key = today.format("%m-%d").to_string();
    entries
        .iter()
        .find(|entry| entry.date == key)
        .map(|entry| entry.weather.clone())
        .ok_or(WeatherError::MissingDate(key))
}

/// Reads the daily weather feed over HTTP.
#[cfg(feature = "weather")]
pub struct HttpWeatherClient {
    url: String,
    client: reqwest::Client,
}

#[cfg(feature = "weather")]
impl HttpWeatherClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[cfg(feature = "weather")]
#[async_trait]
impl WeatherClient for HttpWeatherClient {
    async fn today_weather(&self) -> Result<String, WeatherError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| WeatherError::Fetch(e.to_string()))?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "Weather feed returned an error status");
            return Err(WeatherError::Fetch(format!("status {}", response.status())));
        }

        let entries: Vec<WeatherEntry> = response
            .json()
            .await
            .map_err(|e| WeatherError::Fetch(e.to_string()))?;

        weather_for(&entries, Local::now().date_naive())
    }
}

/// Always reports the same weather. Used when no feed is reachable and in tests.
#[derive(Debug, Clone)]
pub struct FixedWeatherClient(pub String);

#[async_trait]
impl WeatherClient for FixedWeatherClient {
    async fn today_weather(&self) -> Result<String, WeatherError> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(date: &str, weather: &str) -> WeatherEntry {
        WeatherEntry {
            date: date.to_string(),
            weather: weather.to_string(),
        }
    }

    #[test]
    fn test_weather_for_picks_todays_entry() {
        let entries = vec![entry("10-18", "Rainy"), entry("10-19", "Sunny")];
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();

        assert_eq!(weather_for(&entries, today).unwrap(), "Sunny");
    }

    #[test]
    fn test_weather_for_missing_date() {
        let entries = vec![entry("01-01", "Snowy")];
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();

        assert!(matches!(
            weather_for(&entries, today),
            Err(WeatherError::MissingDate(date)) if date == "10-19"
        ));
    }

    #[test]
    fn test_weather_for_empty_feed() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert!(matches!(
            weather_for(&[], today),
            Err(WeatherError::Fetch(_))
        ));
    }
}
