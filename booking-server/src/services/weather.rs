//! Weather collaborator
//!
//! Wraps the OpenWeather forecast API and turns the forecast into a
//! seating suggestion. This collaborator is best-effort by contract: it
//! always returns a [`WeatherInfo`], degrading to a fallback suggestion
//! when the API key is missing, the request fails, or the response is
//! not in the expected shape.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use shared::models::WeatherInfo;

const FORECAST_URL: &str = "https://api.openweathermap.org/data/2.5/forecast";

/// Seam the dialogue engine uses for seating suggestions at the Time
/// step; lets tests stub the forecast out.
#[async_trait]
pub trait SeatingAdvisor: Send + Sync {
    async fn seating_suggestion(&self, date: NaiveDate, location: Option<&str>) -> WeatherInfo;
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    list: Vec<ForecastEntry>,
}

#[derive(Debug, Deserialize)]
struct ForecastEntry {
    main: ForecastMain,
    weather: Vec<ForecastCondition>,
}

#[derive(Debug, Deserialize)]
struct ForecastMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct ForecastCondition {
    main: String,
    description: String,
}

#[derive(Clone)]
pub struct WeatherService {
    client: reqwest::Client,
    api_key: Option<String>,
    default_location: String,
}

impl WeatherService {
    pub fn new(api_key: Option<String>, default_location: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            default_location: default_location.into(),
        }
    }

    /// Fetch the forecast and derive a seating suggestion.
    ///
    /// Uses the first forecast block rather than resolving the exact
    /// date-time; close enough for a seating hint.
    pub async fn forecast(&self, _date: Option<NaiveDate>, location: Option<&str>) -> WeatherInfo {
        let Some(api_key) = &self.api_key else {
            return WeatherInfo::unavailable(
                "Weather service is not configured, so I cannot tailor seating based on forecast.",
                "No weather data",
            );
        };

        let location = location.unwrap_or(&self.default_location);
        let resp = self
            .client
            .get(FORECAST_URL)
            .query(&[("q", location), ("appid", api_key), ("units", "metric")])
            .send()
            .await;

        let data: ForecastResponse = match resp {
            Ok(r) => match r.json().await {
                Ok(d) => d,
                Err(e) => {
                    tracing::warn!(error = %e, "Weather response did not parse");
                    return Self::unreachable_fallback();
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, "Weather API request failed");
                return Self::unreachable_fallback();
            }
        };

        let Some(forecast) = data.list.first() else {
            return WeatherInfo::unavailable("I could not find a valid forecast.", "No forecast list");
        };
        let Some(condition) = forecast.weather.first() else {
            return WeatherInfo::unavailable("I could not find a valid forecast.", "No forecast list");
        };

        let kind = condition.main.to_lowercase();
        let temp = forecast.main.temp;
        let suggestion = if kind.contains("rain") || kind.contains("storm") {
            "It might rain on that day. I would recommend our cozy indoor seating."
        } else if kind.contains("clear") || kind.contains("sun") {
            "The weather looks great. Outdoor seating would be perfect if you like fresh air."
        } else if temp >= 35.0 {
            "It may be quite hot. I suggest comfortable indoor seating with air conditioning."
        } else {
            "The weather seems moderate, you can choose either indoor or outdoor seating."
        };

        WeatherInfo {
            success: true,
            suggestion: suggestion.to_string(),
            description: format!("{}, around {:.0}°C", condition.description, temp.round()),
        }
    }

    fn unreachable_fallback() -> WeatherInfo {
        WeatherInfo::unavailable(
            "I could not reach the weather service. You can still choose your seating preference.",
            "Weather service error",
        )
    }
}

#[async_trait]
impl SeatingAdvisor for WeatherService {
    async fn seating_suggestion(&self, date: NaiveDate, location: Option<&str>) -> WeatherInfo {
        self.forecast(Some(date), location).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_api_key_degrades_without_a_request() {
        let service = WeatherService::new(None, "Delhi,IN");
        let info = service.forecast(None, None).await;
        assert!(!info.success);
        assert!(info.suggestion.contains("not configured"));
    }
}
