//! Weather collaborator types

use serde::{Deserialize, Serialize};

/// Seating suggestion derived from the forecast
///
/// The weather collaborator never fails hard: on any lookup problem it
/// returns `success: false` with a fallback suggestion so callers can
/// degrade gracefully.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherInfo {
    pub success: bool,
    pub suggestion: String,
    pub description: String,
}

impl WeatherInfo {
    pub fn unavailable(suggestion: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            success: false,
            suggestion: suggestion.into(),
            description: description.into(),
        }
    }
}
