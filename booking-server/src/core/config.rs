//! Server configuration
//!
//! All settings come from the environment with sensible defaults:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | PORT | 5001 | HTTP port |
//! | TOTAL_TABLES | 10 | tables per (date, time) slot |
//! | DEFAULT_LOCATION | Delhi,IN | weather lookup location |
//! | OPENWEATHER_API_KEY | unset | weather disabled without it |
//! | SMTP_HOST / SMTP_PORT / SMTP_USER / SMTP_PASS / SMTP_FROM | unset | mail disabled unless host+user+pass set |
//! | ENVIRONMENT | development | runtime environment label |

use crate::services::SmtpSettings;

#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// Tables available per booking slot
    pub total_tables: usize,
    /// Fallback location for weather lookups
    pub default_location: String,
    /// OpenWeather API key; `None` disables forecasts
    pub openweather_api_key: Option<String>,
    /// SMTP settings; `None` disables confirmation email
    pub smtp: Option<SmtpSettings>,
    /// development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5001),
            total_tables: std::env::var("TOTAL_TABLES")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(10),
            default_location: std::env::var("DEFAULT_LOCATION")
                .unwrap_or_else(|_| "Delhi,IN".into()),
            openweather_api_key: std::env::var("OPENWEATHER_API_KEY")
                .ok()
                .filter(|k| !k.is_empty()),
            smtp: smtp_from_env(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_port: 5001,
            total_tables: 10,
            default_location: "Delhi,IN".into(),
            openweather_api_key: None,
            smtp: None,
            environment: "development".into(),
        }
    }
}

/// Mail needs host, user and password; anything less disables it
fn smtp_from_env() -> Option<SmtpSettings> {
    let host = std::env::var("SMTP_HOST").ok()?;
    let username = std::env::var("SMTP_USER").ok()?;
    let password = std::env::var("SMTP_PASS").ok()?;
    Some(SmtpSettings {
        host,
        port: std::env::var("SMTP_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(587),
        username,
        password,
        from: std::env::var("SMTP_FROM").unwrap_or_else(|_| "no-reply@vaiu.ai".into()),
    })
}
