//! Booking Model

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::weather::WeatherInfo;

/// Booking lifecycle status
///
/// A booking is never physically deleted; cancellation is a soft status
/// update. The only transition is `confirmed -> cancelled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Pending,
    Cancelled,
}

impl BookingStatus {
    /// Active bookings count against table capacity
    pub fn is_active(&self) -> bool {
        !matches!(self, BookingStatus::Cancelled)
    }
}

/// Seating preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seating {
    Indoor,
    Outdoor,
}

impl FromStr for Seating {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "indoor" => Ok(Seating::Indoor),
            "outdoor" => Ok(Seating::Outdoor),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Seating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seating::Indoor => write!(f, "indoor"),
            Seating::Outdoor => write!(f, "outdoor"),
        }
    }
}

/// Fixed cuisine set offered by the restaurant
///
/// Serialized capitalized ("Italian", "Thai", ...), which is also the
/// stored form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cuisine {
    Italian,
    Chinese,
    Indian,
    Mexican,
    Japanese,
    American,
    Thai,
    Mediterranean,
}

impl Cuisine {
    pub const ALL: [Cuisine; 8] = [
        Cuisine::Italian,
        Cuisine::Chinese,
        Cuisine::Indian,
        Cuisine::Mexican,
        Cuisine::Japanese,
        Cuisine::American,
        Cuisine::Thai,
        Cuisine::Mediterranean,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Cuisine::Italian => "Italian",
            Cuisine::Chinese => "Chinese",
            Cuisine::Indian => "Indian",
            Cuisine::Mexican => "Mexican",
            Cuisine::Japanese => "Japanese",
            Cuisine::American => "American",
            Cuisine::Thai => "Thai",
            Cuisine::Mediterranean => "Mediterranean",
        }
    }
}

impl FromStr for Cuisine {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cuisine::ALL
            .iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or(())
    }
}

impl fmt::Display for Cuisine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted booking record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Human-facing booking code, format "VAIU-####"
    pub booking_id: String,
    pub customer_name: String,
    pub phone_number: String,
    pub email: String,
    pub number_of_guests: u32,
    pub booking_date: NaiveDate,
    /// 24h "HH:MM" slot on the booking grid
    pub booking_time: String,
    pub cuisine_preference: Cuisine,
    pub seating_preference: Seating,
    #[serde(default)]
    pub special_requests: String,
    /// Forecast snapshot attached at creation time
    #[serde(default)]
    pub weather_info: Option<WeatherInfo>,
    /// 1-based table assignment within the slot
    pub table_number: u32,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}
