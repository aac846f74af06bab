//! API Response envelopes
//!
//! All successful API responses carry `success: true` plus a payload
//! field, matching the wire format the frontend expects.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Booking;

/// Single-booking response: `{ "success": true, "booking": { ... } }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingResponse {
    pub success: bool,
    pub booking: Booking,
}

impl BookingResponse {
    pub fn ok(booking: Booking) -> Self {
        Self {
            success: true,
            booking,
        }
    }
}

/// Booking-list response: `{ "success": true, "bookings": [ ... ] }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingListResponse {
    pub success: bool,
    pub bookings: Vec<Booking>,
}

impl BookingListResponse {
    pub fn ok(bookings: Vec<Booking>) -> Self {
        Self {
            success: true,
            bookings,
        }
    }
}

/// Generic data response: `{ "success": true, "data": ... }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Analytics row: active bookings per calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingsPerDay {
    pub date: NaiveDate,
    pub count: u64,
}

/// Analytics row: active bookings per cuisine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CuisinePopularity {
    pub cuisine: String,
    pub count: u64,
}
