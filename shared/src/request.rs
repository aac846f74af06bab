//! Request DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{Cuisine, Seating};

/// Create-booking payload (POST /api/bookings body)
///
/// Date and time are optional at the wire level so the service can reply
/// with a proper validation error instead of a deserialization failure;
/// everything else is required by shape.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookingPayload {
    #[validate(length(min = 1, message = "customerName must not be empty"))]
    pub customer_name: String,
    #[validate(length(min = 10, message = "phoneNumber is too short"))]
    pub phone_number: String,
    #[validate(email(message = "email is not a valid address"))]
    pub email: String,
    #[validate(range(min = 1, max = 20, message = "numberOfGuests must be between 1 and 20"))]
    pub number_of_guests: u32,
    pub booking_date: Option<NaiveDate>,
    pub booking_time: Option<String>,
    pub cuisine_preference: Cuisine,
    pub seating_preference: Seating,
    #[serde(default)]
    pub special_requests: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> BookingPayload {
        BookingPayload {
            customer_name: "John Smith".into(),
            phone_number: "9876543210".into(),
            email: "john@example.com".into(),
            number_of_guests: 4,
            booking_date: Some(NaiveDate::from_ymd_opt(2026, 3, 25).unwrap()),
            booking_time: Some("19:30".into()),
            cuisine_preference: Cuisine::Italian,
            seating_preference: Seating::Indoor,
            special_requests: String::new(),
        }
    }

    #[test]
    fn valid_payload_passes() {
        assert!(payload().validate().is_ok());
    }

    #[test]
    fn bad_email_and_guest_count_fail() {
        let mut p = payload();
        p.email = "not-an-email".into();
        assert!(p.validate().is_err());

        let mut p = payload();
        p.number_of_guests = 21;
        assert!(p.validate().is_err());
    }
}
