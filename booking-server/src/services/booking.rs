//! Booking record service
//!
//! Create/read/cancel operations over the booking store, including the
//! capacity-checked create with alternative-slot suggestions and the
//! analytics aggregations.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use rand::Rng;
use shared::models::{Booking, BookingStatus};
use shared::request::BookingPayload;
use shared::response::{BookingsPerDay, CuisinePopularity};
use validator::Validate;

use crate::db::{BookingStore, InsertOutcome, NewBooking};
use crate::services::availability;
use crate::services::mailer::Mailer;
use crate::services::weather::WeatherService;
use crate::utils::{AppError, AppResult};

/// Retry budget for booking-id collisions. The id space is 10k codes, so
/// hitting this means the store is nearly saturated with live records.
const ID_ATTEMPTS: usize = 8;

const FULLY_BOOKED_MESSAGE: &str =
    "All tables are already booked for this date and time. Please choose another time.";

fn generate_booking_id() -> String {
    let num: u32 = rand::thread_rng().gen_range(0..10_000);
    format!("VAIU-{:04}", num)
}

pub struct BookingService {
    store: Arc<dyn BookingStore>,
    weather: Arc<WeatherService>,
    mailer: Mailer,
    capacity: usize,
}

impl BookingService {
    pub fn new(
        store: Arc<dyn BookingStore>,
        weather: Arc<WeatherService>,
        mailer: Mailer,
        capacity: usize,
    ) -> Self {
        Self {
            store,
            weather,
            mailer,
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Create a booking.
    ///
    /// Re-validates the payload, then runs the capacity check and insert
    /// as one atomic store operation. A full slot yields
    /// [`AppError::FullyBooked`] with up to three open alternatives; a
    /// booking-id collision is retried with a fresh code. The
    /// confirmation email is dispatched fire-and-forget.
    pub async fn create(&self, payload: BookingPayload) -> AppResult<Booking> {
        payload.validate()?;

        let (Some(date), Some(time)) = (payload.booking_date, payload.booking_time.clone()) else {
            return Err(AppError::Validation(
                "bookingDate and bookingTime are required".into(),
            ));
        };
        if NaiveTime::parse_from_str(&time, "%H:%M").is_err() {
            return Err(AppError::Validation(format!(
                "bookingTime '{}' is not a valid HH:MM time",
                time
            )));
        }
        if payload
            .phone_number
            .chars()
            .filter(|c| c.is_ascii_digit())
            .count()
            < 10
        {
            return Err(AppError::Validation(
                "phoneNumber must contain at least 10 digits".into(),
            ));
        }

        // Best-effort; a degraded lookup still attaches its fallback text.
        let weather_info = self.weather.forecast(Some(date), None).await;

        for _ in 0..ID_ATTEMPTS {
            let new = NewBooking {
                booking_id: generate_booking_id(),
                customer_name: payload.customer_name.clone(),
                phone_number: payload.phone_number.clone(),
                email: payload.email.clone(),
                number_of_guests: payload.number_of_guests,
                booking_date: date,
                booking_time: time.clone(),
                cuisine_preference: payload.cuisine_preference,
                seating_preference: payload.seating_preference,
                special_requests: payload.special_requests.clone(),
                weather_info: Some(weather_info.clone()),
            };

            match self.store.insert_if_below(new, self.capacity).await? {
                InsertOutcome::Created(booking) => {
                    tracing::info!(
                        booking_id = %booking.booking_id,
                        date = %booking.booking_date,
                        time = %booking.booking_time,
                        table = booking.table_number,
                        "Booking created"
                    );
                    self.mailer.send_confirmation_detached(booking.clone());
                    return Ok(booking);
                }
                InsertOutcome::SlotFull => {
                    let suggestions = availability::find_alternatives(
                        self.store.as_ref(),
                        date,
                        &time,
                        self.capacity,
                    )
                    .await?;
                    return Err(AppError::FullyBooked {
                        message: FULLY_BOOKED_MESSAGE.to_string(),
                        suggestions,
                    });
                }
                InsertOutcome::DuplicateId => continue,
            }
        }

        Err(AppError::Internal(
            "could not allocate a unique booking id".into(),
        ))
    }

    pub async fn get_by_id(&self, booking_id: &str) -> AppResult<Booking> {
        self.store
            .find_by_booking_id(booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking".into()))
    }

    /// Soft-cancel. Re-cancelling an already cancelled booking re-applies
    /// the status without error; an unknown id is NotFound.
    pub async fn cancel(&self, booking_id: &str) -> AppResult<Booking> {
        self.store
            .set_status(booking_id, BookingStatus::Cancelled)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking".into()))
    }

    pub async fn confirm(&self, booking_id: &str) -> AppResult<Booking> {
        self.store
            .set_status(booking_id, BookingStatus::Confirmed)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking".into()))
    }

    /// All bookings, newest first
    pub async fn list_all(&self) -> AppResult<Vec<Booking>> {
        Ok(self.store.find_all().await?)
    }

    /// Bookings for one day, ascending by time
    pub async fn list_by_date(&self, date: NaiveDate) -> AppResult<Vec<Booking>> {
        Ok(self.store.find_by_date(date).await?)
    }

    /// Active bookings per day, ascending by date
    pub async fn bookings_per_day(&self) -> AppResult<Vec<BookingsPerDay>> {
        let mut per_day: BTreeMap<NaiveDate, u64> = BTreeMap::new();
        for booking in self.store.find_all().await? {
            if booking.status.is_active() {
                *per_day.entry(booking.booking_date).or_default() += 1;
            }
        }
        Ok(per_day
            .into_iter()
            .map(|(date, count)| BookingsPerDay { date, count })
            .collect())
    }

    /// Active bookings per cuisine, descending by count
    pub async fn cuisine_popularity(&self) -> AppResult<Vec<CuisinePopularity>> {
        let mut per_cuisine: HashMap<String, u64> = HashMap::new();
        for booking in self.store.find_all().await? {
            if booking.status.is_active() {
                *per_cuisine
                    .entry(booking.cuisine_preference.to_string())
                    .or_default() += 1;
            }
        }
        let mut rows: Vec<CuisinePopularity> = per_cuisine
            .into_iter()
            .map(|(cuisine, count)| CuisinePopularity { cuisine, count })
            .collect();
        rows.sort_by(|a, b| b.count.cmp(&a.count).then(a.cuisine.cmp(&b.cuisine)));
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_ids_keep_the_vaiu_shape() {
        for _ in 0..32 {
            let id = generate_booking_id();
            assert_eq!(id.len(), 9);
            assert!(id.starts_with("VAIU-"));
            assert!(id[5..].chars().all(|c| c.is_ascii_digit()));
        }
    }
}
