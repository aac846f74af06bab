//! In-memory booking store
//!
//! Vec-backed store guarded by a single `RwLock`; insertion order is
//! creation order. Good enough for one restaurant's booking volume, and
//! the write lock makes `insert_if_below` naturally atomic.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use parking_lot::RwLock;
use shared::models::{Booking, BookingStatus};

use super::{BookingStore, InsertOutcome, NewBooking, StoreResult};

#[derive(Default)]
pub struct MemoryStore {
    bookings: RwLock<Vec<Booking>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingStore for MemoryStore {
    async fn count_active(&self, date: NaiveDate, time: &str) -> StoreResult<usize> {
        let bookings = self.bookings.read();
        Ok(bookings
            .iter()
            .filter(|b| b.booking_date == date && b.booking_time == time && b.status.is_active())
            .count())
    }

    async fn insert_if_below(
        &self,
        new: NewBooking,
        capacity: usize,
    ) -> StoreResult<InsertOutcome> {
        let mut bookings = self.bookings.write();

        if bookings.iter().any(|b| b.booking_id == new.booking_id) {
            return Ok(InsertOutcome::DuplicateId);
        }

        let active = bookings
            .iter()
            .filter(|b| {
                b.booking_date == new.booking_date
                    && b.booking_time == new.booking_time
                    && b.status.is_active()
            })
            .count();
        if active >= capacity {
            return Ok(InsertOutcome::SlotFull);
        }

        let booking = Booking {
            booking_id: new.booking_id,
            customer_name: new.customer_name,
            phone_number: new.phone_number,
            email: new.email,
            number_of_guests: new.number_of_guests,
            booking_date: new.booking_date,
            booking_time: new.booking_time,
            cuisine_preference: new.cuisine_preference,
            seating_preference: new.seating_preference,
            special_requests: new.special_requests,
            weather_info: new.weather_info,
            table_number: (active + 1) as u32,
            status: BookingStatus::Confirmed,
            created_at: Utc::now(),
        };
        bookings.push(booking.clone());
        Ok(InsertOutcome::Created(booking))
    }

    async fn find_by_booking_id(&self, booking_id: &str) -> StoreResult<Option<Booking>> {
        let bookings = self.bookings.read();
        Ok(bookings.iter().find(|b| b.booking_id == booking_id).cloned())
    }

    async fn find_all(&self) -> StoreResult<Vec<Booking>> {
        let bookings = self.bookings.read();
        Ok(bookings.iter().rev().cloned().collect())
    }

    async fn find_by_date(&self, date: NaiveDate) -> StoreResult<Vec<Booking>> {
        let bookings = self.bookings.read();
        let mut result: Vec<Booking> = bookings
            .iter()
            .filter(|b| b.booking_date == date)
            .cloned()
            .collect();
        result.sort_by(|a, b| a.booking_time.cmp(&b.booking_time));
        Ok(result)
    }

    async fn set_status(
        &self,
        booking_id: &str,
        status: BookingStatus,
    ) -> StoreResult<Option<Booking>> {
        let mut bookings = self.bookings.write();
        match bookings.iter_mut().find(|b| b.booking_id == booking_id) {
            Some(booking) => {
                booking.status = status;
                Ok(Some(booking.clone()))
            }
            None => Ok(None),
        }
    }
}
