//! Booking store
//!
//! Persistence is an abstract collaborator: [`BookingStore`] exposes the
//! find/insert/update operations the service layer needs, and
//! [`MemoryStore`] is the in-process implementation. Records are never
//! deleted; cancellation flips the status.
//!
//! The capacity check and insert are a single atomic operation
//! ([`BookingStore::insert_if_below`]) so two concurrent creates for the
//! same slot can never both slip under the table limit.

mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use chrono::NaiveDate;
use shared::models::{Booking, BookingStatus, Cuisine, Seating, WeatherInfo};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage failure: {0}")]
    Storage(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Booking fields supplied by the caller; the store assigns the table
/// number and creation timestamp inside its critical section.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub booking_id: String,
    pub customer_name: String,
    pub phone_number: String,
    pub email: String,
    pub number_of_guests: u32,
    pub booking_date: NaiveDate,
    pub booking_time: String,
    pub cuisine_preference: Cuisine,
    pub seating_preference: Seating,
    pub special_requests: String,
    pub weather_info: Option<WeatherInfo>,
}

/// Result of the conditional insert
#[derive(Debug)]
pub enum InsertOutcome {
    /// Persisted; carries the record with table number and timestamp set
    Created(Booking),
    /// The slot already holds `capacity` active bookings
    SlotFull,
    /// The booking id is already taken; caller should retry with a new id
    DuplicateId,
}

#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Count bookings at (date, time) with status != cancelled
    async fn count_active(&self, date: NaiveDate, time: &str) -> StoreResult<usize>;

    /// Atomically insert `new` if the slot holds fewer than `capacity`
    /// active bookings; assigns `table_number = active count + 1`.
    async fn insert_if_below(&self, new: NewBooking, capacity: usize)
    -> StoreResult<InsertOutcome>;

    async fn find_by_booking_id(&self, booking_id: &str) -> StoreResult<Option<Booking>>;

    /// All bookings, newest first
    async fn find_all(&self) -> StoreResult<Vec<Booking>>;

    /// Bookings on one day, ascending by time
    async fn find_by_date(&self, date: NaiveDate) -> StoreResult<Vec<Booking>>;

    /// Update the status of a booking; `None` when the id is unknown
    async fn set_status(
        &self,
        booking_id: &str,
        status: BookingStatus,
    ) -> StoreResult<Option<Booking>>;
}
