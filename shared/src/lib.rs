//! Shared types for the table-booking service
//!
//! Domain models, request DTOs and response envelopes used by both the
//! booking server and any API client.

pub mod models;
pub mod request;
pub mod response;

// Re-exports
pub use models::{Booking, BookingStatus, Cuisine, Seating, WeatherInfo};
pub use request::BookingPayload;
pub use response::{
    BookingListResponse, BookingResponse, BookingsPerDay, CuisinePopularity, DataResponse,
};
