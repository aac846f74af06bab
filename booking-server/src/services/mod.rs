//! Service layer
//!
//! - [`availability`] - slot grid and alternative-slot search
//! - [`booking`] - booking record service
//! - [`weather`] - OpenWeather collaborator (seating suggestions)
//! - [`mailer`] - fire-and-forget confirmation email

pub mod availability;
pub mod booking;
pub mod mailer;
pub mod weather;

pub use booking::BookingService;
pub use mailer::{Mailer, SmtpSettings};
pub use weather::{SeatingAdvisor, WeatherService};
