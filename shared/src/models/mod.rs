//! Data models
//!
//! Shared between booking-server and frontend (via API).
//! Wire format is camelCase JSON.

pub mod booking;
pub mod weather;

// Re-exports
pub use booking::*;
pub use weather::*;
