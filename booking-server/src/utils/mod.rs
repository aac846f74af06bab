//! Utility modules
//!
//! - [`error`] - application error type and response mapping
//! - [`extract`] - request extractors with unified error bodies
//! - [`logger`] - tracing setup

pub mod error;
pub mod extract;
pub mod logger;

pub use error::{AppError, AppResult};
pub use extract::AppJson;
