//! Restaurant Booking Voice Agent - server
//!
//! REST API over a booking record store plus the scripted voice-agent
//! dialogue that fills a booking slot by slot.
//!
//! # Module structure
//!
//! ```text
//! booking-server/src/
//! ├── core/      # config, state, server
//! ├── api/       # HTTP routes and handlers
//! ├── db/        # booking store (trait + in-memory impl)
//! ├── services/  # availability, booking records, weather, mail
//! ├── dialogue/  # slot-filling state machine and orchestrator
//! └── utils/     # errors, logging
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod dialogue;
pub mod services;
pub mod utils;

// Re-export common types
pub use core::{Config, Server, ServerState};
pub use dialogue::{ConversationService, DialogueSession, UtteranceSource};
pub use services::BookingService;
pub use utils::{AppError, AppResult};

// Re-export logger setup
pub use utils::logger::init_logger;
