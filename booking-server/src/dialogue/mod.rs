//! Voice-agent dialogue
//!
//! The scripted slot-filling conversation: a fixed ten-step sequence
//! collects the booking fields, then the orchestrator submits the
//! result to the booking service.
//!
//! - [`parse`] - pure utterance parsing (dates, times, guest counts)
//! - [`tone`] - cosmetic empathy prefixes
//! - [`session`] - per-conversation state
//! - [`engine`] - step transition rules
//! - [`orchestrator`] - session registry and turn loop

pub mod engine;
pub mod orchestrator;
pub mod parse;
pub mod session;
pub mod tone;

pub use engine::TurnOutcome;
pub use orchestrator::{
    ConversationReply, ConversationService, SESSION_IDLE_TIMEOUT, UtteranceSource,
};
pub use session::{BookingDraft, DialogueSession, STEPS, Step, WELCOME_PROMPT};
