//! Conversation orchestrator
//!
//! Owns the session registry and drives full turns: utterance in, agent
//! reply out, and on completion the hand-off to the booking service.
//! Each session is wrapped in its own async mutex so at most one
//! utterance per conversation is in flight; separate conversations do
//! not contend.

use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use dashmap::DashMap;
use shared::models::Booking;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::engine::{self, TurnOutcome};
use super::session::{DialogueSession, WELCOME_PROMPT};
use crate::services::{BookingService, SeatingAdvisor};
use crate::utils::{AppError, AppResult};

use super::session::Step;

const UNINTELLIGIBLE_PROMPT: &str =
    "I could not hear you properly. Could you please say that again?";

const FAILURE_PROMPT: &str =
    "Sorry, something went wrong while saving your booking. Please try again.";

/// Conversations idle longer than this are swept by the background
/// eviction task; the start endpoint is open, so the registry must not
/// grow without bound.
pub const SESSION_IDLE_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// Where an utterance came from; short audio snippets are treated as
/// mis-recognitions, typed text is taken as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UtteranceSource {
    Audio,
    Text,
}

/// Agent reply for one turn
#[derive(Debug, Clone)]
pub struct ConversationReply {
    pub session_id: Uuid,
    pub reply: String,
    /// Set when a booking was persisted this turn
    pub booking: Option<Booking>,
    pub completed: bool,
}

pub struct ConversationService {
    sessions: DashMap<Uuid, Arc<Mutex<DialogueSession>>>,
    bookings: Arc<BookingService>,
    advisor: Arc<dyn SeatingAdvisor>,
}

impl ConversationService {
    pub fn new(bookings: Arc<BookingService>, advisor: Arc<dyn SeatingAdvisor>) -> Self {
        Self {
            sessions: DashMap::new(),
            bookings,
            advisor,
        }
    }

    /// Open a new conversation; returns its id and the welcome prompt
    pub fn start(&self) -> (Uuid, String) {
        let id = Uuid::new_v4();
        self.sessions
            .insert(id, Arc::new(Mutex::new(DialogueSession::new())));
        tracing::debug!(session = %id, "Conversation started");
        (id, WELCOME_PROMPT.to_string())
    }

    /// Restart an existing conversation from the first step
    pub async fn reset(&self, id: Uuid) -> AppResult<String> {
        let session = self.session(id)?;
        let mut session = session.lock().await;
        session.reset();
        session.touch();
        session.last_prompt = WELCOME_PROMPT.to_string();
        Ok(WELCOME_PROMPT.to_string())
    }

    /// Drop a conversation without booking anything
    pub fn end(&self, id: Uuid) -> AppResult<()> {
        match self.sessions.remove(&id) {
            Some(_) => {
                tracing::debug!(session = %id, "Conversation ended");
                Ok(())
            }
            None => Err(AppError::NotFound("Conversation".into())),
        }
    }

    /// Remove sessions idle for at least `max_idle`; returns how many
    /// were dropped. A session whose lock is held has a turn in flight
    /// and is kept.
    pub fn evict_idle(&self, max_idle: Duration) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|_, session| match session.try_lock() {
            Ok(session) => session.last_active.elapsed() < max_idle,
            Err(_) => true,
        });
        before - self.sessions.len()
    }

    /// Process one utterance for the given conversation.
    pub async fn handle_utterance(
        &self,
        id: Uuid,
        text: &str,
        source: UtteranceSource,
    ) -> AppResult<ConversationReply> {
        let session = self.session(id)?;
        let mut session = session.lock().await;
        session.touch();

        if session.failed {
            // Terminal error state until the caller resets.
            return Ok(self.reply(id, FAILURE_PROMPT.to_string(), None));
        }

        // Audio shorter than 3 characters is treated as a mis-hearing.
        let stripped: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        if source == UtteranceSource::Audio && stripped.len() < 3 {
            return Ok(self.reply(id, UNINTELLIGIBLE_PROMPT.to_string(), None));
        }

        let today = Local::now().date_naive();
        let outcome = engine::advance(&mut session, text, today, self.advisor.as_ref()).await;

        if !matches!(outcome, TurnOutcome::Completed(_)) {
            return Ok(self.reply(id, outcome.message().to_string(), None));
        }

        // All slots filled and confirmed: hand off to the booking service.
        let Some(payload) = session.draft.to_payload() else {
            session.failed = true;
            return Err(AppError::Internal(
                "dialogue completed with an incomplete draft".into(),
            ));
        };

        match self.bookings.create(payload).await {
            Ok(booking) => {
                let reply = format!(
                    "Your booking is confirmed. Your booking ID is {}. A confirmation email has \
                     been sent to you.",
                    booking.booking_id
                );
                drop(session);
                self.sessions.remove(&id);
                Ok(ConversationReply {
                    session_id: id,
                    reply,
                    booking: Some(booking),
                    completed: true,
                })
            }
            Err(AppError::FullyBooked {
                message,
                suggestions,
            }) => {
                // Let the user pick a new time; everything else is kept.
                session.rewind_to(Step::Time);
                let reply = if suggestions.is_empty() {
                    format!("{} Please tell me another time for your booking.", message)
                } else {
                    format!(
                        "{} The next available times are: {}. Please tell me which time you prefer.",
                        message,
                        suggestions.join(", ")
                    )
                };
                session.last_prompt = reply.clone();
                Ok(self.reply(id, reply, None))
            }
            Err(e) => {
                tracing::error!(session = %id, error = %e, "Booking creation failed");
                session.failed = true;
                Ok(self.reply(id, FAILURE_PROMPT.to_string(), None))
            }
        }
    }

    /// Last agent prompt, for replay
    pub async fn last_prompt(&self, id: Uuid) -> AppResult<String> {
        let session = self.session(id)?;
        let session = session.lock().await;
        Ok(session.last_prompt.clone())
    }

    fn session(&self, id: Uuid) -> AppResult<Arc<Mutex<DialogueSession>>> {
        self.sessions
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::NotFound("Conversation".into()))
    }

    fn reply(&self, id: Uuid, reply: String, booking: Option<Booking>) -> ConversationReply {
        ConversationReply {
            session_id: id,
            reply,
            booking,
            completed: false,
        }
    }
}
