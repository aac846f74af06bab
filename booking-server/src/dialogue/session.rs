//! Dialogue session state
//!
//! One [`DialogueSession`] per conversation: the current position in the
//! fixed step sequence plus the booking draft accumulated so far.
//! Sessions are explicit records owned by the orchestrator's registry,
//! never process-wide state.

use std::time::Instant;

use chrono::NaiveDate;
use shared::models::{Cuisine, Seating};
use shared::request::BookingPayload;

pub const WELCOME_PROMPT: &str =
    "Welcome to Vaiu services. I am your restaurant booking assistant. What is your name?";

pub const RESTART_PROMPT: &str =
    "Okay, your booking has been cancelled. Let us start again. What is your name?";

/// The fixed slot-filling sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Name,
    Phone,
    Email,
    Guests,
    Date,
    Time,
    Seating,
    Cuisine,
    SpecialRequests,
    Confirmation,
}

pub const STEPS: [Step; 10] = [
    Step::Name,
    Step::Phone,
    Step::Email,
    Step::Guests,
    Step::Date,
    Step::Time,
    Step::Seating,
    Step::Cuisine,
    Step::SpecialRequests,
    Step::Confirmation,
];

impl Step {
    pub fn index(self) -> usize {
        STEPS.iter().position(|s| *s == self).unwrap_or(0)
    }
}

/// Booking fields accumulated across turns
#[derive(Debug, Clone, Default)]
pub struct BookingDraft {
    pub customer_name: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub number_of_guests: Option<u32>,
    pub booking_date: Option<NaiveDate>,
    pub booking_time: Option<String>,
    pub seating_preference: Option<Seating>,
    pub cuisine_preference: Option<Cuisine>,
    pub special_requests: Option<String>,
}

impl BookingDraft {
    /// Convert into a create payload once every slot is filled
    pub fn to_payload(&self) -> Option<BookingPayload> {
        Some(BookingPayload {
            customer_name: self.customer_name.clone()?,
            phone_number: self.phone_number.clone()?,
            email: self.email.clone()?,
            number_of_guests: self.number_of_guests?,
            booking_date: Some(self.booking_date?),
            booking_time: Some(self.booking_time.clone()?),
            cuisine_preference: self.cuisine_preference?,
            seating_preference: self.seating_preference?,
            special_requests: self.special_requests.clone().unwrap_or_default(),
        })
    }
}

/// Per-conversation state
#[derive(Debug, Clone)]
pub struct DialogueSession {
    step_index: usize,
    pub draft: BookingDraft,
    /// Last agent utterance, kept for replay
    pub last_prompt: String,
    /// Set after an unrecoverable create failure; requires manual restart
    pub failed: bool,
    /// Last turn or reset, used to sweep abandoned conversations
    pub last_active: Instant,
}

impl Default for DialogueSession {
    fn default() -> Self {
        Self {
            step_index: 0,
            draft: BookingDraft::default(),
            last_prompt: String::new(),
            failed: false,
            last_active: Instant::now(),
        }
    }
}

impl DialogueSession {
    pub fn new() -> Self {
        Self {
            last_prompt: WELCOME_PROMPT.to_string(),
            ..Self::default()
        }
    }

    pub fn touch(&mut self) {
        self.last_active = Instant::now();
    }

    pub fn current_step(&self) -> Option<Step> {
        STEPS.get(self.step_index).copied()
    }

    /// All steps answered and the user has confirmed
    pub fn is_complete(&self) -> bool {
        self.step_index >= STEPS.len()
    }

    pub fn advance(&mut self) {
        self.step_index += 1;
    }

    pub fn mark_complete(&mut self) {
        self.step_index = STEPS.len();
    }

    /// Move back to an earlier step, keeping the collected fields
    pub fn rewind_to(&mut self, step: Step) {
        self.step_index = step.index();
    }

    /// Full restart: first step, empty draft
    pub fn reset(&mut self) {
        self.step_index = 0;
        self.draft = BookingDraft::default();
        self.failed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_starts_at_name() {
        let session = DialogueSession::new();
        assert_eq!(session.current_step(), Some(Step::Name));
        assert!(!session.is_complete());
    }

    #[test]
    fn rewind_preserves_draft() {
        let mut session = DialogueSession::new();
        session.draft.customer_name = Some("John".into());
        session.mark_complete();
        session.rewind_to(Step::Time);
        assert_eq!(session.current_step(), Some(Step::Time));
        assert_eq!(session.draft.customer_name.as_deref(), Some("John"));
    }

    #[test]
    fn reset_clears_everything() {
        let mut session = DialogueSession::new();
        session.draft.email = Some("a@b.cd".into());
        session.advance();
        session.failed = true;
        session.reset();
        assert_eq!(session.current_step(), Some(Step::Name));
        assert!(session.draft.email.is_none());
        assert!(!session.failed);
    }

    #[test]
    fn draft_converts_only_when_full() {
        let mut draft = BookingDraft::default();
        assert!(draft.to_payload().is_none());

        draft.customer_name = Some("John Smith".into());
        draft.phone_number = Some("9876543210".into());
        draft.email = Some("john@example.com".into());
        draft.number_of_guests = Some(4);
        draft.booking_date = NaiveDate::from_ymd_opt(2026, 3, 25);
        draft.booking_time = Some("19:30".into());
        draft.seating_preference = Some(Seating::Indoor);
        draft.cuisine_preference = Some(Cuisine::Italian);
        draft.special_requests = Some(String::new());
        assert!(draft.to_payload().is_some());
    }
}
