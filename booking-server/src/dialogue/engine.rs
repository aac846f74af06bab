//! Dialogue step engine
//!
//! Drives one turn of the fixed slot-filling sequence: the current step
//! either extracts a value from the utterance, stores it in the draft
//! and advances, or rejects the input and re-prompts at the same step.
//! The confirmation step ends the sequence (confirm/yes) or resets it
//! (cancel/no).
//!
//! The Time step is the only one that consults a collaborator: a
//! [`SeatingAdvisor`] supplies the weather-based seating hint appended
//! to the seating prompt, and a failed lookup degrades to a generic
//! line without blocking the transition.

use chrono::NaiveDate;
use shared::models::{Cuisine, Seating};
use validator::ValidateEmail;

use super::parse;
use super::session::{DialogueSession, RESTART_PROMPT, Step};
use super::tone::apply_tone;
use crate::services::SeatingAdvisor;

/// Result of one dialogue turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Next prompt (step advanced) or re-prompt (validation failed)
    Prompt(String),
    /// User confirmed; the accumulated draft is ready to submit
    Completed(String),
    /// User cancelled at confirmation; session was reset
    Restarted(String),
}

impl TurnOutcome {
    pub fn message(&self) -> &str {
        match self {
            TurnOutcome::Prompt(m) | TurnOutcome::Completed(m) | TurnOutcome::Restarted(m) => m,
        }
    }
}

const WEATHER_FALLBACK: &str =
    "I could not fetch the weather right now, but you can still choose your seating preference.";

/// Process one utterance against the session's current step.
///
/// `today` anchors relative dates ("tomorrow"); the caller passes the
/// current local date.
pub async fn advance(
    session: &mut DialogueSession,
    input: &str,
    today: NaiveDate,
    advisor: &dyn SeatingAdvisor,
) -> TurnOutcome {
    let Some(step) = session.current_step() else {
        // Past the end; nothing left to collect.
        return TurnOutcome::Completed(session.last_prompt.clone());
    };

    let (reply, accepted) = match step {
        Step::Name => step_name(session, input),
        Step::Phone => step_phone(session, input),
        Step::Email => step_email(session, input),
        Step::Guests => step_guests(session, input),
        Step::Date => step_date(session, input, today),
        Step::Time => step_time(session, input, advisor).await,
        Step::Seating => step_seating(session, input),
        Step::Cuisine => step_cuisine(session, input),
        Step::SpecialRequests => step_special_requests(session, input),
        Step::Confirmation => {
            return step_confirmation(session, input);
        }
    };

    if accepted {
        session.advance();
    }

    let reply = apply_tone(&reply, input);
    session.last_prompt = reply.clone();
    TurnOutcome::Prompt(reply)
}

fn step_name(session: &mut DialogueSession, input: &str) -> (String, bool) {
    let name = input.trim();
    if name.len() > 2 {
        session.draft.customer_name = Some(name.to_string());
        (
            format!("Nice to meet you, {}. What is your phone number?", name),
            true,
        )
    } else {
        ("Please tell me your name again.".to_string(), false)
    }
}

fn step_phone(session: &mut DialogueSession, input: &str) -> (String, bool) {
    let digits = input.chars().filter(|c| c.is_ascii_digit()).count();
    if digits >= 10 {
        session.draft.phone_number = Some(input.trim().to_string());
        ("Great. What is your email address?".to_string(), true)
    } else {
        (
            "That does not look like a valid phone number. Please repeat it.".to_string(),
            false,
        )
    }
}

fn step_email(session: &mut DialogueSession, input: &str) -> (String, bool) {
    let email = input.trim();
    // Same validator check the booking service re-runs at create time,
    // so an address accepted here can never bounce there.
    if email.validate_email() {
        session.draft.email = Some(email.to_string());
        ("Thanks. How many guests are coming?".to_string(), true)
    } else {
        ("Please say a valid email address.".to_string(), false)
    }
}

fn step_guests(session: &mut DialogueSession, input: &str) -> (String, bool) {
    match parse::guests_from_text(input) {
        Some(guests) if (1..=20).contains(&guests) => {
            session.draft.number_of_guests = Some(guests);
            (
                "Perfect. On which date would you like to book? For example: 12th December 2025, \
                 or you can say tomorrow."
                    .to_string(),
                true,
            )
        }
        _ => (
            "Please tell me how many guests are coming, for example table for 4 people."
                .to_string(),
            false,
        ),
    }
}

fn step_date(session: &mut DialogueSession, input: &str, today: NaiveDate) -> (String, bool) {
    let parsed = parse::parse_spoken_date(input).or_else(|| parse::relative_date(input, today));
    match parsed {
        Some(date) => {
            session.draft.booking_date = Some(date);
            (
                "Great. What time would you prefer? For example 7:30 PM, or you can say evening \
                 or night."
                    .to_string(),
                true,
            )
        }
        None => (
            "Please say the date like 12th December 2025 or say tomorrow or day after tomorrow."
                .to_string(),
            false,
        ),
    }
}

async fn step_time(
    session: &mut DialogueSession,
    input: &str,
    advisor: &dyn SeatingAdvisor,
) -> (String, bool) {
    let parsed = parse::parse_spoken_time(input)
        .or_else(|| parse::time_from_words(input).map(str::to_string));
    let Some(time) = parsed else {
        return (
            "Please say the time in 12-hour format like 7:30 PM, or say morning, afternoon, \
             evening or night."
                .to_string(),
            false,
        );
    };

    session.draft.booking_time = Some(time);

    let suggestion = match session.draft.booking_date {
        Some(date) => {
            let info = advisor.seating_suggestion(date, None).await;
            if info.success {
                format!(
                    "{} On {}, the forecast is {} around your booking time.",
                    info.suggestion,
                    parse::format_pretty_date(date),
                    info.description
                )
            } else {
                WEATHER_FALLBACK.to_string()
            }
        }
        None => WEATHER_FALLBACK.to_string(),
    };

    (
        format!(
            "{}\n\nBased on this, I suggest one option, but what would you prefer: indoor or \
             outdoor seating?",
            suggestion
        ),
        true,
    )
}

fn step_seating(session: &mut DialogueSession, input: &str) -> (String, bool) {
    match input.parse::<Seating>() {
        Ok(seating) => {
            session.draft.seating_preference = Some(seating);
            (
                "Got it. Which cuisine would you prefer? You can choose from Italian, Chinese, \
                 Indian, Mexican, Japanese, American, Thai or Mediterranean."
                    .to_string(),
                true,
            )
        }
        Err(()) => ("Please say indoor or outdoor.".to_string(), false),
    }
}

fn step_cuisine(session: &mut DialogueSession, input: &str) -> (String, bool) {
    match input.parse::<Cuisine>() {
        Ok(cuisine) => {
            session.draft.cuisine_preference = Some(cuisine);
            (
                "Great choice. Do you have any special requests, like birthday, anniversary or \
                 dietary needs? Say none if there are no special requests."
                    .to_string(),
                true,
            )
        }
        Err(()) => (
            "Please choose a cuisine from Italian, Chinese, Indian, Mexican, Japanese, American, \
             Thai or Mediterranean."
                .to_string(),
            false,
        ),
    }
}

fn step_special_requests(session: &mut DialogueSession, input: &str) -> (String, bool) {
    let requests = if input.trim().eq_ignore_ascii_case("none") {
        String::new()
    } else {
        input.trim().to_string()
    };
    session.draft.special_requests = Some(requests);
    (confirmation_summary(session), true)
}

fn confirmation_summary(session: &DialogueSession) -> String {
    let draft = &session.draft;
    let date = draft
        .booking_date
        .map(parse::format_pretty_date)
        .unwrap_or_default();
    let time = draft
        .booking_time
        .as_deref()
        .map(parse::format_pretty_time)
        .unwrap_or_default();
    let special = match draft.special_requests.as_deref() {
        Some("") | None => "None".to_string(),
        Some(text) => text.to_string(),
    };

    format!(
        "Let me confirm your booking:\n\n\
         Name: {}\n\
         Phone: {}\n\
         Email: {}\n\
         Guests: {}\n\
         Date: {}\n\
         Time: {}\n\
         Cuisine: {}\n\
         Seating: {}\n\
         Special Requests: {}\n\n\
         Say confirm to complete your booking or cancel to start over.",
        draft.customer_name.as_deref().unwrap_or_default(),
        draft.phone_number.as_deref().unwrap_or_default(),
        draft.email.as_deref().unwrap_or_default(),
        draft.number_of_guests.unwrap_or_default(),
        date,
        time,
        draft
            .cuisine_preference
            .map(|c| c.to_string())
            .unwrap_or_default(),
        draft
            .seating_preference
            .map(|s| s.to_string())
            .unwrap_or_default(),
        special,
    )
}

fn step_confirmation(session: &mut DialogueSession, input: &str) -> TurnOutcome {
    match input.trim().to_lowercase().as_str() {
        "confirm" | "yes" => {
            session.mark_complete();
            let reply = apply_tone("Great. I am confirming your booking now.", input);
            session.last_prompt = reply.clone();
            TurnOutcome::Completed(reply)
        }
        "cancel" | "no" => {
            session.reset();
            session.last_prompt = RESTART_PROMPT.to_string();
            TurnOutcome::Restarted(RESTART_PROMPT.to_string())
        }
        _ => {
            let reply = apply_tone("Please say confirm or cancel.", input);
            session.last_prompt = reply.clone();
            TurnOutcome::Prompt(reply)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use shared::models::WeatherInfo;

    struct StubAdvisor {
        info: WeatherInfo,
    }

    impl StubAdvisor {
        fn sunny() -> Self {
            Self {
                info: WeatherInfo {
                    success: true,
                    suggestion: "The weather looks great.".into(),
                    description: "clear sky, around 24°C".into(),
                },
            }
        }

        fn broken() -> Self {
            Self {
                info: WeatherInfo::unavailable("down", "down"),
            }
        }
    }

    #[async_trait]
    impl SeatingAdvisor for StubAdvisor {
        async fn seating_suggestion(&self, _date: NaiveDate, _location: Option<&str>) -> WeatherInfo {
            self.info.clone()
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 24).unwrap()
    }

    async fn turn(session: &mut DialogueSession, input: &str) -> TurnOutcome {
        advance(session, input, today(), &StubAdvisor::sunny()).await
    }

    async fn run_through(session: &mut DialogueSession, inputs: &[&str]) {
        for input in inputs {
            turn(session, input).await;
        }
    }

    #[tokio::test]
    async fn name_advances_on_valid_input() {
        let mut session = DialogueSession::new();
        let outcome = turn(&mut session, "John").await;
        assert_eq!(session.current_step(), Some(Step::Phone));
        assert!(outcome.message().contains("phone number"));
        assert_eq!(session.draft.customer_name.as_deref(), Some("John"));
    }

    #[tokio::test]
    async fn short_name_reprompts_without_advancing() {
        let mut session = DialogueSession::new();
        let outcome = turn(&mut session, "J").await;
        assert_eq!(session.current_step(), Some(Step::Name));
        assert_eq!(outcome.message(), "Please tell me your name again.");
    }

    #[tokio::test]
    async fn phone_requires_ten_digits() {
        let mut session = DialogueSession::new();
        turn(&mut session, "John").await;
        turn(&mut session, "12345").await;
        assert_eq!(session.current_step(), Some(Step::Phone));
        turn(&mut session, "98-76-54-32-10").await;
        assert_eq!(session.current_step(), Some(Step::Email));
    }

    #[tokio::test]
    async fn email_shape_is_enforced() {
        let mut session = DialogueSession::new();
        run_through(&mut session, &["John", "9876543210"]).await;
        turn(&mut session, "john at example").await;
        assert_eq!(session.current_step(), Some(Step::Email));
        turn(&mut session, "john@example.com").await;
        assert_eq!(session.current_step(), Some(Step::Guests));
    }

    #[tokio::test]
    async fn email_step_rejects_what_create_would_reject() {
        // A comma in the local part passes naive shape checks but fails
        // the payload validation at create time; it must be caught here.
        let mut session = DialogueSession::new();
        run_through(&mut session, &["John", "9876543210"]).await;
        let outcome = turn(&mut session, "jo,hn@example.com").await;
        assert_eq!(session.current_step(), Some(Step::Email));
        assert!(outcome.message().contains("valid email"));
        turn(&mut session, "john@example.com").await;
        assert_eq!(session.current_step(), Some(Step::Guests));
    }

    #[tokio::test]
    async fn guests_accepts_phrases_and_enforces_range() {
        let mut session = DialogueSession::new();
        run_through(&mut session, &["John", "9876543210", "john@example.com"]).await;
        turn(&mut session, "25 people").await;
        assert_eq!(session.current_step(), Some(Step::Guests));
        turn(&mut session, "table for 4 people").await;
        assert_eq!(session.draft.number_of_guests, Some(4));
        assert_eq!(session.current_step(), Some(Step::Date));
    }

    #[tokio::test]
    async fn date_resolves_relative_and_absolute_forms() {
        let mut session = DialogueSession::new();
        run_through(&mut session, &["John", "9876543210", "john@example.com", "4"]).await;
        turn(&mut session, "tomorrow").await;
        assert_eq!(
            session.draft.booking_date,
            NaiveDate::from_ymd_opt(2026, 3, 25)
        );

        let mut session = DialogueSession::new();
        run_through(&mut session, &["John", "9876543210", "john@example.com", "4"]).await;
        turn(&mut session, "25th March 2026").await;
        assert_eq!(
            session.draft.booking_date,
            NaiveDate::from_ymd_opt(2026, 3, 25)
        );
    }

    #[tokio::test]
    async fn time_step_appends_forecast_suggestion() {
        let mut session = DialogueSession::new();
        run_through(
            &mut session,
            &["John", "9876543210", "john@example.com", "4", "tomorrow"],
        )
        .await;
        let outcome = turn(&mut session, "7:30pm").await;
        assert_eq!(session.draft.booking_time.as_deref(), Some("19:30"));
        assert!(outcome.message().contains("The weather looks great."));
        assert!(outcome.message().contains("indoor or outdoor seating"));
    }

    #[tokio::test]
    async fn time_step_degrades_when_advisor_fails() {
        let mut session = DialogueSession::new();
        run_through(
            &mut session,
            &["John", "9876543210", "john@example.com", "4", "tomorrow"],
        )
        .await;
        let outcome = advance(&mut session, "evening", today(), &StubAdvisor::broken()).await;
        assert_eq!(session.draft.booking_time.as_deref(), Some("19:00"));
        assert!(outcome.message().contains("could not fetch the weather"));
        assert_eq!(session.current_step(), Some(Step::Seating));
    }

    #[tokio::test]
    async fn cuisine_is_stored_capitalized_and_summary_follows() {
        let mut session = DialogueSession::new();
        run_through(
            &mut session,
            &[
                "John Smith",
                "9876543210",
                "john@example.com",
                "4",
                "tomorrow",
                "7:30pm",
                "indoor",
            ],
        )
        .await;
        turn(&mut session, "italian").await;
        assert_eq!(session.draft.cuisine_preference, Some(Cuisine::Italian));

        let outcome = turn(&mut session, "none").await;
        assert_eq!(session.draft.special_requests.as_deref(), Some(""));
        let summary = outcome.message();
        assert!(summary.contains("Name: John Smith"));
        assert!(summary.contains("Cuisine: Italian"));
        assert!(summary.contains("Time: 7:30 PM"));
        assert!(summary.contains("Special Requests: None"));
        assert_eq!(session.current_step(), Some(Step::Confirmation));
    }

    #[tokio::test]
    async fn confirmation_branches() {
        let inputs = [
            "John Smith",
            "9876543210",
            "john@example.com",
            "4",
            "tomorrow",
            "7:30pm",
            "indoor",
            "italian",
            "none",
        ];

        // confirm -> complete
        let mut session = DialogueSession::new();
        run_through(&mut session, &inputs).await;
        let outcome = turn(&mut session, "confirm").await;
        assert!(matches!(outcome, TurnOutcome::Completed(_)));
        assert!(session.is_complete());

        // gibberish -> re-prompt
        let mut session = DialogueSession::new();
        run_through(&mut session, &inputs).await;
        let outcome = turn(&mut session, "maybe").await;
        assert_eq!(outcome, TurnOutcome::Prompt("Please say confirm or cancel.".into()));
        assert_eq!(session.current_step(), Some(Step::Confirmation));

        // cancel -> full reset
        let mut session = DialogueSession::new();
        run_through(&mut session, &inputs).await;
        let outcome = turn(&mut session, "cancel").await;
        assert!(matches!(outcome, TurnOutcome::Restarted(_)));
        assert_eq!(session.current_step(), Some(Step::Name));
        assert!(session.draft.customer_name.is_none());
    }

    #[tokio::test]
    async fn tone_prefix_applies_without_changing_state() {
        let mut session = DialogueSession::new();
        let outcome = turn(&mut session, "John, booking for a birthday").await;
        assert!(outcome
            .message()
            .starts_with("That sounds like a lovely birthday celebration."));
        assert_eq!(session.current_step(), Some(Step::Phone));
    }
}
