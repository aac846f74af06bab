//! Table availability
//!
//! Seating runs on a fixed 30-minute grid from 11:00 to 23:00 (23:30
//! excluded). A slot is full once it holds `capacity` active bookings.

use chrono::NaiveDate;

use crate::db::{BookingStore, StoreResult};

/// How many alternative slots to suggest when the requested one is full
pub const MAX_SUGGESTIONS: usize = 3;

/// The fixed booking grid, in order
pub fn time_slots() -> Vec<String> {
    let mut slots = Vec::new();
    for hour in 11..=23 {
        for minute in [0, 30] {
            if hour == 23 && minute == 30 {
                continue;
            }
            slots.push(format!("{:02}:{:02}", hour, minute));
        }
    }
    slots
}

/// Whether (date, time) has reached table capacity
pub async fn is_full(
    store: &dyn BookingStore,
    date: NaiveDate,
    time: &str,
    capacity: usize,
) -> StoreResult<bool> {
    Ok(store.count_active(date, time).await? >= capacity)
}

/// Find up to `MAX_SUGGESTIONS` open slots near `current_time`.
///
/// The grid is rotated so slots strictly after `current_time` come first,
/// wrapping around to the slots before it; `current_time` itself is
/// excluded. Grid order is preserved within each half, and only slots
/// below capacity are returned.
pub async fn find_alternatives(
    store: &dyn BookingStore,
    date: NaiveDate,
    current_time: &str,
    capacity: usize,
) -> StoreResult<Vec<String>> {
    let slots = time_slots();
    let start = slots
        .iter()
        .position(|s| s == current_time)
        .unwrap_or(0);

    let candidates = slots[start + 1..].iter().chain(slots[..start].iter());

    let mut suggestions = Vec::new();
    for time in candidates {
        if store.count_active(date, time).await? < capacity {
            suggestions.push(time.clone());
            if suggestions.len() >= MAX_SUGGESTIONS {
                break;
            }
        }
    }
    Ok(suggestions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{InsertOutcome, MemoryStore, NewBooking};
    use shared::models::{Cuisine, Seating};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 25).unwrap()
    }

    async fn fill_slot(store: &MemoryStore, time: &str, n: usize) {
        for i in 0..n {
            let outcome = store
                .insert_if_below(
                    NewBooking {
                        booking_id: format!("VAIU-{}{:03}", time.replace(':', ""), i),
                        customer_name: "Guest".into(),
                        phone_number: "9876543210".into(),
                        email: "guest@example.com".into(),
                        number_of_guests: 2,
                        booking_date: date(),
                        booking_time: time.to_string(),
                        cuisine_preference: Cuisine::Thai,
                        seating_preference: Seating::Outdoor,
                        special_requests: String::new(),
                        weather_info: None,
                    },
                    usize::MAX,
                )
                .await
                .unwrap();
            assert!(matches!(outcome, InsertOutcome::Created(_)));
        }
    }

    #[test]
    fn grid_runs_eleven_to_eleven() {
        let slots = time_slots();
        assert_eq!(slots.len(), 25);
        assert_eq!(slots.first().unwrap(), "11:00");
        assert_eq!(slots.last().unwrap(), "23:00");
        assert!(!slots.contains(&"23:30".to_string()));
    }

    #[tokio::test]
    async fn alternatives_start_after_requested_time() {
        let store = MemoryStore::new();
        let found = find_alternatives(&store, date(), "12:00", 10).await.unwrap();
        assert_eq!(found, vec!["12:30", "13:00", "13:30"]);
    }

    #[tokio::test]
    async fn alternatives_wrap_around_to_opening() {
        let store = MemoryStore::new();
        let found = find_alternatives(&store, date(), "23:00", 10).await.unwrap();
        assert_eq!(found, vec!["11:00", "11:30", "12:00"]);
    }

    #[tokio::test]
    async fn alternatives_skip_full_slots() {
        let store = MemoryStore::new();
        fill_slot(&store, "12:30", 2).await;
        fill_slot(&store, "13:30", 2).await;
        let found = find_alternatives(&store, date(), "12:00", 2).await.unwrap();
        assert_eq!(found, vec!["13:00", "14:00", "14:30"]);
    }

    #[tokio::test]
    async fn off_grid_time_rotates_from_the_start() {
        let store = MemoryStore::new();
        let found = find_alternatives(&store, date(), "09:15", 10).await.unwrap();
        assert_eq!(found, vec!["11:30", "12:00", "12:30"]);
    }

    #[tokio::test]
    async fn is_full_matches_capacity() {
        let store = MemoryStore::new();
        fill_slot(&store, "19:00", 2).await;
        assert!(is_full(&store, date(), "19:00", 2).await.unwrap());
        assert!(!is_full(&store, date(), "19:00", 3).await.unwrap());
    }
}
