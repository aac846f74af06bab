//! Server state

use std::sync::Arc;
use std::time::Instant;

use crate::core::Config;
use crate::db::{BookingStore, MemoryStore};
use crate::dialogue::ConversationService;
use crate::services::{BookingService, Mailer, WeatherService};

/// Shared handle to every service; cheap to clone.
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub store: Arc<dyn BookingStore>,
    pub bookings: Arc<BookingService>,
    pub weather: Arc<WeatherService>,
    pub conversations: Arc<ConversationService>,
    /// Process start, for the health endpoint's uptime
    pub started_at: Instant,
}

impl ServerState {
    /// Wire the default service graph: in-memory store, OpenWeather
    /// collaborator, env-configured mailer.
    pub fn initialize(config: &Config) -> Self {
        let store: Arc<dyn BookingStore> = Arc::new(MemoryStore::new());
        Self::with_store(config, store)
    }

    /// Same graph over a caller-supplied store
    pub fn with_store(config: &Config, store: Arc<dyn BookingStore>) -> Self {
        let weather = Arc::new(WeatherService::new(
            config.openweather_api_key.clone(),
            config.default_location.clone(),
        ));
        let mailer = Mailer::new(config.smtp.clone());
        let bookings = Arc::new(BookingService::new(
            store.clone(),
            weather.clone(),
            mailer,
            config.total_tables,
        ));
        let conversations = Arc::new(ConversationService::new(bookings.clone(), weather.clone()));

        Self {
            config: config.clone(),
            store,
            bookings,
            weather,
            conversations,
            started_at: Instant::now(),
        }
    }
}
