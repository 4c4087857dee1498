use crate::store::Gateway;
use chrono::{Duration, FixedOffset};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<Gateway>,
    /// Shared password gating the entry form. `None` disables writes.
    pub password: Option<String>,
    /// Trailing window over which events are fetched and aggregated.
    pub window: Duration,
    /// Fixed offset used to interpret form input and display timestamps.
    pub tz: FixedOffset,
}

impl AppState {
    pub fn new(
        gateway: Gateway,
        password: Option<String>,
        window_days: i64,
        tz: FixedOffset,
    ) -> Self {
        Self {
            gateway: Arc::new(gateway),
            password,
            window: Duration::days(window_days),
            tz,
        }
    }
}
