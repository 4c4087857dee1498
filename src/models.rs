use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded consumption instance. `ml_in_carton` is present only when the
/// carton was finished at this event; the event still counts once either way.
/// Field names `datetime` and `ml_in_carton` are the persisted schema.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    pub datetime: DateTime<Utc>,
    #[serde(default)]
    pub ml_in_carton: Option<u32>,
}

/// On-disk document: the `milks` collection.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EventLog {
    pub milks: Vec<Event>,
}

/// Entry-form submission. Date and time come in as the form fields
/// (`YYYY-MM-DD`, `HH:MM`) and are interpreted in the configured offset.
#[derive(Debug, Deserialize)]
pub struct LogRequest {
    #[serde(default)]
    pub password: String,
    pub date: String,
    pub time: String,
    #[serde(default)]
    pub carton_finished: bool,
    #[serde(default)]
    pub ml_in_carton: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LogResponse {
    pub datetime: DateTime<Utc>,
    pub ml_in_carton: Option<u32>,
}

/// Cumulative volume series point, in litres.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumePoint {
    pub datetime: DateTime<Utc>,
    pub litres: f64,
}

/// Cumulative event-count series point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountPoint {
    pub datetime: DateTime<Utc>,
    pub count: u64,
}

/// Raw-table row. `amount` is empty when the carton was not finished.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRow {
    pub datetime: String,
    pub amount: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub window_start: DateTime<Utc>,
    pub has_data: bool,
    pub time_since_last: Option<String>,
    pub volume_series: Vec<VolumePoint>,
    pub count_series: Vec<CountPoint>,
    pub rows: Vec<EventRow>,
}
