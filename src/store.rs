use crate::models::{Event, EventLog};
use chrono::{DateTime, Utc};
use std::{env, fmt, path::Path, path::PathBuf};
use tokio::{fs, sync::Mutex};
use tracing::error;

/// Connection/query failure against the backing store. An empty query result
/// is not an error.
#[derive(Debug)]
pub struct StoreError(pub String);

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "store unavailable: {}", self.0)
    }
}

impl std::error::Error for StoreError {}

/// Read/append access to the `milks` collection. The file variant re-reads
/// the file on every fetch and rewrites it whole on every append; the
/// in-memory variant backs demo mode and tests.
pub enum Gateway {
    InMemory(Mutex<Vec<Event>>),
    File { path: PathBuf, write_lock: Mutex<()> },
}

impl Gateway {
    pub fn in_memory() -> Self {
        Gateway::InMemory(Mutex::new(Vec::new()))
    }

    pub fn file(path: PathBuf) -> Self {
        Gateway::File {
            path,
            write_lock: Mutex::new(()),
        }
    }

    /// Events with timestamp strictly after `since`, in store order.
    /// Store order carries no meaning; callers must not assume it is sorted.
    pub async fn fetch_events(&self, since: DateTime<Utc>) -> Result<Vec<Event>, StoreError> {
        let events = match self {
            Gateway::InMemory(events) => events.lock().await.clone(),
            Gateway::File { path, .. } => read_log(path).await?.milks,
        };

        Ok(events
            .into_iter()
            .filter(|event| event.datetime > since)
            .collect())
    }

    pub async fn append(&self, event: Event) -> Result<(), StoreError> {
        match self {
            Gateway::InMemory(events) => {
                events.lock().await.push(event);
                Ok(())
            }
            Gateway::File { path, write_lock } => {
                let _guard = write_lock.lock().await;
                let mut log = read_log(path).await?;
                log.milks.push(event);
                write_log(path, &log).await
            }
        }
    }
}

async fn read_log(path: &Path) -> Result<EventLog, StoreError> {
    match fs::read(path).await {
        Ok(bytes) => serde_json::from_slice(&bytes).map_err(|err| {
            error!("failed to parse data file: {err}");
            StoreError(err.to_string())
        }),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(EventLog::default()),
        Err(err) => {
            error!("failed to read data file: {err}");
            Err(StoreError(err.to_string()))
        }
    }
}

async fn write_log(path: &Path, log: &EventLog) -> Result<(), StoreError> {
    let payload = serde_json::to_vec_pretty(log).map_err(|err| StoreError(err.to_string()))?;
    fs::write(path, payload)
        .await
        .map_err(|err| StoreError(err.to_string()))?;
    Ok(())
}

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/milks.json"))
}
