use chrono::FixedOffset;
use milk_tracker::{AppState, Gateway, resolve_data_path, router};
use std::{env, net::SocketAddr};
use tokio::fs;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let gateway = if matches!(env::var("APP_STORAGE").as_deref(), Ok("memory")) {
        info!("using ephemeral in-memory storage");
        Gateway::in_memory()
    } else {
        let data_path = resolve_data_path()?;
        if let Some(parent) = data_path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Gateway::file(data_path)
    };

    let password = env::var("SECRET_PASSWORD").ok().filter(|p| !p.is_empty());
    if password.is_none() {
        info!("SECRET_PASSWORD not set; the entry form is disabled");
    }

    let window_days = env::var("WINDOW_DAYS")
        .ok()
        .and_then(|value| value.parse::<i64>().ok())
        .unwrap_or(31);
    let tz_minutes = env::var("TZ_OFFSET_MINUTES")
        .ok()
        .and_then(|value| value.parse::<i32>().ok())
        .unwrap_or(0);
    let tz = FixedOffset::east_opt(tz_minutes * 60).ok_or("TZ_OFFSET_MINUTES out of range")?;

    let state = AppState::new(gateway, password, window_days, tz);
    let app = router(state);

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
