use crate::errors::AppError;
use crate::models::{DashboardResponse, Event, LogRequest, LogResponse};
use crate::state::AppState;
use crate::stats::build_dashboard;
use crate::ui::render_index;
use axum::{extract::State, http::StatusCode, response::Html, Json};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(state.window.num_days()))
}

pub async fn get_dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, AppError> {
    let now = Utc::now();
    let window_start = now - state.window;
    let events = state.gateway.fetch_events(window_start).await?;
    Ok(Json(build_dashboard(&events, window_start, now, state.tz)))
}

pub async fn log_event(
    State(state): State<AppState>,
    Json(payload): Json<LogRequest>,
) -> Result<(StatusCode, Json<LogResponse>), AppError> {
    let Some(expected) = state.password.as_deref() else {
        return Err(AppError::unauthorized(
            "logging is disabled: no password configured",
        ));
    };
    if payload.password != expected {
        return Err(AppError::unauthorized("wrong password"));
    }

    let event = parse_event(&payload, Utc::now(), state.tz)?;
    state.gateway.append(event.clone()).await?;
    info!(
        "logged event at {} (finished: {})",
        event.datetime,
        event.ml_in_carton.is_some()
    );

    Ok((
        StatusCode::CREATED,
        Json(LogResponse {
            datetime: event.datetime,
            ml_in_carton: event.ml_in_carton,
        }),
    ))
}

/// Validate form input and resolve it to a UTC event. Future-dated events
/// are rejected here so elapsed time stays non-negative downstream.
fn parse_event(
    payload: &LogRequest,
    now: DateTime<Utc>,
    tz: FixedOffset,
) -> Result<Event, AppError> {
    let date = NaiveDate::parse_from_str(&payload.date, "%Y-%m-%d")
        .map_err(|_| AppError::bad_request("date must be YYYY-MM-DD"))?;
    let time = NaiveTime::parse_from_str(&payload.time, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(&payload.time, "%H:%M:%S"))
        .map_err(|_| AppError::bad_request("time must be HH:MM"))?;

    let datetime = NaiveDateTime::new(date, time)
        .and_local_timezone(tz)
        .single()
        .ok_or_else(|| AppError::bad_request("could not resolve local time"))?
        .with_timezone(&Utc);

    if datetime > now {
        return Err(AppError::bad_request("event timestamp is in the future"));
    }

    let ml_in_carton = if payload.carton_finished {
        match payload.ml_in_carton {
            Some(ml) if (0..=i64::from(u32::MAX)).contains(&ml) => Some(ml as u32),
            Some(_) => {
                return Err(AppError::bad_request(
                    "volume must be a non-negative number of mL",
                ));
            }
            None => {
                return Err(AppError::bad_request(
                    "volume is required when the carton is finished",
                ));
            }
        }
    } else {
        None
    };

    Ok(Event {
        datetime,
        ml_in_carton,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use chrono::TimeZone;

    fn request(date: &str, time: &str, finished: bool, ml: Option<i64>) -> LogRequest {
        LogRequest {
            password: String::new(),
            date: date.to_string(),
            time: time.to_string(),
            carton_finished: finished,
            ml_in_carton: ml,
        }
    }

    fn utc_offset() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 24, 12, 0, 0).unwrap()
    }

    #[test]
    fn parses_finished_carton_event() {
        let event = parse_event(
            &request("2026-08-24", "09:30", true, Some(1000)),
            now(),
            utc_offset(),
        )
        .unwrap();
        assert_eq!(event.ml_in_carton, Some(1000));
        assert_eq!(
            event.datetime,
            Utc.with_ymd_and_hms(2026, 8, 24, 9, 30, 0).unwrap()
        );
    }

    #[test]
    fn unfinished_carton_drops_volume() {
        let event = parse_event(
            &request("2026-08-24", "09:30", false, Some(1000)),
            now(),
            utc_offset(),
        )
        .unwrap();
        assert_eq!(event.ml_in_carton, None);
    }

    #[test]
    fn offset_input_resolves_to_utc() {
        // +120 minutes: 09:30 local is 07:30 UTC.
        let tz = FixedOffset::east_opt(120 * 60).unwrap();
        let event = parse_event(&request("2026-08-24", "09:30", true, Some(500)), now(), tz)
            .unwrap();
        assert_eq!(
            event.datetime,
            Utc.with_ymd_and_hms(2026, 8, 24, 7, 30, 0).unwrap()
        );
    }

    #[test]
    fn rejects_future_timestamp() {
        let err = parse_event(
            &request("2026-08-24", "13:00", false, None),
            now(),
            utc_offset(),
        )
        .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn rejects_negative_volume() {
        let err = parse_event(
            &request("2026-08-24", "09:30", true, Some(-250)),
            now(),
            utc_offset(),
        )
        .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn rejects_finished_carton_without_volume() {
        let err = parse_event(
            &request("2026-08-24", "09:30", true, None),
            now(),
            utc_offset(),
        )
        .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn rejects_malformed_date() {
        let err = parse_event(
            &request("24/08/2026", "09:30", false, None),
            now(),
            utc_offset(),
        )
        .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }
}
