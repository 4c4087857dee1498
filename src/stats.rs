use crate::models::{CountPoint, DashboardResponse, Event, EventRow, VolumePoint};
use chrono::{DateTime, FixedOffset, Utc};

/// Human-readable "time since last event" string. Negative input (an event
/// timestamped after `now`) clamps to zero.
pub fn format_elapsed(seconds: f64) -> String {
    let seconds = seconds.max(0.0);
    if seconds < 60.0 {
        format!("{} seconds ago", seconds as u64)
    } else if seconds < 3600.0 {
        format!("{} minutes ago", (seconds / 60.0) as u64)
    } else if seconds < 86400.0 {
        let hours = (seconds / 3600.0) as u64;
        let minutes = ((seconds % 3600.0) / 60.0) as u64;
        format!("{hours} hours, {minutes} minutes ago")
    } else {
        format!("{} days ago", (seconds / 86400.0) as u64)
    }
}

/// Cumulative volume (litres) and event-count series over the window.
/// Both series are seeded with a zero point at `window_start` and step up at
/// each event's timestamp. Events are sorted by timestamp; the sort is stable,
/// so events at the same instant keep their store order.
pub fn build_series(
    events: &[Event],
    window_start: DateTime<Utc>,
) -> (Vec<VolumePoint>, Vec<CountPoint>) {
    let mut sorted: Vec<&Event> = events.iter().collect();
    sorted.sort_by_key(|event| event.datetime);

    let mut volume = Vec::with_capacity(sorted.len() + 1);
    let mut count = Vec::with_capacity(sorted.len() + 1);
    volume.push(VolumePoint {
        datetime: window_start,
        litres: 0.0,
    });
    count.push(CountPoint {
        datetime: window_start,
        count: 0,
    });

    let mut litres = 0.0;
    for (index, event) in sorted.iter().enumerate() {
        litres += f64::from(event.ml_in_carton.unwrap_or(0)) / 1000.0;
        volume.push(VolumePoint {
            datetime: event.datetime,
            litres,
        });
        count.push(CountPoint {
            datetime: event.datetime,
            count: index as u64 + 1,
        });
    }

    (volume, count)
}

/// Table rows in input order; callers pre-sort for display. The amount column
/// is blank when the carton was not finished.
pub fn to_rows(events: &[Event], tz: FixedOffset) -> Vec<EventRow> {
    events
        .iter()
        .map(|event| EventRow {
            datetime: event
                .datetime
                .with_timezone(&tz)
                .format("%Y-%m-%d %H:%M")
                .to_string(),
            amount: match event.ml_in_carton {
                Some(ml) => format!("{ml} mL"),
                None => String::new(),
            },
        })
        .collect()
}

/// Full dashboard projection over one fetched snapshot. An empty snapshot
/// short-circuits: no recency, no series, no rows.
pub fn build_dashboard(
    events: &[Event],
    window_start: DateTime<Utc>,
    now: DateTime<Utc>,
    tz: FixedOffset,
) -> DashboardResponse {
    // Most recent event via max: fetch results carry no order guarantee.
    let Some(last) = events.iter().map(|event| event.datetime).max() else {
        return DashboardResponse {
            window_start,
            has_data: false,
            time_since_last: None,
            volume_series: Vec::new(),
            count_series: Vec::new(),
            rows: Vec::new(),
        };
    };

    let elapsed = (now - last).num_milliseconds() as f64 / 1000.0;
    let (volume_series, count_series) = build_series(events, window_start);

    let mut sorted = events.to_vec();
    sorted.sort_by_key(|event| event.datetime);
    sorted.reverse();
    let rows = to_rows(&sorted, tz);

    DashboardResponse {
        window_start,
        has_data: true,
        time_since_last: Some(format_elapsed(elapsed)),
        volume_series,
        count_series,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn event(secs: i64, ml: Option<u32>) -> Event {
        Event {
            datetime: ts(secs),
            ml_in_carton: ml,
        }
    }

    fn utc_offset() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    #[test]
    fn format_elapsed_bucket_boundaries() {
        assert_eq!(format_elapsed(0.0), "0 seconds ago");
        assert_eq!(format_elapsed(59.0), "59 seconds ago");
        assert_eq!(format_elapsed(60.0), "1 minutes ago");
        assert_eq!(format_elapsed(3599.0), "59 minutes ago");
        assert_eq!(format_elapsed(3661.0), "1 hours, 1 minutes ago");
        assert_eq!(format_elapsed(86399.0), "23 hours, 59 minutes ago");
        assert_eq!(format_elapsed(90000.0), "1 days ago");
    }

    #[test]
    fn format_elapsed_clamps_negative_to_zero() {
        assert_eq!(format_elapsed(-5.0), "0 seconds ago");
    }

    #[test]
    fn empty_events_yield_single_zero_points() {
        let start = ts(1000);
        let (volume, count) = build_series(&[], start);
        assert_eq!(volume.len(), 1);
        assert_eq!(count.len(), 1);
        assert_eq!(volume[0].datetime, start);
        assert_eq!(volume[0].litres, 0.0);
        assert_eq!(count[0].datetime, start);
        assert_eq!(count[0].count, 0);
    }

    #[test]
    fn series_accumulate_volume_and_count() {
        let events = vec![
            event(100, Some(1000)),
            event(200, None),
            event(300, Some(500)),
        ];
        let (volume, count) = build_series(&events, ts(0));

        assert_eq!(volume.last().unwrap().litres, 1.5);
        assert_eq!(count.last().unwrap().count, 3);
        // Unfinished event contributes to count but not volume.
        assert_eq!(volume[2].litres, 1.0);
        assert_eq!(count[2].count, 2);
    }

    #[test]
    fn series_totals_are_order_independent_and_monotonic() {
        let orderings = [
            vec![event(100, Some(1000)), event(200, None), event(300, Some(500))],
            vec![event(300, Some(500)), event(100, Some(1000)), event(200, None)],
            vec![event(200, None), event(300, Some(500)), event(100, Some(1000))],
        ];

        for events in &orderings {
            let (volume, count) = build_series(events, ts(0));
            assert_eq!(volume.last().unwrap().litres, 1.5);
            assert_eq!(count.last().unwrap().count, 3);

            for pair in volume.windows(2) {
                assert!(pair[1].litres >= pair[0].litres);
                assert!(pair[1].datetime >= pair[0].datetime);
            }
            for pair in count.windows(2) {
                assert!(pair[1].count >= pair[0].count);
                assert!(pair[1].datetime >= pair[0].datetime);
            }
        }
    }

    #[test]
    fn rows_blank_amount_for_unfinished_cartons() {
        let rows = to_rows(
            &[event(1_700_000_000, Some(1000)), event(1_700_000_060, None)],
            utc_offset(),
        );
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].amount, "1000 mL");
        assert_eq!(rows[1].amount, "");
    }

    #[test]
    fn dashboard_short_circuits_on_empty_window() {
        let dashboard = build_dashboard(&[], ts(0), ts(100), utc_offset());
        assert!(!dashboard.has_data);
        assert!(dashboard.time_since_last.is_none());
        assert!(dashboard.volume_series.is_empty());
        assert!(dashboard.count_series.is_empty());
        assert!(dashboard.rows.is_empty());
    }

    #[test]
    fn dashboard_recency_uses_most_recent_event() {
        // Most recent event is first in store order; max must still find it.
        let events = vec![event(500, None), event(100, Some(1000))];
        let dashboard = build_dashboard(&events, ts(0), ts(530), utc_offset());

        assert!(dashboard.has_data);
        assert_eq!(
            dashboard.time_since_last.as_deref(),
            Some("30 seconds ago")
        );
        // Rows are shown most recent first.
        assert_eq!(dashboard.rows[0].amount, "");
        assert_eq!(dashboard.rows[1].amount, "1000 mL");
    }
}
