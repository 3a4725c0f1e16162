//! Aggregations over the usage event log.
//!
//! These are pure functions over an event slice; callers fetch the log via
//! [`crate::store::Store::list_events`]. Day bucketing uses UTC calendar
//! days so the series is stable regardless of the host timezone.

use jiff::civil::Date;
use jiff::tz::TimeZone;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::models::Event;

/// Default window for [`daily_series`]-style reports.
pub const DEFAULT_SERIES_DAYS: u32 = 14;

/// A per-day count series over a trailing window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventSeries {
    /// Day keys in `YYYY-MM-DD` form, oldest first
    pub days: Vec<String>,
    /// Event counts aligned with `days`
    pub counts: Vec<u64>,
}

/// Counts events of the given kind across the whole log.
pub fn count_events(events: &[Event], kind: &str) -> usize {
    events.iter().filter(|event| event.kind == kind).count()
}

/// Builds a per-day series for the trailing `days` window ending today.
pub fn daily_series(events: &[Event], kind: &str, days: u32) -> EventSeries {
    daily_series_at(events, kind, days, Timestamp::now())
}

/// Series builder with an explicit reference instant, ending on the UTC
/// calendar day containing `now`.
pub fn daily_series_at(events: &[Event], kind: &str, days: u32, now: Timestamp) -> EventSeries {
    let mut buckets: Vec<Date> = Vec::with_capacity(days as usize);
    let mut cursor = now.to_zoned(TimeZone::UTC).date();
    for _ in 0..days {
        buckets.push(cursor);
        match cursor.yesterday() {
            Ok(previous) => cursor = previous,
            Err(_) => break,
        }
    }
    buckets.reverse();

    let mut counts = vec![0u64; buckets.len()];
    for event in events {
        if event.kind != kind {
            continue;
        }
        let Ok(ts) = Timestamp::from_millisecond(event.ts) else {
            continue;
        };
        let day = ts.to_zoned(TimeZone::UTC).date();
        if let Some(index) = buckets.iter().position(|b| *b == day) {
            counts[index] += 1;
        }
    }

    EventSeries {
        days: buckets.iter().map(ToString::to_string).collect(),
        counts,
    }
}
