//! Synthetic departures shown when live data is unavailable.
//!
//! The board is a pure function of the current time: a fixed catalog of
//! destinations, departing at 10-minute intervals from 15 minutes out, with
//! platforms and statuses cycling by position.

use chrono::{Duration, NaiveDateTime};

use crate::domain::{ClockTime, DepartureRecord, DepartureStatus};

/// Destination name, CRS and operator for each synthetic row.
const CATALOG: [(&str, &str, &str); 10] = [
    ("London Paddington", "PAD", "GWR"),
    ("London Waterloo", "WAT", "SWR"),
    ("London Victoria", "VIC", "Southern"),
    ("London Bridge", "LBG", "Thameslink"),
    ("Reading", "RDG", "GWR"),
    ("Bristol Temple Meads", "BRI", "GWR"),
    ("Cardiff Central", "CDF", "GWR"),
    ("Manchester Piccadilly", "MAN", "Avanti West Coast"),
    ("Birmingham New Street", "BHM", "Avanti West Coast"),
    ("Edinburgh Waverley", "EDB", "LNER"),
];

/// Build the synthetic board as it would look at `now`.
///
/// Scheduled and estimated times are always equal, including on rows
/// marked "Delayed"; board clients show the delay from `delay_minutes`.
pub fn synthetic_departures(now: NaiveDateTime) -> Vec<DepartureRecord> {
    CATALOG
        .iter()
        .enumerate()
        .map(|(i, (name, crs, operator))| synthetic_departure(now, i, name, crs, operator))
        .collect()
}

fn synthetic_departure(
    now: NaiveDateTime,
    i: usize,
    name: &str,
    crs: &str,
    operator: &str,
) -> DepartureRecord {
    let departs = now + Duration::minutes(15 + 10 * i as i64);
    let time = ClockTime::of(departs).to_string();

    let platform = format!("{}{}", i % 4 + 1, if i % 2 == 0 { 'A' } else { 'B' });

    let status = match i % 4 {
        0 => DepartureStatus::OnTime,
        1 => DepartureStatus::Delayed((i % 3) as i32 * 5),
        2 => DepartureStatus::Cancelled,
        _ => DepartureStatus::PlatformChange,
    };

    let delay_minutes = match status {
        DepartureStatus::Delayed(minutes) => minutes,
        _ => 0,
    };

    DepartureRecord {
        destination_name: name.to_string(),
        destination_code: crs.to_string(),
        operator: operator.to_string(),
        scheduled_time: time.clone(),
        estimated_time: time,
        platform,
        is_cancelled: status.is_cancelled(),
        status,
        delay_minutes,
    }
}
