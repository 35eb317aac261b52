//! Parametric schedule templates and service pattern generators.
//!
//! These build stop sequences and whole train sets from an ordered station
//! list, covering the common hand-entry shortcuts: express and local
//! calling patterns, and repeating hourly, shuttle and peak-hour services.
//! Everything here is pure; callers add the resulting trains to a
//! [`Schedule`](crate::models::Schedule) themselves.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::models::{Stop, Train};
use crate::time::{format_minutes, parse_time};

/// Fallback departure when a start time fails to parse (08:00).
const DEFAULT_START: i32 = 8 * 60;

// Plotly default palette, matching the colors the hand-entry UI assigns.
const BLUE: &str = "#1f77b4";
const ORANGE: &str = "#ff7f0e";
const GREEN: &str = "#2ca02c";
const RED: &str = "#d62728";

/// Walk `stations` in order from `start`, `spacing` minutes between stops
/// and `dwell` minutes at each intermediate stop. The first stop departs
/// immediately (arrival == departure); the last one terminates without a
/// departure.
fn run_stops<'a, I>(stations: I, start: i32, spacing: i32, dwell: i32) -> Vec<Stop>
where
    I: IntoIterator<Item = &'a String>,
{
    let stations: Vec<&String> = stations.into_iter().collect();
    let Some(first) = stations.first() else {
        return Vec::new();
    };

    let mut stops = vec![Stop::new(first, Some(start), Some(start))];
    let mut current = start;

    for (index, station) in stations.iter().enumerate().skip(1) {
        current += spacing;
        let departure = if index < stations.len() - 1 {
            Some(current + dwell)
        } else {
            None
        };
        stops.push(Stop::new(station, Some(current), departure));
        if let Some(departure) = departure {
            current = departure;
        }
    }

    stops
}

/// Like [`run_stops`], but travel time between consecutive calls is
/// proportional to how many stations of the full line lie between them.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn run_stops_skipping(
    stations: &[String],
    calls: &[String],
    start: i32,
    spacing: i32,
    dwell: i32,
) -> Vec<Stop> {
    let index_of: HashMap<&str, usize> = stations
        .iter()
        .enumerate()
        .map(|(index, name)| (name.as_str(), index))
        .collect();

    let Some(first) = calls.first() else {
        return Vec::new();
    };

    let mut stops = vec![Stop::new(first, Some(start), Some(start))];
    let mut current = start;

    for i in 1..calls.len() {
        let (Some(&prev), Some(&next)) = (
            index_of.get(calls[i - 1].as_str()),
            index_of.get(calls[i].as_str()),
        ) else {
            continue;
        };

        let passed = next.saturating_sub(prev);
        current += passed as i32 * spacing;

        let departure = if i < calls.len() - 1 {
            Some(current + dwell)
        } else {
            None
        };
        stops.push(Stop::new(&calls[i], Some(current), departure));
        if let Some(departure) = departure {
            current = departure;
        }
    }

    stops
}

/// Express service calling at the first, middle and last stations only.
///
/// The middle stop exists only with three or more stations and gets a
/// one-minute dwell; travel time stays proportional to distance along the
/// full line.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
#[must_use]
pub fn express_template(stations: &[String], start_time: &str, spacing: i32) -> Vec<Stop> {
    if stations.is_empty() {
        return Vec::new();
    }
    let start = parse_time(start_time).unwrap_or(DEFAULT_START);

    let mut template = vec![Stop::new(&stations[0], Some(start), Some(start))];

    if stations.len() >= 3 {
        let middle = stations.len() / 2;
        let time = start + middle as i32 * spacing;
        template.push(Stop::new(&stations[middle], Some(time), Some(time + 1)));
    }

    let last = stations.len() - 1;
    let time = start + last as i32 * spacing;
    template.push(Stop::new(&stations[last], Some(time), None));

    template
}

/// Local service calling at every station in order.
#[must_use]
pub fn local_template(stations: &[String], start_time: &str, spacing: i32, dwell: i32) -> Vec<Stop> {
    if stations.is_empty() {
        return Vec::new();
    }
    let start = parse_time(start_time).unwrap_or(DEFAULT_START);
    run_stops(stations, start, spacing, dwell)
}

/// Ascending all-stations service; identical calling pattern to
/// [`local_template`], kept as its own entry point to match the service
/// names offered to users.
#[must_use]
pub fn uptown_template(stations: &[String], start_time: &str, spacing: i32, dwell: i32) -> Vec<Stop> {
    local_template(stations, start_time, spacing, dwell)
}

/// Descending all-stations service: [`local_template`] over the reversed
/// station order.
#[must_use]
pub fn downtown_template(
    stations: &[String],
    start_time: &str,
    spacing: i32,
    dwell: i32,
) -> Vec<Stop> {
    let reversed: Vec<String> = stations.iter().rev().cloned().collect();
    local_template(&reversed, start_time, spacing, dwell)
}

/// Custom service calling only at `stops`, sorted into line order; names
/// not on the line are dropped. Travel time is proportional to the number
/// of stations passed between consecutive calls.
#[must_use]
pub fn custom_template(
    stations: &[String],
    stops: &[String],
    start_time: &str,
    spacing: i32,
    dwell: i32,
) -> Vec<Stop> {
    if stations.is_empty() || stops.is_empty() {
        return Vec::new();
    }

    let index_of: HashMap<&str, usize> = stations
        .iter()
        .enumerate()
        .map(|(index, name)| (name.as_str(), index))
        .collect();

    let mut calls: Vec<String> = stops
        .iter()
        .filter(|name| index_of.contains_key(name.as_str()))
        .cloned()
        .collect();
    if calls.is_empty() {
        return Vec::new();
    }
    calls.sort_by_key(|name| index_of[name.as_str()]);

    let start = parse_time(start_time).unwrap_or(DEFAULT_START);
    run_stops_skipping(stations, &calls, start, spacing, dwell)
}

/// The stock templates offered for a station list, keyed by display name.
#[must_use]
pub fn sample_templates(stations: &[String]) -> IndexMap<String, Vec<Stop>> {
    if stations.is_empty() {
        return IndexMap::new();
    }

    IndexMap::from([
        ("Morning Express".to_string(), express_template(stations, "07:30", 2)),
        ("Afternoon Express".to_string(), express_template(stations, "16:30", 2)),
        ("Morning Local".to_string(), local_template(stations, "08:00", 3, 1)),
        ("Afternoon Local".to_string(), local_template(stations, "17:00", 3, 1)),
        ("Morning Uptown".to_string(), uptown_template(stations, "08:30", 3, 1)),
        ("Afternoon Downtown".to_string(), downtown_template(stations, "17:30", 3, 1)),
    ])
}

/// Shifted copies of a base schedule, one per hour of `hours` (inclusive),
/// skipping the hour the base itself covers. The base schedule must open
/// with a departure, which anchors the service minute for naming.
#[must_use]
pub fn hourly_pattern(base_schedule: &[Stop], hours: (i32, i32)) -> Vec<Train> {
    let Some(base_departure) = base_schedule.first().and_then(|stop| stop.departure) else {
        return Vec::new();
    };

    let base_hour = base_departure / 60;
    let base_minute = base_departure % 60;

    let mut trains = Vec::new();
    for hour in hours.0..=hours.1 {
        if hour == base_hour {
            continue;
        }

        let shift = (hour - base_hour) * 60;
        let schedule: Vec<Stop> = base_schedule
            .iter()
            .map(|stop| Stop {
                station: stop.station.clone(),
                arrival: stop.arrival.map(|time| time + shift),
                departure: stop.departure.map(|time| time + shift),
            })
            .collect();

        trains.push(Train::with_schedule(
            &format!("{hour:02}:{base_minute:02} Service"),
            BLUE,
            schedule,
        ));
    }

    trains
}

/// Paired express and local services: the express calls at the first
/// station, every third intermediate one and the terminus; the local
/// follows `interval` minutes later calling everywhere.
#[must_use]
pub fn express_local_pattern(
    stations: &[String],
    base_departure: i32,
    interval: i32,
) -> Vec<Train> {
    if stations.len() < 3 {
        return Vec::new();
    }

    let mut express_calls = vec![stations[0].clone()];
    for (index, station) in stations
        .iter()
        .enumerate()
        .take(stations.len() - 1)
        .skip(1)
    {
        if index % 3 == 0 {
            express_calls.push(station.clone());
        }
    }
    express_calls.push(stations[stations.len() - 1].clone());

    let local_departure = base_departure + interval;

    vec![
        Train::with_schedule(
            &format!("Express {}", format_minutes(base_departure)),
            BLUE,
            run_stops_skipping(stations, &express_calls, base_departure, 3, 1),
        ),
        Train::with_schedule(
            &format!("Local {}", format_minutes(local_departure)),
            ORANGE,
            run_stops(stations, local_departure, 2, 1),
        ),
    ]
}

/// Out-and-back shuttle pairs every `frequency` minutes between the given
/// hours, with a five-minute layover before each return leg.
#[must_use]
pub fn shuttle_pattern(
    stations: &[String],
    base_departure: i32,
    frequency: i32,
    hours: (i32, i32),
) -> Vec<Train> {
    if stations.len() < 2 || frequency <= 0 {
        return Vec::new();
    }

    let end_time = hours.1 * 60;
    let mut departure = base_departure.max(hours.0 * 60);
    let mut trains = Vec::new();

    while departure < end_time {
        let outbound = run_stops(stations, departure, 3, 1);
        let last_arrival = outbound
            .last()
            .and_then(|stop| stop.arrival)
            .unwrap_or(departure);
        let return_departure = last_arrival + 5;
        let inbound = run_stops(stations.iter().rev(), return_departure, 3, 1);

        trains.push(Train::with_schedule(
            &format!("Outbound {}", format_minutes(departure)),
            BLUE,
            outbound,
        ));
        trains.push(Train::with_schedule(
            &format!("Inbound {}", format_minutes(return_departure)),
            ORANGE,
            inbound,
        ));

        departure += frequency;
    }

    trains
}

/// High-frequency peak services: forward direction through the AM window,
/// reverse direction through the PM window, both at two minutes between
/// stations.
#[must_use]
pub fn peak_service_pattern(
    stations: &[String],
    am_peak: (i32, i32),
    pm_peak: (i32, i32),
    frequency: i32,
) -> Vec<Train> {
    if stations.len() < 2 || frequency <= 0 {
        return Vec::new();
    }

    let mut trains = Vec::new();

    let mut departure = am_peak.0 * 60;
    while departure < am_peak.1 * 60 {
        trains.push(Train::with_schedule(
            &format!("AM Peak {}", format_minutes(departure)),
            GREEN,
            run_stops(stations, departure, 2, 1),
        ));
        departure += frequency;
    }

    let mut departure = pm_peak.0 * 60;
    while departure < pm_peak.1 * 60 {
        trains.push(Train::with_schedule(
            &format!("PM Peak {}", format_minutes(departure)),
            RED,
            run_stops(stations.iter().rev(), departure, 2, 1),
        ));
        departure += frequency;
    }

    trains
}
