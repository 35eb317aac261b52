//! Pairwise schedule conflict detection.
//!
//! Every unordered pair of trains is compared at each station both serve.
//! Only the first stop a train makes at a given station participates: a
//! train that loops back to a station it already visited is counted once,
//! at its first visit. Shared stations are checked in sorted name order so
//! that output is reproducible regardless of hash state.

mod types;

pub use types::{Conflict, ConflictType};

use indexmap::IndexMap;
use tracing::debug;

use crate::constants::DEFAULT_MIN_SEPARATION;
use crate::models::{Stop, Train};

/// Detect conflicts between all train pairs using the default two-minute
/// separation window.
#[must_use]
pub fn detect_conflicts(trains: &[Train]) -> Vec<Conflict> {
    detect_conflicts_with_separation(trains, DEFAULT_MIN_SEPARATION)
}

/// Detect all pairs of train movements at shared stations that are closer
/// together than `min_separation` minutes.
///
/// The comparison is strict, so a separation of zero can never flag
/// anything: `|t1 - t2| < 0` is unsatisfiable, and exact ties pass. Callers
/// that want exact ties flagged must ask for a separation of at least 1.
#[must_use]
pub fn detect_conflicts_with_separation(trains: &[Train], min_separation: i32) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    for (i, train1) in trains.iter().enumerate() {
        for train2 in &trains[i + 1..] {
            check_pair(train1, train2, min_separation, &mut conflicts);
        }
    }

    debug!(
        trains = trains.len(),
        conflicts = conflicts.len(),
        "conflict detection finished"
    );

    conflicts
}

/// First stop per station name, in visiting order.
fn first_stops(train: &Train) -> IndexMap<&str, &Stop> {
    let mut stops = IndexMap::new();
    for stop in &train.schedule {
        stops.entry(stop.station.as_str()).or_insert(stop);
    }
    stops
}

/// Compare one pair of trains at every station they share.
fn check_pair(
    train1: &Train,
    train2: &Train,
    min_separation: i32,
    conflicts: &mut Vec<Conflict>,
) {
    let stops1 = first_stops(train1);
    let stops2 = first_stops(train2);

    let mut shared: Vec<&str> = stops1
        .keys()
        .filter(|name| stops2.contains_key(*name))
        .copied()
        .collect();
    shared.sort_unstable();

    for station in shared {
        let (Some(stop1), Some(stop2)) = (stops1.get(station), stops2.get(station)) else {
            continue;
        };

        for (conflict_type, time1, time2) in [
            (ConflictType::ArrivalArrival, stop1.arrival, stop2.arrival),
            (ConflictType::DepartureDeparture, stop1.departure, stop2.departure),
            (ConflictType::ArrivalDeparture, stop1.arrival, stop2.departure),
            (ConflictType::DepartureArrival, stop1.departure, stop2.arrival),
        ] {
            let (Some(time1), Some(time2)) = (time1, time2) else {
                continue;
            };

            let difference = (time1 - time2).abs();
            if difference < min_separation {
                conflicts.push(Conflict {
                    train1: train1.name.clone(),
                    train2: train2.name.clone(),
                    station: station.to_string(),
                    time: time1.min(time2),
                    conflict_type,
                    difference,
                });
            }
        }
    }
}
