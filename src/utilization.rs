//! Station visit counts, overall and bucketed by hour of day.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::constants::MINUTES_PER_DAY;
use crate::models::{Station, Train};

/// How heavily each station is used by the current timetable.
///
/// Both maps list every known station, at zero if unvisited, in station
/// list order, so downstream heatmaps and bar charts render consistently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utilization {
    /// One bucket per hour of day (24 entries); each maps station name to
    /// the number of visits whose arrival falls within that hour.
    pub by_hour: Vec<IndexMap<String, u32>>,
    /// Total visits per station, counted whether or not times are recorded.
    pub by_station: IndexMap<String, u32>,
}

/// Count train visits per station and per hour-of-day bucket.
///
/// Stops referencing stations outside `stations` are skipped entirely. A
/// known-station stop always counts toward the station total; the hourly
/// bucket additionally requires an arrival time inside the day.
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub fn calculate_utilization(stations: &[Station], trains: &[Train]) -> Utilization {
    let zeroed: IndexMap<String, u32> = stations
        .iter()
        .map(|station| (station.name.clone(), 0))
        .collect();

    let mut by_hour = vec![zeroed.clone(); 24];
    let mut by_station = zeroed;

    for train in trains {
        for stop in &train.schedule {
            let Some(count) = by_station.get_mut(&stop.station) else {
                // Dangling reference: skipped here, rejected by
                // Schedule::validate before analysis in the normal flow.
                continue;
            };
            *count += 1;

            let Some(arrival) = stop.arrival else {
                continue;
            };
            if (0..MINUTES_PER_DAY).contains(&arrival) {
                let hour = (arrival / 60) as usize;
                if let Some(count) = by_hour[hour].get_mut(&stop.station) {
                    *count += 1;
                }
            }
        }
    }

    Utilization { by_hour, by_station }
}
