//! Plain-text station lists: one name per line, for quick bulk entry.

use crate::models::Station;

/// Export station names, one per line.
#[must_use]
pub fn export_stations(stations: &[Station]) -> String {
    stations
        .iter()
        .map(|station| station.name.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse a station list from text, one name per line, skipping blank
/// lines. Positions are distributed evenly over the resulting list.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn import_stations(text: &str) -> Vec<Station> {
    let names: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let divisor = if names.len() > 1 {
        (names.len() - 1) as f64
    } else {
        1.0
    };

    names
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let mut station = Station::new(name);
            station.position = index as f64 / divisor;
            station
        })
        .collect()
}
