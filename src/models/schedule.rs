use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{Station, Train};

/// Aggregate of stations and trains making up one timetable.
///
/// Station insertion order is significant: positions are evenly
/// redistributed over the ordered list after every add or remove, and the
/// order also drives default visualization layout downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(default = "default_schedule_name")]
    pub name: String,
    #[serde(default)]
    pub stations: Vec<Station>,
    #[serde(default)]
    pub trains: Vec<Train>,
}

fn default_schedule_name() -> String {
    "Imported Schedule".to_string()
}

impl Default for Schedule {
    fn default() -> Self {
        Self::new("New Schedule")
    }
}

impl Schedule {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            stations: Vec::new(),
            trains: Vec::new(),
        }
    }

    /// Add a station, rejecting duplicates by name. Returns whether it was
    /// added; positions are redistributed on success.
    pub fn add_station(&mut self, station: Station) -> bool {
        if self.stations.iter().any(|s| s.name == station.name) {
            return false;
        }
        self.stations.push(station);
        self.recalculate_positions();
        true
    }

    /// Add several stations in order; returns how many were actually added.
    pub fn add_stations(&mut self, stations: Vec<Station>) -> usize {
        let mut added = 0;
        for station in stations {
            if self.add_station(station) {
                added += 1;
            }
        }
        added
    }

    /// Remove a station by name. Positions are redistributed on success.
    pub fn remove_station(&mut self, name: &str) -> bool {
        let Some(index) = self.stations.iter().position(|s| s.name == name) else {
            return false;
        };
        self.stations.remove(index);
        self.recalculate_positions();
        true
    }

    /// Spread stations evenly over `[0, 1]` in list order.
    #[allow(clippy::cast_precision_loss)]
    fn recalculate_positions(&mut self) {
        let count = self.stations.len();
        let divisor = if count > 1 { (count - 1) as f64 } else { 1.0 };
        for (index, station) in self.stations.iter_mut().enumerate() {
            station.position = index as f64 / divisor;
        }
    }

    /// Add a train, rejecting duplicates by name.
    pub fn add_train(&mut self, train: Train) -> bool {
        if self.trains.iter().any(|t| t.name == train.name) {
            return false;
        }
        self.trains.push(train);
        true
    }

    /// Remove a train by name.
    pub fn remove_train(&mut self, name: &str) -> bool {
        let Some(index) = self.trains.iter().position(|t| t.name == name) else {
            return false;
        };
        self.trains.remove(index);
        true
    }

    #[must_use]
    pub fn station(&self, name: &str) -> Option<&Station> {
        self.stations.iter().find(|s| s.name == name)
    }

    #[must_use]
    pub fn train(&self, name: &str) -> Option<&Train> {
        self.trains.iter().find(|t| t.name == name)
    }

    /// Check the whole schedule for referential integrity.
    ///
    /// # Errors
    /// Returns a description of the first problem found: missing stations or
    /// trains, duplicate names, or a stop referencing an unknown station.
    pub fn validate(&self) -> Result<(), String> {
        if self.stations.is_empty() {
            return Err("Schedule must have at least one station".to_string());
        }
        if self.trains.is_empty() {
            return Err("Schedule must have at least one train".to_string());
        }

        let mut station_names = HashSet::new();
        for station in &self.stations {
            if !station_names.insert(station.name.as_str()) {
                return Err("Duplicate station names found".to_string());
            }
        }

        let mut train_names = HashSet::new();
        for train in &self.trains {
            if !train_names.insert(train.name.as_str()) {
                return Err("Duplicate train names found".to_string());
            }
        }

        for train in &self.trains {
            for stop in &train.schedule {
                if !station_names.contains(stop.station.as_str()) {
                    return Err(format!(
                        "Train {} references unknown station: {}",
                        train.name, stop.station
                    ));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule_with_stations(names: &[&str]) -> Schedule {
        let mut schedule = Schedule::new("Test");
        for name in names {
            schedule.add_station(Station::new(name));
        }
        schedule
    }

    #[test]
    fn test_positions_evenly_distributed() {
        let schedule = schedule_with_stations(&["A", "B", "C"]);
        let positions: Vec<f64> = schedule.stations.iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_single_station_sits_at_zero() {
        let schedule = schedule_with_stations(&["A"]);
        assert_eq!(schedule.stations[0].position, 0.0);
    }

    #[test]
    fn test_add_station_rejects_duplicates() {
        let mut schedule = schedule_with_stations(&["A"]);
        assert!(!schedule.add_station(Station::new("A")));
        assert_eq!(schedule.stations.len(), 1);
    }

    #[test]
    fn test_add_stations_counts_additions() {
        let mut schedule = schedule_with_stations(&["A"]);
        let added = schedule.add_stations(vec![
            Station::new("A"),
            Station::new("B"),
            Station::new("C"),
        ]);
        assert_eq!(added, 2);
        assert_eq!(schedule.stations.len(), 3);
    }

    #[test]
    fn test_remove_station_recalculates_positions() {
        let mut schedule = schedule_with_stations(&["A", "B", "C"]);
        assert!(schedule.remove_station("B"));

        let positions: Vec<f64> = schedule.stations.iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![0.0, 1.0]);
        assert!(!schedule.remove_station("B"));
    }

    #[test]
    fn test_train_management() {
        let mut schedule = schedule_with_stations(&["A"]);
        assert!(schedule.add_train(Train::new("IC 100")));
        assert!(!schedule.add_train(Train::new("IC 100")));
        assert!(schedule.train("IC 100").is_some());
        assert!(schedule.remove_train("IC 100"));
        assert!(!schedule.remove_train("IC 100"));
    }

    #[test]
    fn test_validate_requires_content() {
        let empty = Schedule::new("Empty");
        assert_eq!(
            empty.validate(),
            Err("Schedule must have at least one station".to_string())
        );

        let no_trains = schedule_with_stations(&["A"]);
        assert_eq!(
            no_trains.validate(),
            Err("Schedule must have at least one train".to_string())
        );
    }

    #[test]
    fn test_validate_rejects_unknown_station_reference() {
        let mut schedule = schedule_with_stations(&["A"]);
        let mut train = Train::new("IC 100");
        train.add_stop("Nowhere", Some(480), None);
        schedule.add_train(train);

        let error = schedule.validate().expect_err("should reject");
        assert!(error.contains("unknown station"));
        assert!(error.contains("Nowhere"));
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        // Duplicates can only appear when the vectors are built directly,
        // bypassing add_station/add_train.
        let schedule = Schedule {
            name: "Test".to_string(),
            stations: vec![Station::new("A"), Station::new("A")],
            trains: vec![Train::new("T")],
        };
        assert_eq!(
            schedule.validate(),
            Err("Duplicate station names found".to_string())
        );
    }

    #[test]
    fn test_validate_accepts_consistent_schedule() {
        let mut schedule = schedule_with_stations(&["A", "B"]);
        let mut train = Train::new("IC 100");
        train.add_stop("A", None, Some(480));
        train.add_stop("B", Some(490), None);
        schedule.add_train(train);

        assert_eq!(schedule.validate(), Ok(()));
    }
}
