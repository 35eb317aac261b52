use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TRAIN_COLOR;

/// One scheduled visit of a train to a station.
///
/// A missing arrival means the train originates here; a missing departure
/// means it terminates here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stop {
    pub station: String,
    pub arrival: Option<i32>,
    pub departure: Option<i32>,
}

impl Stop {
    #[must_use]
    pub fn new(station: &str, arrival: Option<i32>, departure: Option<i32>) -> Self {
        Self {
            station: station.to_string(),
            arrival,
            departure,
        }
    }

    /// Dwell time at this stop, when both ends are recorded. May be zero or
    /// negative for degenerate input.
    #[must_use]
    pub fn dwell(&self) -> Option<i32> {
        match (self.arrival, self.departure) {
            (Some(arrival), Some(departure)) => Some(departure - arrival),
            _ => None,
        }
    }
}

/// A train service: an ordered sequence of stops in physical visiting
/// order, which is not necessarily sorted by time or by station position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Train {
    pub name: String,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub schedule: Vec<Stop>,
}

fn default_color() -> String {
    DEFAULT_TRAIN_COLOR.to_string()
}

impl Train {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            color: default_color(),
            schedule: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_schedule(name: &str, color: &str, schedule: Vec<Stop>) -> Self {
        Self {
            name: name.to_string(),
            color: color.to_string(),
            schedule,
        }
    }

    /// Append a stop to the end of the schedule.
    pub fn add_stop(&mut self, station: &str, arrival: Option<i32>, departure: Option<i32>) {
        self.schedule.push(Stop::new(station, arrival, departure));
    }

    /// Overwrite the given fields of an existing stop; `None` leaves a field
    /// unchanged. Returns false when the index is out of range.
    pub fn update_stop(
        &mut self,
        index: usize,
        station: Option<&str>,
        arrival: Option<i32>,
        departure: Option<i32>,
    ) -> bool {
        let Some(stop) = self.schedule.get_mut(index) else {
            return false;
        };

        if let Some(station) = station {
            stop.station = station.to_string();
        }
        if let Some(arrival) = arrival {
            stop.arrival = Some(arrival);
        }
        if let Some(departure) = departure {
            stop.departure = Some(departure);
        }
        true
    }

    /// Remove the stop at `index`. Returns false when it is out of range.
    pub fn remove_stop(&mut self, index: usize) -> bool {
        if index < self.schedule.len() {
            self.schedule.remove(index);
            true
        } else {
            false
        }
    }

    /// Entry-time integrity check: a train needs a name and at least one
    /// stop.
    ///
    /// # Errors
    /// Returns a description of the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Train must have a name".to_string());
        }
        if self.schedule.is_empty() {
            return Err("Train must have at least one stop".to_string());
        }
        Ok(())
    }
}
