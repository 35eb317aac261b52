//! Core types for conflict detection.

use serde::{Deserialize, Serialize};

/// Which pair of recorded movements collided at the shared station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConflictType {
    ArrivalArrival,
    DepartureDeparture,
    ArrivalDeparture,
    DepartureArrival,
}

impl ConflictType {
    /// Display label, e.g. for a conflict table column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ArrivalArrival => "Arrival-Arrival",
            Self::DepartureDeparture => "Departure-Departure",
            Self::ArrivalDeparture => "Arrival-Departure",
            Self::DepartureArrival => "Departure-Arrival",
        }
    }
}

/// Two trains scheduled closer together than the minimum separation at a
/// station they both serve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    pub train1: String,
    pub train2: String,
    pub station: String,
    /// Earlier of the two colliding times, minutes since midnight.
    pub time: i32,
    pub conflict_type: ConflictType,
    /// Absolute gap between the two movements, minutes.
    pub difference: i32,
}

impl Conflict {
    /// Format a human-readable message describing the conflict.
    #[must_use]
    pub fn format_message(&self) -> String {
        format!(
            "{} conflicts with {} at {} ({}, {} min apart)",
            self.train1,
            self.train2,
            self.station,
            self.conflict_type.as_str(),
            self.difference
        )
    }
}
