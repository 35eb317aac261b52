use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A railway station known to a schedule.
///
/// `position` is the station's relative place along the line in `[0, 1]`,
/// maintained by [`Schedule`](super::Schedule) whenever stations are added
/// or removed. `constraints` is an open map (e.g. a minimum dwell time) that
/// the engine does not interpret but carries through snapshots untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub name: String,
    #[serde(default)]
    pub position: f64,
    #[serde(default)]
    pub constraints: IndexMap<String, serde_json::Value>,
}

impl Station {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            position: 0.0,
            constraints: IndexMap::new(),
        }
    }

    /// A station is usable once it has a non-blank name.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
    }
}
