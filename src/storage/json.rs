//! JSON schedule snapshots: the canonical round-trip format.

use tracing::warn;

use crate::models::Schedule;

/// Serialize a schedule to the interchange JSON snapshot
/// (`{name, stations, trains}`, times as integer minutes or null).
///
/// # Errors
/// Returns an error if serialization fails.
pub fn export_schedule(schedule: &Schedule) -> Result<String, String> {
    serde_json::to_string_pretty(schedule)
        .map_err(|e| format!("Failed to serialize schedule: {e}"))
}

/// Parse a schedule from its JSON snapshot.
///
/// Malformed payloads indicate a caller bug rather than bad schedule data,
/// so this fails fast with a descriptive error instead of degrading.
///
/// # Errors
/// Returns an error describing why the payload could not be parsed.
pub fn import_schedule(json: &str) -> Result<Schedule, String> {
    serde_json::from_str(json).map_err(|e| {
        warn!("schedule import failed: {e}");
        format!("Failed to parse schedule: {e}")
    })
}
