//! Flat snapshot import/export: JSON round-trips, CSV timetables and plain
//! text station lists. Nothing here touches the filesystem; callers decide
//! where the strings go.

pub mod csv;
pub mod json;
pub mod text;

/// Build a timestamped download filename for an exported schedule, with
/// filesystem-hostile characters replaced.
#[must_use]
pub fn export_filename(schedule_name: &str, extension: &str) -> String {
    let now = chrono::Utc::now();
    format!(
        "{}.{}.{}",
        schedule_name.replace(['/', '\\', ':', '*', '?', '"', '<', '>', '|'], "_"),
        now.format("%Y-%m-%d-%H%M%S"),
        extension
    )
}
