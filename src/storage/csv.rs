//! CSV timetable export: one block per train, readable in a spreadsheet.

use crate::models::Schedule;
use crate::time::{format_duration, format_minutes};

/// Export a schedule as per-train timetables in CSV form.
///
/// Layout: a header row with the schedule name and export timestamp, a
/// blank line, then for each train a `Train: <name>` row, a column header
/// row, one row per stop and a trailing blank line. Times render as
/// `HH:MM`; missing times and dwells render as empty cells.
///
/// # Errors
/// Returns an error if CSV serialization fails.
pub fn export_schedule(schedule: &Schedule) -> Result<String, String> {
    let mut lines = Vec::new();

    lines.push(csv_line(&[
        &format!("Schedule: {}", schedule.name),
        &chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    ])?);
    lines.push(String::new());

    for train in &schedule.trains {
        lines.push(csv_line(&[&format!("Train: {}", train.name)])?);
        lines.push(csv_line(&["Station", "Arrival", "Departure", "Dwell time"])?);

        for stop in &train.schedule {
            let arrival = stop.arrival.map(format_minutes).unwrap_or_default();
            let departure = stop.departure.map(format_minutes).unwrap_or_default();
            let dwell = stop.dwell().map(format_duration).unwrap_or_default();
            lines.push(csv_line(&[&stop.station, &arrival, &departure, &dwell])?);
        }

        lines.push(String::new());
    }

    let mut out = lines.join("\n");
    out.push('\n');
    Ok(out)
}

/// Render one CSV record, quoting fields as needed. Records are joined by
/// hand so the blank separator lines stay genuinely blank.
fn csv_line(fields: &[&str]) -> Result<String, String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(fields)
        .map_err(|e| format!("Failed to write CSV: {e}"))?;
    let bytes = writer
        .into_inner()
        .map_err(|e| format!("Failed to write CSV: {e}"))?;
    let line = String::from_utf8(bytes).map_err(|e| format!("Failed to encode CSV: {e}"))?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
