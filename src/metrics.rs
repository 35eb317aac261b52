//! Per-train and fleet-wide performance metrics.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::Train;

/// Metrics for a single train with at least one stop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainMetrics {
    pub name: String,
    pub stops: usize,
    /// Minutes between the first departure and the last arrival; zero when
    /// either end is unknown.
    pub journey_time: i32,
    /// Mean dwell over the stops recording both arrival and departure.
    pub avg_dwell: f64,
    /// Stations per minute over the whole journey; zero when the journey
    /// time is unknown or not positive.
    pub avg_speed: f64,
}

/// Fleet-wide aggregates over a set of trains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleMetrics {
    pub total_trains: usize,
    pub total_stops: usize,
    pub avg_stops: f64,
    pub avg_dwell: f64,
    pub per_train: Vec<TrainMetrics>,
}

/// Compute dwell, journey time and speed per train plus fleet averages.
///
/// Trains with no stops keep their place in `total_trains` but contribute
/// nothing else and get no per-train row. Missing time data degrades the
/// affected figure to zero; nothing in here fails.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn calculate_metrics(trains: &[Train]) -> ScheduleMetrics {
    let total_trains = trains.len();
    let mut total_stops = 0usize;
    let mut total_dwell = 0i64;
    let mut dwell_count = 0u32;
    let mut per_train = Vec::new();

    for train in trains {
        if train.schedule.is_empty() {
            continue;
        }

        let stops = train.schedule.len();
        total_stops += stops;

        let mut train_dwell = 0i64;
        let mut train_dwell_count = 0u32;
        for stop in &train.schedule {
            if let Some(dwell) = stop.dwell() {
                train_dwell += i64::from(dwell);
                train_dwell_count += 1;
                total_dwell += i64::from(dwell);
                dwell_count += 1;
            }
        }

        let (journey_time, avg_speed) = journey_stats(train, stops);

        per_train.push(TrainMetrics {
            name: train.name.clone(),
            stops,
            journey_time,
            avg_dwell: mean(train_dwell, train_dwell_count),
            avg_speed,
        });
    }

    debug!(total_trains, total_stops, "metrics computed");

    ScheduleMetrics {
        total_trains,
        total_stops,
        avg_stops: if total_trains > 0 {
            total_stops as f64 / total_trains as f64
        } else {
            0.0
        },
        avg_dwell: mean(total_dwell, dwell_count),
        per_train,
    }
}

/// Journey time and average speed; both zero unless the train has two or
/// more stops and resolvable end times.
#[allow(clippy::cast_precision_loss)]
fn journey_stats(train: &Train, stops: usize) -> (i32, f64) {
    if stops < 2 {
        return (0, 0.0);
    }

    let (Some(first), Some(last)) = (train.schedule.first(), train.schedule.last()) else {
        return (0, 0.0);
    };

    let first_time = first.departure.or(first.arrival);
    let last_time = last.arrival.or(last.departure);

    let (Some(first_time), Some(last_time)) = (first_time, last_time) else {
        return (0, 0.0);
    };

    let journey_time = last_time - first_time;
    let avg_speed = if journey_time > 0 {
        (stops - 1) as f64 / f64::from(journey_time)
    } else {
        0.0
    };

    (journey_time, avg_speed)
}

#[allow(clippy::cast_precision_loss)]
fn mean(total: i64, count: u32) -> f64 {
    if count > 0 {
        total as f64 / f64::from(count)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Stop;

    fn train(name: &str, stops: &[(&str, Option<i32>, Option<i32>)]) -> Train {
        let schedule = stops
            .iter()
            .map(|(station, arrival, departure)| Stop::new(station, *arrival, *departure))
            .collect();
        Train::with_schedule(name, "#1f77b4", schedule)
    }

    #[test]
    fn test_no_trains_yields_zeroes() {
        let metrics = calculate_metrics(&[]);
        assert_eq!(metrics.total_trains, 0);
        assert_eq!(metrics.total_stops, 0);
        assert_eq!(metrics.avg_stops, 0.0);
        assert_eq!(metrics.avg_dwell, 0.0);
        assert!(metrics.per_train.is_empty());
    }

    #[test]
    fn test_journey_from_first_departure_to_last_arrival() {
        let trains = vec![train(
            "T1",
            &[("A", None, Some(480)), ("B", Some(500), None)],
        )];
        let metrics = calculate_metrics(&trains);

        let t1 = &metrics.per_train[0];
        assert_eq!(t1.stops, 2);
        assert_eq!(t1.journey_time, 20);
        assert_eq!(t1.avg_speed, 0.05);
        // No stop records both ends, so dwell is undefined and reported 0.
        assert_eq!(t1.avg_dwell, 0.0);
        assert_eq!(metrics.avg_dwell, 0.0);
    }

    #[test]
    fn test_end_times_fall_back_when_missing() {
        // First stop has no departure: its arrival is used. Last stop has
        // no arrival: its departure is used.
        let trains = vec![train(
            "T1",
            &[("A", Some(480), None), ("B", None, Some(510))],
        )];
        let metrics = calculate_metrics(&trains);
        assert_eq!(metrics.per_train[0].journey_time, 30);
    }

    #[test]
    fn test_missing_end_time_reports_zero() {
        let trains = vec![train("T1", &[("A", None, None), ("B", Some(500), None)])];
        let metrics = calculate_metrics(&trains);

        let t1 = &metrics.per_train[0];
        assert_eq!(t1.journey_time, 0);
        assert_eq!(t1.avg_speed, 0.0);
    }

    #[test]
    fn test_non_positive_journey_zeroes_speed_only() {
        let trains = vec![train(
            "T1",
            &[("A", None, Some(500)), ("B", Some(480), None)],
        )];
        let metrics = calculate_metrics(&trains);

        let t1 = &metrics.per_train[0];
        assert_eq!(t1.journey_time, -20);
        assert_eq!(t1.avg_speed, 0.0);
    }

    #[test]
    fn test_single_stop_train_has_no_journey() {
        let trains = vec![train("T1", &[("A", Some(480), Some(485))])];
        let metrics = calculate_metrics(&trains);

        let t1 = &metrics.per_train[0];
        assert_eq!(t1.stops, 1);
        assert_eq!(t1.journey_time, 0);
        assert_eq!(t1.avg_speed, 0.0);
        assert_eq!(t1.avg_dwell, 5.0);
    }

    #[test]
    fn test_dwell_averages_per_train_and_fleet() {
        let trains = vec![
            train(
                "T1",
                &[("A", Some(480), Some(482)), ("B", Some(490), Some(494))],
            ),
            train("T2", &[("A", Some(500), Some(506)), ("B", Some(510), None)]),
        ];
        let metrics = calculate_metrics(&trains);

        assert_eq!(metrics.per_train[0].avg_dwell, 3.0);
        assert_eq!(metrics.per_train[1].avg_dwell, 6.0);
        // Fleet average divides by qualifying stops (3), not trains.
        assert_eq!(metrics.avg_dwell, 4.0);
    }

    #[test]
    fn test_empty_trains_count_toward_total_only() {
        let trains = vec![
            train("Empty", &[]),
            train("T1", &[("A", None, Some(480)), ("B", Some(490), None)]),
        ];
        let metrics = calculate_metrics(&trains);

        assert_eq!(metrics.total_trains, 2);
        assert_eq!(metrics.total_stops, 2);
        assert_eq!(metrics.avg_stops, 1.0);
        assert_eq!(metrics.per_train.len(), 1);
        assert_eq!(metrics.per_train[0].name, "T1");
    }

    #[test]
    fn test_metrics_are_idempotent() {
        let trains = vec![train(
            "T1",
            &[("A", Some(480), Some(481)), ("B", Some(490), None)],
        )];
        assert_eq!(calculate_metrics(&trains), calculate_metrics(&trains));
    }
}
