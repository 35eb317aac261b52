//! Schedule analysis engine for railway timetable planning.
//!
//! The crate takes `Station` and `Train` records built by an outer UI layer
//! and answers three questions about them: where trains are scheduled too
//! close together ([`conflict`]), how heavily each station is used
//! ([`utilization`]) and how each train performs ([`metrics`]). Times are
//! integer minutes since midnight throughout; [`time`] converts to and from
//! the human-facing formats.
//!
//! All analyses are pure functions over borrowed snapshots: nothing here
//! mutates its input, does I/O or holds global state, so the three reports
//! can be computed independently and in any order.

pub mod conflict;
pub mod constants;
pub mod metrics;
pub mod models;
pub mod storage;
pub mod templates;
pub mod time;
pub mod utilization;

pub use conflict::{detect_conflicts, detect_conflicts_with_separation, Conflict, ConflictType};
pub use metrics::{calculate_metrics, ScheduleMetrics, TrainMetrics};
pub use models::{Schedule, Station, Stop, Train};
pub use utilization::{calculate_utilization, Utilization};
