/// Minutes in one day; schedule times live in `[0, 1440)`.
pub const MINUTES_PER_DAY: i32 = 24 * 60;

/// Default minimum separation between train movements at a shared station,
/// in minutes.
pub const DEFAULT_MIN_SEPARATION: i32 = 2;

/// Start of the displayed day when a schedule has no parseable times (06:00).
pub const DEFAULT_DAY_START: i32 = 6 * 60;

/// End of the displayed day when a schedule has no parseable times (22:00).
pub const DEFAULT_DAY_END: i32 = 22 * 60;

/// Display color for trains created without an explicit color.
pub const DEFAULT_TRAIN_COLOR: &str = "#1f77b4";
