mod schedule;
mod station;
mod train;

pub use schedule::Schedule;
pub use station::Station;
pub use train::{Stop, Train};
