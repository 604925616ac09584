pub mod config;
pub mod error;
pub mod schedule;

pub use config::NormalizeOptions;
pub use schedule::{normalize_day_activities, normalize_plan_days};
