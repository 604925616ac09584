//! The day-schedule normalizer and its supporting parsers.

pub mod duration;
pub mod models;
pub mod normalizer;
pub mod plan;
pub mod templates;
pub mod time;

pub use models::{Activity, DayPlan, EnergyLevel, NormalizedDay, NormalizedPlan, PlanMeta};
pub use normalizer::normalize_day_activities;
pub use plan::normalize_plan_days;
