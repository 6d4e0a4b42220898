use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the projected plan. `week` is 1-based for display;
/// `planned_hours` is already rounded to one decimal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekEntry {
  pub week: i64,
  pub planned_hours: f64,
}

/// Projected training block. Recomputed on every call, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
  /// target_date minus plan_length_weeks * 7 days.
  pub start_date: NaiveDate,
  pub weeks: Vec<WeekEntry>,
}
