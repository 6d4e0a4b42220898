use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Training day label, short form as shown on the form ("Mon".."Sun").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
  Mon,
  Tue,
  Wed,
  Thu,
  Fri,
  Sat,
  Sun,
}

impl Weekday {
  pub fn as_str(&self) -> &'static str {
    match self {
      Weekday::Mon => "Mon",
      Weekday::Tue => "Tue",
      Weekday::Wed => "Wed",
      Weekday::Thu => "Thu",
      Weekday::Fri => "Fri",
      Weekday::Sat => "Sat",
      Weekday::Sun => "Sun",
    }
  }
}

impl std::fmt::Display for Weekday {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl std::str::FromStr for Weekday {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "Mon" => Ok(Weekday::Mon),
      "Tue" => Ok(Weekday::Tue),
      "Wed" => Ok(Weekday::Wed),
      "Thu" => Ok(Weekday::Thu),
      "Fri" => Ok(Weekday::Fri),
      "Sat" => Ok(Weekday::Sat),
      "Sun" => Ok(Weekday::Sun),
      _ => Err(format!("Unknown weekday label: {}", s)),
    }
  }
}

/// Normalized form input. Built by the caller from raw field reads; carries
/// whatever the user typed (NaN hours, out-of-range weeks) so the validator
/// can report every problem at once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanInput {
  pub target_date: Option<NaiveDate>,
  pub plan_length_weeks: i64,
  pub avg_hours: f64,
  /// Two-tier variant only; None when the form has no peak field.
  #[serde(default)]
  pub peak_hours: Option<f64>,
  pub selected_days: Vec<Weekday>,
}

impl PlanInput {
  /// Selected days with duplicates dropped, first-seen order preserved.
  /// Duplicate labels in the raw input carry no meaning.
  pub fn distinct_days(&self) -> Vec<Weekday> {
    let mut seen = Vec::new();
    for day in &self.selected_days {
      if !seen.contains(day) {
        seen.push(*day);
      }
    }
    seen
  }

  pub fn day_count(&self) -> usize {
    self.distinct_days().len()
  }

  pub fn has_any_of(&self, days: &[Weekday]) -> bool {
    self.selected_days.iter().any(|d| days.contains(d))
  }
}
