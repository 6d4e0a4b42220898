//! Form validation rules
//!
//! Pure rule evaluation over a PlanInput. Every applicable rule runs on every
//! call (no short-circuiting), so the caller gets the complete picture in one
//! pass. Failures are data, not errors: an empty list means the input is good.
//!
//! Key principles:
//! - Fixed rule order, stable across calls
//! - The reference date for the futurity rule is passed in, never read from
//!   a clock inside the core
//! - Message text is user-facing and part of the contract

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::{PlannerConfig, RuleSet};
use crate::models::{PlanInput, Weekday};

// ---------------------------------------------------------------------------
/// Violation: one failed rule
// ---------------------------------------------------------------------------

/// A single failed rule. Carries the configured threshold where the message
/// mentions one, so Display can render the exact text the form shows.
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    MissingTargetDate,
    TargetDateNotFuture,
    UnsupportedPlanLength { options: Vec<i64> },
    NonPositiveAvgHours,
    AvgBelowMinimum { minimum: f64 },
    NonPositivePeakHours,
    PeakBelowAverage,
    NoDaysSelected,
    TooFewDays { minimum: usize },
    NoLongRunDay { long_run_days: Vec<Weekday> },
    PerDayVeryLow { floor: f64 },
    PerDayTooLow { floor: f64 },
    PerDayTooHigh { ceiling: f64 },
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::MissingTargetDate => {
                write!(f, "Please select a target backyard ultra date.")
            }
            Violation::TargetDateNotFuture => {
                write!(f, "Target date must be in the future.")
            }
            Violation::UnsupportedPlanLength { options } => {
                write!(
                    f,
                    "Please select a training plan length ({} weeks).",
                    or_list(options)
                )
            }
            Violation::NonPositiveAvgHours => {
                write!(f, "Average weekly training hours must be a positive number.")
            }
            Violation::AvgBelowMinimum { minimum } => {
                write!(
                    f,
                    "Average weekly training is lower than the minimum of {} hrs.",
                    minimum
                )
            }
            Violation::NonPositivePeakHours => {
                write!(f, "Peak weekly training hours must be a positive number.")
            }
            Violation::PeakBelowAverage => {
                write!(
                    f,
                    "Peak weekly hours should be greater than or equal to average weekly hours."
                )
            }
            Violation::NoDaysSelected => {
                write!(f, "Select at least one training day.")
            }
            Violation::TooFewDays { minimum } => {
                write!(f, "Select at least {} training days.", minimum)
            }
            Violation::NoLongRunDay { long_run_days } => {
                write!(
                    f,
                    "Include at least one long run day ({}).",
                    or_list(long_run_days)
                )
            }
            Violation::PerDayVeryLow { floor } => {
                write!(
                    f,
                    "Average hours per selected training day is very low (<{}h). \
                     Consider adjusting days or hours.",
                    floor
                )
            }
            Violation::PerDayTooLow { floor } => {
                write!(
                    f,
                    "Average hours per selected training day is too low (<{}h).",
                    floor
                )
            }
            Violation::PerDayTooHigh { ceiling } => {
                write!(
                    f,
                    "Average hours per selected training day is too high (>{}h).",
                    ceiling
                )
            }
        }
    }
}

// Violations cross the boundary to the form layer as their message text.
impl Serialize for Violation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// "8, 12, or 16" / "Thu, Sat, or Sun" style listing for message text.
fn or_list<T: std::fmt::Display>(items: &[T]) -> String {
    match items {
        [] => String::new(),
        [only] => only.to_string(),
        [first, last] => format!("{} or {}", first, last),
        [init @ .., last] => {
            let init: Vec<String> = init.iter().map(|i| i.to_string()).collect();
            format!("{}, or {}", init.join(", "), last)
        }
    }
}

// ---------------------------------------------------------------------------
/// Rule evaluation
// ---------------------------------------------------------------------------

/// Run every applicable rule against the input, in fixed order.
///
/// `today` is the caller's one sample of the wall clock for this call; the
/// futurity rule compares calendar dates only (strictly after today passes).
pub fn validate(input: &PlanInput, config: &PlannerConfig, today: NaiveDate) -> Vec<Violation> {
    let mut violations = Vec::new();
    let single_tier = config.rule_set == RuleSet::SingleTier;
    let two_tier = config.rule_set == RuleSet::TwoTier;

    // 1. Target date presence
    if input.target_date.is_none() {
        violations.push(Violation::MissingTargetDate);
    }

    // 2. Target date strictly in the future (two-tier only)
    if two_tier {
        if let Some(date) = input.target_date {
            if date <= today {
                violations.push(Violation::TargetDateNotFuture);
            }
        }
    }

    // 3. Plan length must be one of the offered options
    if !config.plan_length_options.contains(&input.plan_length_weeks) {
        violations.push(Violation::UnsupportedPlanLength {
            options: config.plan_length_options.clone(),
        });
    }

    // 4. Average hours positive (also rejects NaN)
    if !(input.avg_hours > 0.0) {
        violations.push(Violation::NonPositiveAvgHours);
    }

    // 5. Average hours floor (single-tier only)
    if single_tier && input.avg_hours > 0.0 && input.avg_hours < config.min_avg_hours {
        violations.push(Violation::AvgBelowMinimum {
            minimum: config.min_avg_hours,
        });
    }

    // 6. Peak hours positive (two-tier only)
    if two_tier && !input.peak_hours.is_some_and(|p| p > 0.0) {
        violations.push(Violation::NonPositivePeakHours);
    }

    // 7. Peak at or above average, when both are actual numbers (two-tier only)
    if two_tier {
        if let Some(peak) = input.peak_hours {
            if !peak.is_nan() && !input.avg_hours.is_nan() && peak < input.avg_hours {
                violations.push(Violation::PeakBelowAverage);
            }
        }
    }

    let day_count = input.day_count();

    // 8. At least one training day
    if day_count == 0 {
        violations.push(Violation::NoDaysSelected);
    }

    // 9. Minimum day count (single-tier only; no non-empty guard)
    if single_tier && day_count < config.min_training_days {
        violations.push(Violation::TooFewDays {
            minimum: config.min_training_days,
        });
    }

    // 10. Long-run-day coverage (single-tier only)
    if single_tier && day_count > 0 && !input.has_any_of(&config.long_run_days) {
        violations.push(Violation::NoLongRunDay {
            long_run_days: config.long_run_days.clone(),
        });
    }

    // 11. Per-day intensity band, when the quotient is computable
    if day_count > 0 && !input.avg_hours.is_nan() {
        let per_day = input.avg_hours / day_count as f64;
        match config.rule_set {
            RuleSet::TwoTier => {
                if per_day < config.per_day_min {
                    violations.push(Violation::PerDayVeryLow {
                        floor: config.per_day_min,
                    });
                }
            }
            RuleSet::SingleTier => {
                if per_day < config.per_day_min {
                    violations.push(Violation::PerDayTooLow {
                        floor: config.per_day_min,
                    });
                } else if let Some(ceiling) = config.per_day_max {
                    if per_day > ceiling {
                        violations.push(Violation::PerDayTooHigh { ceiling });
                    }
                }
            }
        }
    }

    violations
}

// ---------------------------------------------------------------------------
/// Tests
// ---------------------------------------------------------------------------
