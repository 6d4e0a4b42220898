//! Weekly-hours projection
//!
//! Turns a validated PlanInput into a placeholder training block. Two load
//! shapes share one generator, selected by config:
//! - Flat: every week at the average
//! - RampTaper: linear build from average to a peak week at ~65% of the
//!   plan, then a geometric taper that never drops below the average
//!
//! The generator assumes validated input; a record that would not pass its
//! structural checks comes back as an explicit error, never a partial plan.

use chrono::Duration;
use serde::Serialize;

use crate::config::{LoadModel, PlannerConfig};
use crate::models::{PlanInput, Schedule, WeekEntry};

// ---------------------------------------------------------------------------
/// Error Handling
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    #[error("Cannot generate a schedule without a target date")]
    MissingTargetDate,
    #[error("Plan length of {0} weeks is not one of the offered options")]
    UnsupportedPlanLength(i64),
    #[error("Average weekly hours must be a positive number")]
    NonPositiveAvgHours,
    #[error("Peak weekly hours must be a positive number for a ramp plan")]
    NonPositivePeakHours,
    #[error("Peak weekly hours must be at or above the average")]
    PeakBelowAverage,
}

impl Serialize for ScheduleError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

// ---------------------------------------------------------------------------
/// Generation
// ---------------------------------------------------------------------------

/// Project the weekly plan for a validated input.
///
/// Preconditions mirror the validator's structural rules: target date
/// present, plan length offered, positive average, and (ramp model only) a
/// positive peak at or above the average. The futurity rule is deliberately
/// not re-checked here; a plan for a past date is still well-defined.
pub fn generate(input: &PlanInput, config: &PlannerConfig) -> Result<Schedule, ScheduleError> {
    let target_date = input.target_date.ok_or(ScheduleError::MissingTargetDate)?;
    if !config.plan_length_options.contains(&input.plan_length_weeks) {
        return Err(ScheduleError::UnsupportedPlanLength(input.plan_length_weeks));
    }
    if !(input.avg_hours > 0.0) {
        return Err(ScheduleError::NonPositiveAvgHours);
    }

    let peak_hours = match config.load_model {
        LoadModel::Flat => None,
        LoadModel::RampTaper => {
            let peak = input
                .peak_hours
                .filter(|p| *p > 0.0)
                .ok_or(ScheduleError::NonPositivePeakHours)?;
            if peak < input.avg_hours {
                return Err(ScheduleError::PeakBelowAverage);
            }
            Some(peak)
        }
    };

    let total_weeks = input.plan_length_weeks;
    let start_date = target_date - Duration::days(total_weeks * 7);
    let peak_week = (total_weeks as f64 * config.peak_week_fraction).floor() as i64;

    let weeks = (0..total_weeks)
        .map(|w| WeekEntry {
            week: w + 1,
            planned_hours: round1(week_hours(
                w,
                peak_week,
                input.avg_hours,
                peak_hours,
                config.weekly_taper,
            )),
        })
        .collect();

    Ok(Schedule { start_date, weeks })
}

/// Raw (unrounded) hours for zero-based week index `w`. `peak_hours == None`
/// is the flat model.
fn week_hours(w: i64, peak_week: i64, avg: f64, peak_hours: Option<f64>, taper: f64) -> f64 {
    let Some(peak) = peak_hours else {
        return avg;
    };
    if w < peak_week {
        lerp(avg, peak, w as f64, 0.0, peak_week as f64)
    } else if w == peak_week {
        peak
    } else {
        (peak * taper.powi((w - peak_week) as i32)).max(avg)
    }
}

/// Linear interpolation of x over [x0, x1] mapping y0 -> y1. A degenerate
/// range (x1 == x0, single-week ramp) yields y0 rather than dividing by zero.
fn lerp(y0: f64, y1: f64, x: f64, x0: f64, x1: f64) -> f64 {
    if x1 == x0 {
        y0
    } else {
        y0 + (y1 - y0) * (x - x0) / (x1 - x0)
    }
}

/// Round half-up on the tenths digit.
pub fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

// ---------------------------------------------------------------------------
/// Tests
// ---------------------------------------------------------------------------
