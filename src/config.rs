//! Planner configuration
//!
//! The repository used to carry two near-identical planner modules with
//! diverging thresholds and a diverging projection. Both behaviors now live
//! in one core, selected by an explicit config value:
//! - rule_set picks which validation rules run and their thresholds
//! - load_model picks the weekly-hours projection shape

use serde::{Deserialize, Serialize};

use crate::models::Weekday;

// ---------------------------------------------------------------------------
/// Variant selectors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleSet {
    /// Average hours only, with a floor, a minimum day count, and a
    /// long-run-day coverage rule.
    SingleTier,
    /// Average plus peak hours, with futurity and peak-vs-average rules.
    TwoTier,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadModel {
    /// Every week at the average.
    Flat,
    /// Linear ramp to a peak week, then geometric taper down to the average.
    RampTaper,
}

// ---------------------------------------------------------------------------
/// Planner Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    pub rule_set: RuleSet,
    pub load_model: LoadModel,
    /// Plan lengths the form offers, in weeks.
    pub plan_length_options: Vec<i64>,
    /// Single-tier floor on average weekly hours.
    pub min_avg_hours: f64,
    /// Single-tier minimum number of distinct training days.
    pub min_training_days: usize,
    /// Single-tier: at least one selected day must come from this set.
    pub long_run_days: Vec<Weekday>,
    /// Lower bound on avg_hours / day_count. Hard floor in both variants.
    pub per_day_min: f64,
    /// Upper bound on avg_hours / day_count; None disables the check.
    pub per_day_max: Option<f64>,
    /// Zero-based peak week index = floor(plan_length_weeks * this).
    pub peak_week_fraction: f64,
    /// Week-over-week multiplier applied after the peak week.
    pub weekly_taper: f64,
}

impl PlannerConfig {
    /// Canonical configuration: average/peak inputs, ramp-and-taper plan.
    pub fn two_tier() -> Self {
        Self {
            rule_set: RuleSet::TwoTier,
            load_model: LoadModel::RampTaper,
            plan_length_options: vec![8, 12, 16],
            min_avg_hours: 0.0,
            min_training_days: 1,
            long_run_days: Vec::new(),
            per_day_min: 0.25,
            per_day_max: None,
            peak_week_fraction: 0.65,
            weekly_taper: 0.8,
        }
    }

    /// Simplified configuration: average hours only, flat plan.
    pub fn single_tier() -> Self {
        Self {
            rule_set: RuleSet::SingleTier,
            load_model: LoadModel::Flat,
            plan_length_options: vec![8, 12, 16],
            min_avg_hours: 6.0,
            min_training_days: 3,
            long_run_days: vec![Weekday::Thu, Weekday::Sat, Weekday::Sun],
            per_day_min: 1.5,
            per_day_max: Some(3.5),
            peak_week_fraction: 0.65,
            weekly_taper: 0.8,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse planner config: {}", e))
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self::two_tier()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_tier_defaults() {
        let config = PlannerConfig::two_tier();
        assert_eq!(config.rule_set, RuleSet::TwoTier);
        assert_eq!(config.load_model, LoadModel::RampTaper);
        assert_eq!(config.plan_length_options, vec![8, 12, 16]);
        assert_eq!(config.per_day_min, 0.25);
        assert_eq!(config.per_day_max, None);
    }

    #[test]
    fn test_single_tier_defaults() {
        let config = PlannerConfig::single_tier();
        assert_eq!(config.rule_set, RuleSet::SingleTier);
        assert_eq!(config.load_model, LoadModel::Flat);
        assert_eq!(config.min_avg_hours, 6.0);
        assert_eq!(config.min_training_days, 3);
        assert_eq!(
            config.long_run_days,
            vec![Weekday::Thu, Weekday::Sat, Weekday::Sun]
        );
        assert_eq!(config.per_day_max, Some(3.5));
    }

    #[test]
    fn test_config_from_json() {
        let json = PlannerConfig::single_tier().to_json();
        let parsed = PlannerConfig::from_json(&json).expect("Should parse config");
        assert_eq!(parsed.rule_set, RuleSet::SingleTier);
        assert_eq!(parsed.min_avg_hours, 6.0);
    }

    #[test]
    fn test_config_from_json_rejects_garbage() {
        assert!(PlannerConfig::from_json("{\"rule_set\": 12}").is_err());
    }
}
