//! Backyard ultra training planner core
//!
//! Pure data-in/data-out engine behind the plan form: the caller reads the
//! raw fields, builds a [`PlanInput`], and either shows the violation list
//! from [`validate`] or the projected [`Schedule`] from [`generate`]. The
//! core never touches the environment; the reference date for the futurity
//! rule is passed in by the caller.

pub mod config;
pub mod models;
pub mod projection;
pub mod validation;

pub use config::{LoadModel, PlannerConfig, RuleSet};
pub use models::{PlanInput, Schedule, Weekday, WeekEntry};
pub use projection::{generate, ScheduleError};
pub use validation::{validate, Violation};
