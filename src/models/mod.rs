pub mod input;
pub mod schedule;

pub use input::{PlanInput, Weekday};
pub use schedule::{Schedule, WeekEntry};
