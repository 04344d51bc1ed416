//! Meeting scheduling engine
//!
//! Pure computation: a series' recurrence fields are first converted into a
//! typed rule (rejecting inconsistent field combinations), then expanded over
//! a date window into concrete occurrence dates.

pub mod generator;
pub mod recurrence;

pub use generator::{MeetingOverrides, generate_occurrences, materialize_meeting};
pub use recurrence::{MonthlyRule, Recurrence};
