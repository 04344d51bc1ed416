//! Occurrence generation
//!
//! Expands a series over a window and turns the resulting dates into meeting
//! payloads. Both functions are pure; persistence and roster resolution stay
//! with the caller, which keeps regeneration safely re-invocable.

use std::collections::HashSet;

use chrono::NaiveDate;

use shared::models::{MeetingCreate, MeetingSeries};
use shared::validate::ValidationError;

use super::recurrence::Recurrence;

/// Per-occurrence deviations from the series defaults
#[derive(Debug, Clone, Default)]
pub struct MeetingOverrides {
    pub name: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub attendee_uids: Option<Vec<String>>,
}

/// Occurrence dates of `series` inside [start, end] that are not yet
/// materialized. Ascending, no duplicates; rerunning with the same
/// `existing` set yields nothing new, making regeneration idempotent.
///
/// An inconsistent recurrence rule is rejected here, before any date
/// is produced.
pub fn generate_occurrences(
    series: &MeetingSeries,
    start: NaiveDate,
    end: NaiveDate,
    existing: &HashSet<NaiveDate>,
) -> Result<Vec<NaiveDate>, ValidationError> {
    let rule = Recurrence::from_series(series)?;
    Ok(rule
        .expand(start, end)
        .into_iter()
        .filter(|d| !existing.contains(d))
        .collect())
}

/// Build the meeting payload for one occurrence date, series defaults
/// filled in unless overridden
pub fn materialize_meeting(
    series: &MeetingSeries,
    date: NaiveDate,
    overrides: &MeetingOverrides,
) -> MeetingCreate {
    MeetingCreate {
        series_id: series.id.clone(),
        name: overrides.name.clone().unwrap_or_else(|| series.name.clone()),
        date,
        time: overrides
            .time
            .clone()
            .unwrap_or_else(|| series.default_time.clone()),
        location: overrides
            .location
            .clone()
            .unwrap_or_else(|| series.default_location.clone()),
        description: overrides
            .description
            .clone()
            .or_else(|| series.description.clone()),
        image_url: overrides
            .image_url
            .clone()
            .or_else(|| series.default_image_url.clone()),
        attendee_uids: overrides.attendee_uids.clone().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{
        DayOfWeek, MeetingFrequency, MeetingSeriesCreate, MonthlyRuleType, TargetGroup,
    };

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn base_create() -> MeetingSeriesCreate {
        MeetingSeriesCreate {
            name: "Workers meeting".into(),
            description: Some("Monthly coordination".into()),
            default_time: "18:00".into(),
            default_location: "Room 2".into(),
            default_image_url: None,
            target_attendee_groups: vec![TargetGroup::Workers],
            frequency: MeetingFrequency::Weekly,
            one_time_date: None,
            weekly_days: vec![DayOfWeek::Wednesday],
            monthly_rule_type: None,
            monthly_day_of_month: None,
            monthly_week_ordinal: None,
            monthly_day_of_week: None,
        }
    }

    #[test]
    fn regeneration_skips_materialized_dates() {
        let series = MeetingSeries::from_create(base_create());
        let window = (date(2025, 6, 1), date(2025, 6, 30));

        let first = generate_occurrences(&series, window.0, window.1, &HashSet::new()).unwrap();
        assert_eq!(first.len(), 4); // Wednesdays: 4, 11, 18, 25

        let existing: HashSet<NaiveDate> = first.iter().copied().collect();
        let second = generate_occurrences(&series, window.0, window.1, &existing).unwrap();
        assert!(second.is_empty());
    }

    #[test]
    fn inconsistent_rule_rejected_before_generation() {
        let mut create = base_create();
        create.frequency = MeetingFrequency::Monthly;
        create.monthly_rule_type = Some(MonthlyRuleType::DayOfMonth);
        // monthly_day_of_month intentionally absent
        let series = MeetingSeries::from_create(create);

        let err =
            generate_occurrences(&series, date(2025, 1, 1), date(2025, 12, 31), &HashSet::new())
                .unwrap_err();
        assert_eq!(err.issues()[0].field, "monthlyDayOfMonth");
    }

    #[test]
    fn materialized_meeting_uses_series_defaults() {
        let series = MeetingSeries::from_create(base_create());
        let meeting = materialize_meeting(&series, date(2025, 6, 4), &MeetingOverrides::default());

        assert_eq!(meeting.series_id, series.id);
        assert_eq!(meeting.name, "Workers meeting");
        assert_eq!(meeting.time, "18:00");
        assert_eq!(meeting.location, "Room 2");
        assert_eq!(meeting.description.as_deref(), Some("Monthly coordination"));
        assert!(meeting.attendee_uids.is_empty());
    }

    #[test]
    fn overrides_win_over_defaults() {
        let series = MeetingSeries::from_create(base_create());
        let overrides = MeetingOverrides {
            location: Some("Annex".into()),
            attendee_uids: Some(vec!["m-1".into()]),
            ..Default::default()
        };
        let meeting = materialize_meeting(&series, date(2025, 6, 4), &overrides);

        assert_eq!(meeting.location, "Annex");
        assert_eq!(meeting.time, "18:00");
        assert_eq!(meeting.attendee_uids, vec!["m-1".to_string()]);
    }
}
