//! Meeting Series Model
//!
//! A series is the recurrence template from which dated meeting instances
//! are generated. Exactly the recurrence fields relevant to the chosen
//! `frequency` are required; irrelevant ones are ignored even if present.
//! Cross-field requirements are enforced by the scheduling engine before
//! any generation or persistence.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::util::{double_option, new_id, now_millis};
use crate::validate::{self, IssueList, MAX_NAME_LEN, MAX_NOTE_LEN, MIN_NAME_LEN, ValidationError};

/// Role-based audience a series is intended for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TargetGroup {
    AllMembers,
    Workers,
    Leaders,
}

/// How often a series meets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeetingFrequency {
    OneTime,
    Weekly,
    Monthly,
}

/// Day of week, Sunday-first to match the authored data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayOfWeek {
    pub fn to_weekday(self) -> chrono::Weekday {
        match self {
            DayOfWeek::Sunday => chrono::Weekday::Sun,
            DayOfWeek::Monday => chrono::Weekday::Mon,
            DayOfWeek::Tuesday => chrono::Weekday::Tue,
            DayOfWeek::Wednesday => chrono::Weekday::Wed,
            DayOfWeek::Thursday => chrono::Weekday::Thu,
            DayOfWeek::Friday => chrono::Weekday::Fri,
            DayOfWeek::Saturday => chrono::Weekday::Sat,
        }
    }
}

/// Which week of the month a monthly rule targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeekOrdinal {
    First,
    Second,
    Third,
    Fourth,
    Last,
}

/// Monthly rule flavor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonthlyRuleType {
    DayOfMonth,
    DayOfWeekOfMonth,
}

/// Meeting series entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingSeries {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// HH:MM
    pub default_time: String,
    pub default_location: String,
    pub default_image_url: Option<String>,
    /// Non-empty audience set
    pub target_attendee_groups: Vec<TargetGroup>,
    pub frequency: MeetingFrequency,
    /// Required iff frequency is OneTime
    pub one_time_date: Option<NaiveDate>,
    /// Required (non-empty) iff frequency is Weekly
    #[serde(default)]
    pub weekly_days: Vec<DayOfWeek>,
    /// Required iff frequency is Monthly
    pub monthly_rule_type: Option<MonthlyRuleType>,
    /// Required iff monthly rule is DayOfMonth; 1-31
    pub monthly_day_of_month: Option<u8>,
    /// Required iff monthly rule is DayOfWeekOfMonth
    pub monthly_week_ordinal: Option<WeekOrdinal>,
    /// Required iff monthly rule is DayOfWeekOfMonth
    pub monthly_day_of_week: Option<DayOfWeek>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl MeetingSeries {
    pub fn from_create(data: MeetingSeriesCreate) -> Self {
        let now = now_millis();
        Self {
            id: new_id(),
            name: data.name,
            description: data.description,
            default_time: data.default_time,
            default_location: data.default_location,
            default_image_url: data.default_image_url,
            target_attendee_groups: data.target_attendee_groups,
            frequency: data.frequency,
            one_time_date: data.one_time_date,
            weekly_days: data.weekly_days,
            monthly_rule_type: data.monthly_rule_type,
            monthly_day_of_month: data.monthly_day_of_month,
            monthly_week_ordinal: data.monthly_week_ordinal,
            monthly_day_of_week: data.monthly_day_of_week,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge a partial update into a copy of this series
    pub fn merged_with(&self, data: &MeetingSeriesUpdate) -> Self {
        let mut next = self.clone();
        if let Some(v) = &data.name {
            next.name = v.clone();
        }
        if let Some(v) = &data.description {
            next.description = v.clone();
        }
        if let Some(v) = &data.default_time {
            next.default_time = v.clone();
        }
        if let Some(v) = &data.default_location {
            next.default_location = v.clone();
        }
        if let Some(v) = &data.default_image_url {
            next.default_image_url = v.clone();
        }
        if let Some(v) = &data.target_attendee_groups {
            next.target_attendee_groups = v.clone();
        }
        if let Some(v) = data.frequency {
            next.frequency = v;
        }
        if let Some(v) = data.one_time_date {
            next.one_time_date = v;
        }
        if let Some(v) = &data.weekly_days {
            next.weekly_days = v.clone();
        }
        if let Some(v) = data.monthly_rule_type {
            next.monthly_rule_type = v;
        }
        if let Some(v) = data.monthly_day_of_month {
            next.monthly_day_of_month = v;
        }
        if let Some(v) = data.monthly_week_ordinal {
            next.monthly_week_ordinal = v;
        }
        if let Some(v) = data.monthly_day_of_week {
            next.monthly_day_of_week = v;
        }
        next.updated_at = now_millis();
        next
    }
}

/// Create meeting series payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingSeriesCreate {
    pub name: String,
    pub description: Option<String>,
    pub default_time: String,
    pub default_location: String,
    pub default_image_url: Option<String>,
    pub target_attendee_groups: Vec<TargetGroup>,
    pub frequency: MeetingFrequency,
    pub one_time_date: Option<NaiveDate>,
    #[serde(default)]
    pub weekly_days: Vec<DayOfWeek>,
    pub monthly_rule_type: Option<MonthlyRuleType>,
    pub monthly_day_of_month: Option<u8>,
    pub monthly_week_ordinal: Option<WeekOrdinal>,
    pub monthly_day_of_week: Option<DayOfWeek>,
}

impl MeetingSeriesCreate {
    /// Field-shape checks; the frequency-dependent cross-field rules live in
    /// the scheduling engine's typed-rule conversion.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut out = IssueList::new();
        validate::check_text(&mut out, &self.name, "name", MIN_NAME_LEN, MAX_NAME_LEN);
        validate::check_optional_text(
            &mut out,
            self.description.as_deref(),
            "description",
            MAX_NOTE_LEN,
        );
        validate::check_hhmm(&mut out, &self.default_time, "defaultTime");
        validate::check_text(
            &mut out,
            &self.default_location,
            "defaultLocation",
            MIN_NAME_LEN,
            MAX_NAME_LEN,
        );
        validate::check_optional_url(
            &mut out,
            self.default_image_url.as_deref(),
            "defaultImageUrl",
        );
        if self.target_attendee_groups.is_empty() {
            out.push(
                "targetAttendeeGroups",
                "at least one attendee group must be selected",
            );
        }
        out.finish()
    }
}

/// Update meeting series payload (partial)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingSeriesUpdate {
    pub name: Option<String>,
    #[serde(default, with = "double_option", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    pub default_time: Option<String>,
    pub default_location: Option<String>,
    #[serde(default, with = "double_option", skip_serializing_if = "Option::is_none")]
    pub default_image_url: Option<Option<String>>,
    pub target_attendee_groups: Option<Vec<TargetGroup>>,
    pub frequency: Option<MeetingFrequency>,
    #[serde(default, with = "double_option", skip_serializing_if = "Option::is_none")]
    pub one_time_date: Option<Option<NaiveDate>>,
    pub weekly_days: Option<Vec<DayOfWeek>>,
    #[serde(default, with = "double_option", skip_serializing_if = "Option::is_none")]
    pub monthly_rule_type: Option<Option<MonthlyRuleType>>,
    #[serde(default, with = "double_option", skip_serializing_if = "Option::is_none")]
    pub monthly_day_of_month: Option<Option<u8>>,
    #[serde(default, with = "double_option", skip_serializing_if = "Option::is_none")]
    pub monthly_week_ordinal: Option<Option<WeekOrdinal>>,
    #[serde(default, with = "double_option", skip_serializing_if = "Option::is_none")]
    pub monthly_day_of_week: Option<Option<DayOfWeek>>,
}

impl MeetingSeriesUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut out = IssueList::new();
        if let Some(v) = &self.name {
            validate::check_text(&mut out, v, "name", MIN_NAME_LEN, MAX_NAME_LEN);
        }
        if let Some(v) = &self.default_time {
            validate::check_hhmm(&mut out, v, "defaultTime");
        }
        if let Some(v) = &self.default_location {
            validate::check_text(&mut out, v, "defaultLocation", MIN_NAME_LEN, MAX_NAME_LEN);
        }
        if let Some(v) = &self.default_image_url {
            validate::check_optional_url(&mut out, v.as_deref(), "defaultImageUrl");
        }
        if let Some(v) = &self.target_attendee_groups
            && v.is_empty()
        {
            out.push(
                "targetAttendeeGroups",
                "at least one attendee group must be selected",
            );
        }
        out.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn weekly_series(days: Vec<DayOfWeek>) -> MeetingSeriesCreate {
        MeetingSeriesCreate {
            name: "Midweek prayer".into(),
            description: None,
            default_time: "19:30".into(),
            default_location: "Main hall".into(),
            default_image_url: None,
            target_attendee_groups: vec![TargetGroup::AllMembers],
            frequency: MeetingFrequency::Weekly,
            one_time_date: None,
            weekly_days: days,
            monthly_rule_type: None,
            monthly_day_of_month: None,
            monthly_week_ordinal: None,
            monthly_day_of_week: None,
        }
    }

    #[test]
    fn base_fields_validate() {
        assert!(weekly_series(vec![DayOfWeek::Monday]).validate().is_ok());
    }

    #[test]
    fn empty_target_groups_rejected() {
        let mut data = weekly_series(vec![DayOfWeek::Monday]);
        data.target_attendee_groups.clear();
        let err = data.validate().unwrap_err();
        assert_eq!(err.issues()[0].field, "targetAttendeeGroups");
    }

    #[test]
    fn target_group_wire_names_are_camel_case() {
        let json = serde_json::to_string(&TargetGroup::AllMembers).unwrap();
        assert_eq!(json, r#""allMembers""#);
    }

    #[test]
    fn merged_update_switches_frequency() {
        let series = MeetingSeries::from_create(weekly_series(vec![DayOfWeek::Monday]));
        let upd = MeetingSeriesUpdate {
            frequency: Some(MeetingFrequency::Monthly),
            monthly_rule_type: Some(Some(MonthlyRuleType::DayOfMonth)),
            monthly_day_of_month: Some(Some(15)),
            ..Default::default()
        };
        let merged = series.merged_with(&upd);
        assert_eq!(merged.frequency, MeetingFrequency::Monthly);
        assert_eq!(merged.monthly_day_of_month, Some(15));
        // Stale weekly fields stay but are ignored for a Monthly series
        assert!(!merged.weekly_days.is_empty());
    }
}
