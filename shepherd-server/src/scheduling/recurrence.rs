//! Typed recurrence rules
//!
//! A [`MeetingSeries`] stores its recurrence as flat optional fields so the
//! wire format stays form-shaped. Converting to [`Recurrence`] enforces the
//! frequency-dependent requirements in one place, before any date is
//! generated: a rule that converts is a rule that expands without error.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};

use shared::models::{
    DayOfWeek, MeetingFrequency, MeetingSeries, MonthlyRuleType, WeekOrdinal,
};
use shared::validate::{IssueList, ValidationError};

/// Validated recurrence rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recurrence {
    OneTime(NaiveDate),
    Weekly(Vec<DayOfWeek>),
    Monthly(MonthlyRule),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthlyRule {
    /// Fixed day number. Months too short for it are skipped, never clamped,
    /// so a day-31 rule stays on the 31st instead of drifting.
    DayOfMonth(u8),
    /// Nth (or last) weekday of each month
    DayOfWeekOfMonth {
        ordinal: WeekOrdinal,
        weekday: DayOfWeek,
    },
}

impl Recurrence {
    /// Convert a series' flat fields into a typed rule, collecting every
    /// missing or out-of-range field as its own issue. Fields irrelevant to
    /// the chosen frequency are ignored even when populated.
    pub fn from_series(series: &MeetingSeries) -> Result<Self, ValidationError> {
        let mut out = IssueList::new();
        let rule = match series.frequency {
            MeetingFrequency::OneTime => match series.one_time_date {
                Some(date) => Some(Recurrence::OneTime(date)),
                None => {
                    out.push("oneTimeDate", "a one-time series requires a date");
                    None
                }
            },
            MeetingFrequency::Weekly => {
                if series.weekly_days.is_empty() {
                    out.push("weeklyDays", "a weekly series requires at least one weekday");
                    None
                } else {
                    Some(Recurrence::Weekly(series.weekly_days.clone()))
                }
            }
            MeetingFrequency::Monthly => match series.monthly_rule_type {
                None => {
                    out.push("monthlyRuleType", "a monthly series requires a rule type");
                    None
                }
                Some(MonthlyRuleType::DayOfMonth) => match series.monthly_day_of_month {
                    Some(day) if (1..=31).contains(&day) => {
                        Some(Recurrence::Monthly(MonthlyRule::DayOfMonth(day)))
                    }
                    Some(_) => {
                        out.push("monthlyDayOfMonth", "day of month must be between 1 and 31");
                        None
                    }
                    None => {
                        out.push("monthlyDayOfMonth", "a day-of-month rule requires a day");
                        None
                    }
                },
                Some(MonthlyRuleType::DayOfWeekOfMonth) => {
                    let ordinal = series.monthly_week_ordinal;
                    let weekday = series.monthly_day_of_week;
                    if ordinal.is_none() {
                        out.push("monthlyWeekOrdinal", "a day-of-week rule requires a week ordinal");
                    }
                    if weekday.is_none() {
                        out.push("monthlyDayOfWeek", "a day-of-week rule requires a weekday");
                    }
                    match (ordinal, weekday) {
                        (Some(ordinal), Some(weekday)) => {
                            Some(Recurrence::Monthly(MonthlyRule::DayOfWeekOfMonth {
                                ordinal,
                                weekday,
                            }))
                        }
                        _ => None,
                    }
                }
            },
        };
        out.finish()?;
        rule.ok_or_else(|| ValidationError::single("frequency", "incomplete recurrence rule"))
    }

    /// All occurrence dates inside [start, end], ascending, no duplicates.
    /// Empty when start is after end.
    pub fn expand(&self, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
        if start > end {
            return Vec::new();
        }
        match self {
            Recurrence::OneTime(date) => {
                if (start..=end).contains(date) {
                    vec![*date]
                } else {
                    Vec::new()
                }
            }
            Recurrence::Weekly(days) => {
                let wanted: HashSet<chrono::Weekday> =
                    days.iter().map(|d| d.to_weekday()).collect();
                start
                    .iter_days()
                    .take_while(|d| *d <= end)
                    .filter(|d| wanted.contains(&d.weekday()))
                    .collect()
            }
            Recurrence::Monthly(rule) => {
                let mut dates = Vec::new();
                let mut cursor = (start.year(), start.month());
                let last = (end.year(), end.month());
                while cursor <= last {
                    if let Some(date) = rule.date_in_month(cursor.0, cursor.1)
                        && (start..=end).contains(&date)
                    {
                        dates.push(date);
                    }
                    cursor = if cursor.1 == 12 {
                        (cursor.0 + 1, 1)
                    } else {
                        (cursor.0, cursor.1 + 1)
                    };
                }
                dates
            }
        }
    }
}

impl MonthlyRule {
    /// The rule's date inside one calendar month, if the month has one
    fn date_in_month(&self, year: i32, month: u32) -> Option<NaiveDate> {
        match *self {
            MonthlyRule::DayOfMonth(day) => NaiveDate::from_ymd_opt(year, month, day as u32),
            MonthlyRule::DayOfWeekOfMonth { ordinal, weekday } => {
                let weekday = weekday.to_weekday();
                match ordinal {
                    WeekOrdinal::First => nth_weekday(year, month, weekday, 1),
                    WeekOrdinal::Second => nth_weekday(year, month, weekday, 2),
                    WeekOrdinal::Third => nth_weekday(year, month, weekday, 3),
                    WeekOrdinal::Fourth => nth_weekday(year, month, weekday, 4),
                    WeekOrdinal::Last => last_weekday(year, month, weekday),
                }
            }
        }
    }
}

fn nth_weekday(year: i32, month: u32, weekday: chrono::Weekday, n: u32) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let offset = (7 + weekday.num_days_from_sunday() - first.weekday().num_days_from_sunday()) % 7;
    let day = 1 + offset + (n - 1) * 7;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn last_weekday(year: i32, month: u32, weekday: chrono::Weekday) -> Option<NaiveDate> {
    let last_day = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?.pred_opt()?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?.pred_opt()?
    };
    let offset =
        (7 + last_day.weekday().num_days_from_sunday() - weekday.num_days_from_sunday()) % 7;
    last_day.checked_sub_days(chrono::Days::new(offset as u64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn weekly_two_days_over_four_weeks_yields_eight() {
        let rule = Recurrence::Weekly(vec![DayOfWeek::Monday, DayOfWeek::Thursday]);
        // 2025-06-02 is a Monday; four full weeks
        let dates = rule.expand(date(2025, 6, 2), date(2025, 6, 29));
        assert_eq!(dates.len(), 8);
        assert!(dates.windows(2).all(|w| w[0] < w[1]));
        assert!(
            dates
                .iter()
                .all(|d| matches!(d.weekday(), Weekday::Mon | Weekday::Thu))
        );
    }

    #[test]
    fn day_31_skips_short_months() {
        let rule = Recurrence::Monthly(MonthlyRule::DayOfMonth(31));
        let dates = rule.expand(date(2025, 1, 1), date(2025, 4, 30));
        // January and March have a 31st; February and April do not
        assert_eq!(dates, vec![date(2025, 1, 31), date(2025, 3, 31)]);
    }

    #[test]
    fn last_friday_of_each_month() {
        let rule = Recurrence::Monthly(MonthlyRule::DayOfWeekOfMonth {
            ordinal: WeekOrdinal::Last,
            weekday: DayOfWeek::Friday,
        });
        let dates = rule.expand(date(2025, 1, 1), date(2025, 3, 31));
        assert_eq!(
            dates,
            vec![date(2025, 1, 31), date(2025, 2, 28), date(2025, 3, 28)]
        );
    }

    #[test]
    fn first_sunday_of_june_2025() {
        let rule = Recurrence::Monthly(MonthlyRule::DayOfWeekOfMonth {
            ordinal: WeekOrdinal::First,
            weekday: DayOfWeek::Sunday,
        });
        assert_eq!(
            rule.expand(date(2025, 6, 1), date(2025, 6, 30)),
            vec![date(2025, 6, 1)]
        );
    }

    #[test]
    fn one_time_inside_and_outside_window() {
        let rule = Recurrence::OneTime(date(2025, 7, 15));
        assert_eq!(
            rule.expand(date(2025, 7, 1), date(2025, 7, 31)),
            vec![date(2025, 7, 15)]
        );
        assert!(rule.expand(date(2025, 8, 1), date(2025, 8, 31)).is_empty());
    }

    #[test]
    fn inverted_window_is_empty() {
        let rule = Recurrence::Weekly(vec![DayOfWeek::Monday]);
        assert!(rule.expand(date(2025, 6, 30), date(2025, 6, 1)).is_empty());
    }

    #[test]
    fn fifth_ordinal_never_produced() {
        // June 2025 has only four Mondays after the 2nd week pattern check:
        // Mondays fall on 2, 9, 16, 23, 30 — Fourth picks the 23rd
        let rule = Recurrence::Monthly(MonthlyRule::DayOfWeekOfMonth {
            ordinal: WeekOrdinal::Fourth,
            weekday: DayOfWeek::Monday,
        });
        assert_eq!(
            rule.expand(date(2025, 6, 1), date(2025, 6, 30)),
            vec![date(2025, 6, 23)]
        );
    }
}
