//! Input validation
//!
//! Centralized text length constants and validation helpers. Validation
//! never throws on partial input: each `validate()` collects every failing
//! field into a [`ValidationError`] so forms can surface all issues at once.

use serde::{Deserialize, Serialize};

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: GDI, ministry area, meeting series, meeting
pub const MIN_NAME_LEN: usize = 3;

/// Person names (first / last)
pub const MIN_PERSON_NAME_LEN: usize = 2;

/// Phone numbers
pub const MIN_PHONE_LEN: usize = 7;

/// Entity names upper bound
pub const MAX_NAME_LEN: usize = 200;

/// Notes, descriptions, meeting minutes
pub const MAX_NOTE_LEN: usize = 2000;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// URLs / image paths
pub const MAX_URL_LEN: usize = 2048;

/// One field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Wire name of the offending field, e.g. "weeklyDays"
    pub field: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A rejected write: one issue per failing field
#[derive(Debug, Clone, thiserror::Error)]
#[error("validation failed: {}", summary(.0))]
pub struct ValidationError(pub Vec<ValidationIssue>);

fn summary(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(|i| format!("{}: {}", i.field, i.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self(vec![ValidationIssue::new(field, message)])
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.0
    }
}

/// Accumulates issues across fields; `finish()` yields `Err` if any were added
#[derive(Debug, Default)]
pub struct IssueList {
    issues: Vec<ValidationIssue>,
}

impl IssueList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.issues.push(ValidationIssue::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn finish(self) -> Result<(), ValidationError> {
        if self.issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationError(self.issues))
        }
    }
}

// ── Field helpers ───────────────────────────────────────────────────

/// Required string: non-blank, within [min, max] chars
pub fn check_text(out: &mut IssueList, value: &str, field: &str, min: usize, max: usize) {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        out.push(field, "must not be empty");
    } else if trimmed.chars().count() < min {
        out.push(field, format!("must be at least {min} characters"));
    } else if value.chars().count() > max {
        out.push(field, format!("must be at most {max} characters"));
    }
}

/// Optional string: length cap only
pub fn check_optional_text(out: &mut IssueList, value: Option<&str>, field: &str, max: usize) {
    if let Some(v) = value
        && v.chars().count() > max
    {
        out.push(field, format!("must be at most {max} characters"));
    }
}

/// HH:MM, 24-hour
pub fn check_hhmm(out: &mut IssueList, value: &str, field: &str) {
    let well_formed = value.len() == 5
        && value.as_bytes()[2] == b':'
        && chrono::NaiveTime::parse_from_str(value, "%H:%M").is_ok();
    if !well_formed {
        out.push(field, "invalid time, expected HH:MM");
    }
}

/// YYYY-MM-DD, when present
pub fn check_optional_date(out: &mut IssueList, value: Option<&str>, field: &str) {
    if let Some(v) = value
        && chrono::NaiveDate::parse_from_str(v, "%Y-%m-%d").is_err()
    {
        out.push(field, "invalid date, expected YYYY-MM-DD");
    }
}

/// Minimal email shape: local@domain, within length cap
pub fn check_email(out: &mut IssueList, value: &str, field: &str) {
    let ok = value.chars().count() <= MAX_EMAIL_LEN
        && value
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
    if !ok {
        out.push(field, "invalid email address");
    }
}

/// http(s) URL, when present and non-empty
pub fn check_optional_url(out: &mut IssueList, value: Option<&str>, field: &str) {
    if let Some(v) = value
        && !v.is_empty()
    {
        let scheme_ok = v.starts_with("http://") || v.starts_with("https://");
        if !scheme_ok || v.chars().count() > MAX_URL_LEN {
            out.push(field, "invalid URL");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_required_text_is_rejected() {
        let mut out = IssueList::new();
        check_text(&mut out, "   ", "name", MIN_NAME_LEN, MAX_NAME_LEN);
        let err = out.finish().unwrap_err();
        assert_eq!(err.issues()[0].field, "name");
    }

    #[test]
    fn short_text_is_rejected() {
        let mut out = IssueList::new();
        check_text(&mut out, "ab", "name", MIN_NAME_LEN, MAX_NAME_LEN);
        assert!(out.finish().is_err());
    }

    #[test]
    fn hhmm_accepts_valid_and_rejects_invalid() {
        let mut out = IssueList::new();
        check_hhmm(&mut out, "07:30", "defaultTime");
        check_hhmm(&mut out, "23:59", "defaultTime");
        assert!(out.is_empty());
        check_hhmm(&mut out, "7:30", "defaultTime");
        check_hhmm(&mut out, "24:00", "defaultTime");
        check_hhmm(&mut out, "12-30", "defaultTime");
        assert_eq!(out.finish().unwrap_err().issues().len(), 3);
    }

    #[test]
    fn email_shape() {
        let mut out = IssueList::new();
        check_email(&mut out, "ana@example.com", "email");
        assert!(out.is_empty());
        check_email(&mut out, "not-an-email", "email");
        assert!(out.finish().is_err());
    }

    #[test]
    fn optional_url_allows_empty_and_absent() {
        let mut out = IssueList::new();
        check_optional_url(&mut out, None, "avatarUrl");
        check_optional_url(&mut out, Some(""), "avatarUrl");
        check_optional_url(&mut out, Some("https://cdn.example.com/a.png"), "avatarUrl");
        assert!(out.is_empty());
        check_optional_url(&mut out, Some("ftp://x"), "avatarUrl");
        assert!(out.finish().is_err());
    }

    #[test]
    fn optional_date_shape() {
        let mut out = IssueList::new();
        check_optional_date(&mut out, Some("2024-02-29"), "birthDate");
        assert!(out.is_empty());
        check_optional_date(&mut out, Some("2023-02-29"), "birthDate");
        assert!(out.finish().is_err());
    }
}
