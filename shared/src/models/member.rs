//! Member Model

use serde::{Deserialize, Serialize};

use crate::util::double_option;
use crate::validate::{
    self, IssueList, MAX_NAME_LEN, MAX_NOTE_LEN, MIN_PERSON_NAME_LEN, MIN_PHONE_LEN,
    ValidationError,
};

/// Membership status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberStatus {
    Active,
    Inactive,
    New,
}

/// Role a member holds within the congregation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberRole {
    Leader,
    Worker,
    GeneralAttendee,
}

impl MemberRole {
    /// Display label (also part of the list-search field set)
    pub fn display_name(&self) -> &'static str {
        match self {
            MemberRole::Leader => "Leader",
            MemberRole::Worker => "Worker",
            MemberRole::GeneralAttendee => "General Attendee",
        }
    }
}

/// Member entity
///
/// Members are never hard-deleted: delete requests transition `status`
/// to `Inactive` instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// YYYY-MM-DD
    pub birth_date: Option<String>,
    /// YYYY-MM-DD
    pub church_join_date: Option<String>,
    /// Free-form user input, e.g. "June 2023" or "2023-06-15"
    pub baptism_date: Option<String>,
    pub attends_life_school: bool,
    pub attends_bible_institute: bool,
    pub from_another_church: bool,
    pub status: MemberStatus,
    pub avatar_url: Option<String>,
    /// GDI the member attends
    #[serde(rename = "assignedGDIId")]
    pub assigned_gdi_id: Option<String>,
    /// Ministry areas the member is part of
    #[serde(default)]
    pub assigned_area_ids: Vec<String>,
    #[serde(default)]
    pub roles: Vec<MemberRole>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Member {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Create member payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberCreate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: Option<String>,
    pub church_join_date: Option<String>,
    pub baptism_date: Option<String>,
    #[serde(default)]
    pub attends_life_school: bool,
    #[serde(default)]
    pub attends_bible_institute: bool,
    #[serde(default)]
    pub from_another_church: bool,
    pub status: MemberStatus,
    pub avatar_url: Option<String>,
    #[serde(rename = "assignedGDIId")]
    pub assigned_gdi_id: Option<String>,
    #[serde(default)]
    pub assigned_area_ids: Vec<String>,
    #[serde(default)]
    pub roles: Vec<MemberRole>,
}

impl MemberCreate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut out = IssueList::new();
        validate::check_text(
            &mut out,
            &self.first_name,
            "firstName",
            MIN_PERSON_NAME_LEN,
            MAX_NAME_LEN,
        );
        validate::check_text(
            &mut out,
            &self.last_name,
            "lastName",
            MIN_PERSON_NAME_LEN,
            MAX_NAME_LEN,
        );
        validate::check_email(&mut out, &self.email, "email");
        validate::check_text(&mut out, &self.phone, "phone", MIN_PHONE_LEN, MAX_NAME_LEN);
        validate::check_optional_date(&mut out, self.birth_date.as_deref(), "birthDate");
        validate::check_optional_date(
            &mut out,
            self.church_join_date.as_deref(),
            "churchJoinDate",
        );
        // Baptism date is deliberately free-form
        validate::check_optional_text(
            &mut out,
            self.baptism_date.as_deref(),
            "baptismDate",
            MAX_NOTE_LEN,
        );
        validate::check_optional_url(&mut out, self.avatar_url.as_deref(), "avatarUrl");
        out.finish()
    }
}

/// Update member payload (partial)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// `Some(None)` clears the date
    #[serde(default, with = "double_option", skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<Option<String>>,
    #[serde(default, with = "double_option", skip_serializing_if = "Option::is_none")]
    pub church_join_date: Option<Option<String>>,
    #[serde(default, with = "double_option", skip_serializing_if = "Option::is_none")]
    pub baptism_date: Option<Option<String>>,
    pub attends_life_school: Option<bool>,
    pub attends_bible_institute: Option<bool>,
    pub from_another_church: Option<bool>,
    pub status: Option<MemberStatus>,
    #[serde(default, with = "double_option", skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<Option<String>>,
    /// `Some(None)` unassigns the GDI
    #[serde(
        rename = "assignedGDIId",
        default,
        with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub assigned_gdi_id: Option<Option<String>>,
    pub assigned_area_ids: Option<Vec<String>>,
    pub roles: Option<Vec<MemberRole>>,
}

impl MemberUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut out = IssueList::new();
        if let Some(v) = &self.first_name {
            validate::check_text(&mut out, v, "firstName", MIN_PERSON_NAME_LEN, MAX_NAME_LEN);
        }
        if let Some(v) = &self.last_name {
            validate::check_text(&mut out, v, "lastName", MIN_PERSON_NAME_LEN, MAX_NAME_LEN);
        }
        if let Some(v) = &self.email {
            validate::check_email(&mut out, v, "email");
        }
        if let Some(v) = &self.phone {
            validate::check_text(&mut out, v, "phone", MIN_PHONE_LEN, MAX_NAME_LEN);
        }
        if let Some(v) = &self.birth_date {
            validate::check_optional_date(&mut out, v.as_deref(), "birthDate");
        }
        if let Some(v) = &self.church_join_date {
            validate::check_optional_date(&mut out, v.as_deref(), "churchJoinDate");
        }
        if let Some(v) = &self.avatar_url {
            validate::check_optional_url(&mut out, v.as_deref(), "avatarUrl");
        }
        out.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_create() -> MemberCreate {
        MemberCreate {
            first_name: "Ana".into(),
            last_name: "García".into(),
            email: "ana@example.com".into(),
            phone: "5551234567".into(),
            birth_date: Some("1990-04-12".into()),
            church_join_date: None,
            baptism_date: Some("June 2023".into()),
            attends_life_school: false,
            attends_bible_institute: false,
            from_another_church: false,
            status: MemberStatus::New,
            avatar_url: None,
            assigned_gdi_id: None,
            assigned_area_ids: vec![],
            roles: vec![],
        }
    }

    #[test]
    fn valid_member_passes() {
        assert!(valid_create().validate().is_ok());
    }

    #[test]
    fn collects_every_failing_field() {
        let mut data = valid_create();
        data.first_name = "A".into();
        data.email = "nope".into();
        data.phone = "123".into();
        let err = data.validate().unwrap_err();
        let fields: Vec<_> = err.issues().iter().map(|i| i.field.as_str()).collect();
        assert_eq!(fields, vec!["firstName", "email", "phone"]);
    }

    #[test]
    fn free_form_baptism_date_is_accepted() {
        let mut data = valid_create();
        data.baptism_date = Some("sometime around Easter".into());
        assert!(data.validate().is_ok());
    }

    #[test]
    fn update_distinguishes_absent_from_null() {
        let upd: MemberUpdate = serde_json::from_str(r#"{"assignedGDIId":null}"#).unwrap();
        assert_eq!(upd.assigned_gdi_id, Some(None));
        let upd: MemberUpdate = serde_json::from_str("{}").unwrap();
        assert_eq!(upd.assigned_gdi_id, None);
    }
}
