//! Meeting Model (one concrete occurrence)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::util::{double_option, new_id, now_millis};
use crate::validate::{self, IssueList, MAX_NAME_LEN, MAX_NOTE_LEN, MIN_NAME_LEN, ValidationError};

/// Meeting entity
///
/// Instances are edited and deleted independently of their series; a meeting
/// whose series has been deleted remains valid standalone.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    pub id: String,
    pub series_id: String,
    pub name: String,
    pub date: NaiveDate,
    /// HH:MM
    pub time: String,
    pub location: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    /// Member ids expected/recorded as attendees; always a subset of the roster
    #[serde(default)]
    pub attendee_uids: Vec<String>,
    /// Free-text minute
    pub minute: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create meeting payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingCreate {
    pub series_id: String,
    pub name: String,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub attendee_uids: Vec<String>,
}

impl MeetingCreate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut out = IssueList::new();
        validate::check_text(&mut out, &self.name, "name", MIN_NAME_LEN, MAX_NAME_LEN);
        validate::check_hhmm(&mut out, &self.time, "time");
        validate::check_text(&mut out, &self.location, "location", MIN_NAME_LEN, MAX_NAME_LEN);
        validate::check_optional_text(
            &mut out,
            self.description.as_deref(),
            "description",
            MAX_NOTE_LEN,
        );
        validate::check_optional_url(&mut out, self.image_url.as_deref(), "imageUrl");
        out.finish()
    }

    pub fn into_meeting(self) -> Meeting {
        let now = now_millis();
        Meeting {
            id: new_id(),
            series_id: self.series_id,
            name: self.name,
            date: self.date,
            time: self.time,
            location: self.location,
            description: self.description,
            image_url: self.image_url,
            attendee_uids: self.attendee_uids,
            minute: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Update meeting payload (partial; series link and date are fixed via
/// regeneration, attendees via the attendance endpoints)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingUpdate {
    pub name: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub location: Option<String>,
    #[serde(default, with = "double_option", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(default, with = "double_option", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<Option<String>>,
    pub attendee_uids: Option<Vec<String>>,
    #[serde(default, with = "double_option", skip_serializing_if = "Option::is_none")]
    pub minute: Option<Option<String>>,
}

impl MeetingUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut out = IssueList::new();
        if let Some(v) = &self.name {
            validate::check_text(&mut out, v, "name", MIN_NAME_LEN, MAX_NAME_LEN);
        }
        if let Some(v) = &self.time {
            validate::check_hhmm(&mut out, v, "time");
        }
        if let Some(v) = &self.location {
            validate::check_text(&mut out, v, "location", MIN_NAME_LEN, MAX_NAME_LEN);
        }
        if let Some(v) = &self.minute {
            validate::check_optional_text(&mut out, v.as_deref(), "minute", MAX_NOTE_LEN);
        }
        out.finish()
    }
}
