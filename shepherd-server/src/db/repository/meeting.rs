//! Meeting Repository

use std::collections::HashSet;

use chrono::NaiveDate;

use shared::models::{Meeting, MeetingCreate, MeetingUpdate};
use shared::util::now_millis;

use super::{RepoError, RepoResult};
use crate::db::Database;

/// All meetings, soonest first
pub fn find_all(db: &Database) -> Vec<Meeting> {
    let mut meetings: Vec<Meeting> = db.meetings().iter().map(|e| e.value().clone()).collect();
    meetings.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));
    meetings
}

pub fn find_by_id(db: &Database, id: &str) -> Option<Meeting> {
    db.meetings().get(id).map(|e| e.value().clone())
}

/// Meetings belonging to one series, soonest first
pub fn find_by_series(db: &Database, series_id: &str) -> Vec<Meeting> {
    let mut meetings: Vec<Meeting> = db
        .meetings()
        .iter()
        .filter(|e| e.value().series_id == series_id)
        .map(|e| e.value().clone())
        .collect();
    meetings.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));
    meetings
}

/// Dates already materialized for a series; the occurrence generator
/// dedupes against this set so regeneration is idempotent
pub fn existing_dates(db: &Database, series_id: &str) -> HashSet<NaiveDate> {
    db.meetings()
        .iter()
        .filter(|e| e.value().series_id == series_id)
        .map(|e| e.value().date)
        .collect()
}

pub fn create(db: &Database, data: MeetingCreate) -> Meeting {
    let meeting = data.into_meeting();
    db.meetings().insert(meeting.id.clone(), meeting.clone());
    meeting
}

pub fn update(db: &Database, id: &str, data: MeetingUpdate) -> RepoResult<Meeting> {
    let mut entry = db
        .meetings()
        .get_mut(id)
        .ok_or_else(|| RepoError::NotFound(format!("Meeting {id} not found")))?;
    let meeting = entry.value_mut();
    if let Some(v) = data.name {
        meeting.name = v;
    }
    if let Some(v) = data.date {
        meeting.date = v;
    }
    if let Some(v) = data.time {
        meeting.time = v;
    }
    if let Some(v) = data.location {
        meeting.location = v;
    }
    if let Some(v) = data.description {
        meeting.description = v;
    }
    if let Some(v) = data.image_url {
        meeting.image_url = v;
    }
    if let Some(v) = data.attendee_uids {
        meeting.attendee_uids = v;
    }
    if let Some(v) = data.minute {
        meeting.minute = v;
    }
    meeting.updated_at = now_millis();
    Ok(meeting.clone())
}

pub fn delete(db: &Database, id: &str) -> bool {
    db.meetings().remove(id).is_some()
}
