//! Attendance Repository
//!
//! Writes are upserts keyed on (meeting_id, member_id), enforcing the
//! at-most-one-record-per-pair invariant.

use shared::models::{AttendanceRecord, AttendanceUpsert};
use shared::util::{new_id, now_millis};

use crate::db::Database;

/// Records for one meeting, stable order by member id
pub fn find_by_meeting(db: &Database, meeting_id: &str) -> Vec<AttendanceRecord> {
    let mut records: Vec<AttendanceRecord> = db
        .attendance()
        .iter()
        .filter(|e| e.value().meeting_id == meeting_id)
        .map(|e| e.value().clone())
        .collect();
    records.sort_by(|a, b| a.member_id.cmp(&b.member_id));
    records
}

pub fn find(db: &Database, meeting_id: &str, member_id: &str) -> Option<AttendanceRecord> {
    db.attendance()
        .get(&(meeting_id.to_string(), member_id.to_string()))
        .map(|e| e.value().clone())
}

/// Insert or overwrite the record for this (meeting, member) pair
pub fn upsert(
    db: &Database,
    meeting_id: &str,
    member_id: &str,
    data: AttendanceUpsert,
) -> AttendanceRecord {
    let key = (meeting_id.to_string(), member_id.to_string());
    let now = now_millis();
    let record = match db.attendance().get(&key) {
        Some(existing) => AttendanceRecord {
            attended: data.attended,
            notes: data.notes,
            updated_at: now,
            ..existing.value().clone()
        },
        None => AttendanceRecord {
            id: new_id(),
            meeting_id: meeting_id.to_string(),
            member_id: member_id.to_string(),
            attended: data.attended,
            notes: data.notes,
            created_at: now,
            updated_at: now,
        },
    };
    db.attendance().insert(key, record.clone());
    record
}
