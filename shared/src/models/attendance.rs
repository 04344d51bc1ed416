//! Attendance Record Model

use serde::{Deserialize, Serialize};

/// Per-member, per-meeting attendance flag
///
/// At most one record exists per (meeting, member) pair; writes go through
/// the repository upsert keyed on that pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: String,
    pub meeting_id: String,
    pub member_id: String,
    pub attended: bool,
    pub notes: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Upsert attendance payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceUpsert {
    pub attended: bool,
    pub notes: Option<String>,
}
