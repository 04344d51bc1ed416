//! Meeting API Handlers
//!
//! Attendee lists are checked against the member roster on every write;
//! attendance is recorded per (meeting, member) pair.

use axum::{
    Json,
    extract::{Path, State},
};

use shared::models::{
    AttendanceRecord, AttendanceUpsert, Meeting, MeetingCreate, MeetingUpdate,
};
use shared::validate::IssueList;

use crate::core::ServerState;
use crate::db::Database;
use crate::db::repository::{attendance, meeting, member};
use crate::utils::error::{AppError, AppResult};

/// GET /api/meetings - all meetings, soonest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Meeting>>> {
    Ok(Json(meeting::find_all(&state.db)))
}

/// GET /api/meetings/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Meeting>> {
    let found = meeting::find_by_id(&state.db, &id)
        .ok_or_else(|| AppError::not_found(format!("Meeting {id} not found")))?;
    Ok(Json(found))
}

/// POST /api/meetings - manual (off-series) meeting creation
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MeetingCreate>,
) -> AppResult<Json<Meeting>> {
    payload.validate()?;
    check_attendees(&state.db, &payload.attendee_uids)?;
    Ok(Json(meeting::create(&state.db, payload)))
}

/// PUT /api/meetings/:id - partial update
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<MeetingUpdate>,
) -> AppResult<Json<Meeting>> {
    payload.validate()?;
    if let Some(uids) = &payload.attendee_uids {
        check_attendees(&state.db, uids)?;
    }
    Ok(Json(meeting::update(&state.db, &id, payload)?))
}

/// DELETE /api/meetings/:id - hard delete; the series is unaffected
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    Ok(Json(meeting::delete(&state.db, &id)))
}

/// GET /api/meetings/:id/attendance
pub async fn list_attendance(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<AttendanceRecord>>> {
    if meeting::find_by_id(&state.db, &id).is_none() {
        return Err(AppError::not_found(format!("Meeting {id} not found")));
    }
    Ok(Json(attendance::find_by_meeting(&state.db, &id)))
}

/// PUT /api/meetings/:id/attendance/:member_id - record or overwrite one flag
pub async fn upsert_attendance(
    State(state): State<ServerState>,
    Path((id, member_id)): Path<(String, String)>,
    Json(payload): Json<AttendanceUpsert>,
) -> AppResult<Json<AttendanceRecord>> {
    if meeting::find_by_id(&state.db, &id).is_none() {
        return Err(AppError::not_found(format!("Meeting {id} not found")));
    }
    if member::find_by_id(&state.db, &member_id).is_none() {
        return Err(AppError::not_found(format!("Member {member_id} not found")));
    }
    Ok(Json(attendance::upsert(&state.db, &id, &member_id, payload)))
}

/// Every attendee uid must exist in the member roster
fn check_attendees(db: &Database, attendee_uids: &[String]) -> AppResult<()> {
    let mut out = IssueList::new();
    for uid in attendee_uids {
        if member::find_by_id(db, uid).is_none() {
            out.push("attendeeUids", format!("member {uid} does not exist"));
        }
    }
    out.finish()?;
    Ok(())
}
