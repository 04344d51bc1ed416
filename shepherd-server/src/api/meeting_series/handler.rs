//! Meeting Series API Handlers
//!
//! Series writes validate the recurrence rule up front: a series that is
//! accepted here is guaranteed to expand without error later.

use axum::{
    Json,
    extract::{Path, Query, State},
};

use shared::models::{Meeting, MeetingSeries, MeetingSeriesCreate, MeetingSeriesUpdate};

use crate::core::ServerState;
use crate::db::repository::{meeting, meeting_series};
use crate::scheduling::{self, MeetingOverrides, Recurrence};
use crate::utils::error::{AppError, AppResult};
use crate::utils::time::parse_date;

/// GET /api/meeting-series
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<MeetingSeries>>> {
    Ok(Json(meeting_series::find_all(&state.db)))
}

/// GET /api/meeting-series/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MeetingSeries>> {
    let found = meeting_series::find_by_id(&state.db, &id)
        .ok_or_else(|| AppError::not_found(format!("Meeting series {id} not found")))?;
    Ok(Json(found))
}

/// POST /api/meeting-series
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MeetingSeriesCreate>,
) -> AppResult<Json<MeetingSeries>> {
    payload.validate()?;
    let series = MeetingSeries::from_create(payload);
    Recurrence::from_series(&series)?;
    Ok(Json(meeting_series::create(&state.db, series)))
}

/// PUT /api/meeting-series/:id - partial update, re-validated after merge
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<MeetingSeriesUpdate>,
) -> AppResult<Json<MeetingSeries>> {
    payload.validate()?;
    let current = meeting_series::find_by_id(&state.db, &id)
        .ok_or_else(|| AppError::not_found(format!("Meeting series {id} not found")))?;
    let merged = current.merged_with(&payload);
    Recurrence::from_series(&merged)?;
    Ok(Json(meeting_series::save(&state.db, merged)?))
}

/// DELETE /api/meeting-series/:id - meetings already generated stay
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    Ok(Json(meeting_series::delete(&state.db, &id)))
}

/// GET /api/meeting-series/:id/meetings
pub async fn list_meetings(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Meeting>>> {
    if meeting_series::find_by_id(&state.db, &id).is_none() {
        return Err(AppError::not_found(format!("Meeting series {id} not found")));
    }
    Ok(Json(meeting::find_by_series(&state.db, &id)))
}

#[derive(serde::Deserialize)]
pub struct GenerateQuery {
    pub from: String,
    pub to: String,
}

/// POST /api/meeting-series/:id/generate?from=..&to=..
///
/// Materializes the series over the window and returns only the meetings
/// created by this call; occurrences already materialized are skipped.
pub async fn generate(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Query(query): Query<GenerateQuery>,
) -> AppResult<Json<Vec<Meeting>>> {
    let from = parse_date("from", &query.from)?;
    let to = parse_date("to", &query.to)?;

    let series = meeting_series::find_by_id(&state.db, &id)
        .ok_or_else(|| AppError::not_found(format!("Meeting series {id} not found")))?;

    let existing = meeting::existing_dates(&state.db, &id);
    let dates = scheduling::generate_occurrences(&series, from, to, &existing)?;

    let overrides = MeetingOverrides::default();
    let created: Vec<Meeting> = dates
        .into_iter()
        .map(|date| {
            let payload = scheduling::materialize_meeting(&series, date, &overrides);
            meeting::create(&state.db, payload)
        })
        .collect();

    tracing::info!(
        series_id = %id,
        count = created.len(),
        "Generated meetings for window {from}..{to}"
    );
    Ok(Json(created))
}
