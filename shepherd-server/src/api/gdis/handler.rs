//! GDI API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use shared::models::{Gdi, GdiCreate, GdiUpdate};

use crate::core::ServerState;
use crate::db::repository::gdi;
use crate::services::membership::check_roster_members;
use crate::utils::error::{AppError, AppResult};

/// GET /api/gdis - all small groups
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Gdi>>> {
    Ok(Json(gdi::find_all(&state.db)))
}

/// GET /api/gdis/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Gdi>> {
    let found = gdi::find_by_id(&state.db, &id)
        .ok_or_else(|| AppError::not_found(format!("GDI {id} not found")))?;
    Ok(Json(found))
}

/// POST /api/gdis
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<GdiCreate>,
) -> AppResult<Json<Gdi>> {
    payload.validate()?;
    check_roster_members(&state.db, "guideId", Some(&payload.guide_id), &payload.member_ids)?;
    Ok(Json(gdi::create(&state.db, payload)))
}

/// PUT /api/gdis/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<GdiUpdate>,
) -> AppResult<Json<Gdi>> {
    payload.validate()?;
    check_roster_members(
        &state.db,
        "guideId",
        payload.guide_id.as_deref(),
        payload.member_ids.as_deref().unwrap_or_default(),
    )?;
    Ok(Json(gdi::update(&state.db, &id, payload)?))
}

/// DELETE /api/gdis/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    Ok(Json(gdi::delete(&state.db, &id)))
}
