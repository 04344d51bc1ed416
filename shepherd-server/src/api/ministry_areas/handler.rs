//! Ministry Area API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use shared::models::{MinistryArea, MinistryAreaCreate, MinistryAreaUpdate};

use crate::core::ServerState;
use crate::db::repository::ministry_area;
use crate::services::membership::check_roster_members;
use crate::utils::error::{AppError, AppResult};

/// GET /api/ministry-areas
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<MinistryArea>>> {
    Ok(Json(ministry_area::find_all(&state.db)))
}

/// GET /api/ministry-areas/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MinistryArea>> {
    let found = ministry_area::find_by_id(&state.db, &id)
        .ok_or_else(|| AppError::not_found(format!("Ministry area {id} not found")))?;
    Ok(Json(found))
}

/// POST /api/ministry-areas
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MinistryAreaCreate>,
) -> AppResult<Json<MinistryArea>> {
    payload.validate()?;
    check_roster_members(&state.db, "leaderId", Some(&payload.leader_id), &payload.member_ids)?;
    Ok(Json(ministry_area::create(&state.db, payload)))
}

/// PUT /api/ministry-areas/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<MinistryAreaUpdate>,
) -> AppResult<Json<MinistryArea>> {
    payload.validate()?;
    check_roster_members(
        &state.db,
        "leaderId",
        payload.leader_id.as_deref(),
        payload.member_ids.as_deref().unwrap_or_default(),
    )?;
    Ok(Json(ministry_area::update(&state.db, &id, payload)?))
}

/// DELETE /api/ministry-areas/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    Ok(Json(ministry_area::delete(&state.db, &id)))
}
