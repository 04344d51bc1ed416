//! Member API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};

use shared::PaginatedResponse;
use shared::models::{Member, MemberCreate, MemberUpdate};

use crate::core::ServerState;
use crate::db::repository::{gdi, member};
use crate::roster::{self, MemberQuery};
use crate::services::membership;
use crate::utils::error::{AppError, AppResult};

/// GET /api/members - searchable, sortable, paginated member list
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<MemberQuery>,
) -> AppResult<Json<PaginatedResponse<Member>>> {
    let members = member::find_all(&state.db);
    Ok(Json(roster::query_members(&members, &query)))
}

/// Member detail response (member + resolved GDI guide name)
#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDetail {
    #[serde(flatten)]
    pub member: Member,
    pub gdi_guide_name: String,
}

/// GET /api/members/:id - single member with guide lookup
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MemberDetail>> {
    let found = member::find_by_id(&state.db, &id)
        .ok_or_else(|| AppError::not_found(format!("Member {id} not found")))?;

    let gdis = gdi::find_all(&state.db);
    let members = member::find_all(&state.db);
    let guide = roster::resolve_guide_name(&found, &gdis, &members);

    Ok(Json(MemberDetail {
        member: found,
        gdi_guide_name: guide.to_string(),
    }))
}

/// POST /api/members - create a member and enroll it in its rosters
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MemberCreate>,
) -> AppResult<Json<Member>> {
    let member = membership::create_member(&state.db, payload)?;
    Ok(Json(member))
}

/// PUT /api/members/:id - partial update with roster re-sync
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<MemberUpdate>,
) -> AppResult<Json<Member>> {
    let member = membership::update_member(&state.db, &id, payload)?;
    Ok(Json(member))
}

/// DELETE /api/members/:id - soft delete (status transitions to Inactive)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let changed = member::deactivate(&state.db, &id)?;
    Ok(Json(changed))
}
