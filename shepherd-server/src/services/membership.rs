//! Member writes with roster consistency
//!
//! A member's `assignedGDIId` and `assignedAreaIds` are back-references to
//! the GDI and ministry-area rosters; both sides must stay in sync. Every
//! referenced id is verified before the first write, so a failing request
//! leaves no partial state behind.

use std::collections::HashSet;

use shared::models::{Member, MemberCreate, MemberUpdate};
use shared::validate::IssueList;

use crate::db::Database;
use crate::db::repository::{gdi, member, ministry_area};
use crate::utils::error::{AppError, AppResult};

/// Create a member and enroll it in the referenced rosters
pub fn create_member(db: &Database, data: MemberCreate) -> AppResult<Member> {
    data.validate()?;
    check_references(db, data.assigned_gdi_id.as_deref(), &data.assigned_area_ids)?;

    let created = member::create(db, data);
    sync_rosters(db, &created.id, None, created.assigned_gdi_id.as_deref(), &[], &created.assigned_area_ids)?;
    Ok(created)
}

/// Apply a partial update and move the member between rosters as needed
pub fn update_member(db: &Database, id: &str, data: MemberUpdate) -> AppResult<Member> {
    data.validate()?;
    let current = member::find_by_id(db, id)
        .ok_or_else(|| AppError::not_found(format!("Member {id} not found")))?;

    // Targets after the merge; absent fields keep their current value
    let next_gdi = match &data.assigned_gdi_id {
        Some(explicit) => explicit.clone(),
        None => current.assigned_gdi_id.clone(),
    };
    let next_areas = data
        .assigned_area_ids
        .clone()
        .unwrap_or_else(|| current.assigned_area_ids.clone());

    check_references(db, next_gdi.as_deref(), &next_areas)?;

    let updated = member::update(db, id, data)?;
    sync_rosters(
        db,
        id,
        current.assigned_gdi_id.as_deref(),
        next_gdi.as_deref(),
        &current.assigned_area_ids,
        &next_areas,
    )?;
    Ok(updated)
}

/// Leader/guide and roster ids on a group payload must reference existing
/// members; used by the GDI and ministry-area write handlers
pub fn check_roster_members(
    db: &Database,
    leader_field: &str,
    leader_id: Option<&str>,
    member_ids: &[String],
) -> AppResult<()> {
    let mut out = IssueList::new();
    if let Some(leader_id) = leader_id
        && member::find_by_id(db, leader_id).is_none()
    {
        out.push(leader_field, format!("member {leader_id} does not exist"));
    }
    for member_id in member_ids {
        if member::find_by_id(db, member_id).is_none() {
            out.push("memberIds", format!("member {member_id} does not exist"));
        }
    }
    out.finish()?;
    Ok(())
}

/// Reject unknown roster references with field-level issues, before any write
fn check_references(db: &Database, gdi_id: Option<&str>, area_ids: &[String]) -> AppResult<()> {
    let mut out = IssueList::new();
    if let Some(gdi_id) = gdi_id
        && gdi::find_by_id(db, gdi_id).is_none()
    {
        out.push("assignedGDIId", format!("GDI {gdi_id} does not exist"));
    }
    for area_id in area_ids {
        if ministry_area::find_by_id(db, area_id).is_none() {
            out.push("assignedAreaIds", format!("ministry area {area_id} does not exist"));
        }
    }
    out.finish()?;
    Ok(())
}

/// Move the member id between rosters to mirror the back-references.
/// References were checked up front, so the roster ops cannot fail here
/// under single-writer semantics.
fn sync_rosters(
    db: &Database,
    member_id: &str,
    old_gdi: Option<&str>,
    new_gdi: Option<&str>,
    old_areas: &[String],
    new_areas: &[String],
) -> AppResult<()> {
    if old_gdi != new_gdi {
        if let Some(old) = old_gdi {
            gdi::remove_member(db, old, member_id)?;
        }
        if let Some(new) = new_gdi {
            gdi::add_member(db, new, member_id)?;
        }
    }

    let old_set: HashSet<&str> = old_areas.iter().map(String::as_str).collect();
    let new_set: HashSet<&str> = new_areas.iter().map(String::as_str).collect();
    for removed in old_set.difference(&new_set) {
        ministry_area::remove_member(db, removed, member_id)?;
    }
    for added in new_set.difference(&old_set) {
        ministry_area::add_member(db, added, member_id)?;
    }
    Ok(())
}
