//! Ministry Area Repository

use shared::models::{MinistryArea, MinistryAreaCreate, MinistryAreaUpdate};
use shared::util::{new_id, now_millis};

use super::{RepoError, RepoResult};
use crate::db::Database;

/// All areas, sorted by name
pub fn find_all(db: &Database) -> Vec<MinistryArea> {
    let mut areas: Vec<MinistryArea> = db
        .ministry_areas()
        .iter()
        .map(|e| e.value().clone())
        .collect();
    areas.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
    areas
}

pub fn find_by_id(db: &Database, id: &str) -> Option<MinistryArea> {
    db.ministry_areas().get(id).map(|e| e.value().clone())
}

pub fn create(db: &Database, data: MinistryAreaCreate) -> MinistryArea {
    let now = now_millis();
    let area = MinistryArea {
        id: new_id(),
        name: data.name,
        description: data.description,
        leader_id: data.leader_id,
        member_ids: data.member_ids,
        image_url: data.image_url,
        created_at: now,
        updated_at: now,
    };
    db.ministry_areas().insert(area.id.clone(), area.clone());
    area
}

pub fn update(db: &Database, id: &str, data: MinistryAreaUpdate) -> RepoResult<MinistryArea> {
    let mut entry = db
        .ministry_areas()
        .get_mut(id)
        .ok_or_else(|| RepoError::NotFound(format!("Ministry area {id} not found")))?;
    let area = entry.value_mut();
    if let Some(v) = data.name {
        area.name = v;
    }
    if let Some(v) = data.description {
        area.description = v;
    }
    if let Some(v) = data.leader_id {
        area.leader_id = v;
    }
    if let Some(v) = data.member_ids {
        area.member_ids = v;
    }
    if let Some(v) = data.image_url {
        area.image_url = v;
    }
    area.updated_at = now_millis();
    Ok(area.clone())
}

pub fn delete(db: &Database, id: &str) -> bool {
    db.ministry_areas().remove(id).is_some()
}

/// Add a member id to the roster (idempotent)
pub fn add_member(db: &Database, area_id: &str, member_id: &str) -> RepoResult<()> {
    let mut entry = db
        .ministry_areas()
        .get_mut(area_id)
        .ok_or_else(|| RepoError::NotFound(format!("Ministry area {area_id} not found")))?;
    let area = entry.value_mut();
    if !area.member_ids.iter().any(|m| m == member_id) {
        area.member_ids.push(member_id.to_string());
        area.updated_at = now_millis();
    }
    Ok(())
}

/// Drop a member id from the roster (idempotent)
pub fn remove_member(db: &Database, area_id: &str, member_id: &str) -> RepoResult<()> {
    let mut entry = db
        .ministry_areas()
        .get_mut(area_id)
        .ok_or_else(|| RepoError::NotFound(format!("Ministry area {area_id} not found")))?;
    let area = entry.value_mut();
    let before = area.member_ids.len();
    area.member_ids.retain(|m| m != member_id);
    if area.member_ids.len() != before {
        area.updated_at = now_millis();
    }
    Ok(())
}
