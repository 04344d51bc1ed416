//! GDI Repository

use shared::models::{Gdi, GdiCreate, GdiUpdate};
use shared::util::{new_id, now_millis};

use super::{RepoError, RepoResult};
use crate::db::Database;

/// All GDIs, sorted by name
pub fn find_all(db: &Database) -> Vec<Gdi> {
    let mut gdis: Vec<Gdi> = db.gdis().iter().map(|e| e.value().clone()).collect();
    gdis.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
    gdis
}

pub fn find_by_id(db: &Database, id: &str) -> Option<Gdi> {
    db.gdis().get(id).map(|e| e.value().clone())
}

pub fn create(db: &Database, data: GdiCreate) -> Gdi {
    let now = now_millis();
    let gdi = Gdi {
        id: new_id(),
        name: data.name,
        guide_id: data.guide_id,
        member_ids: data.member_ids,
        created_at: now,
        updated_at: now,
    };
    db.gdis().insert(gdi.id.clone(), gdi.clone());
    gdi
}

pub fn update(db: &Database, id: &str, data: GdiUpdate) -> RepoResult<Gdi> {
    let mut entry = db
        .gdis()
        .get_mut(id)
        .ok_or_else(|| RepoError::NotFound(format!("GDI {id} not found")))?;
    let gdi = entry.value_mut();
    if let Some(v) = data.name {
        gdi.name = v;
    }
    if let Some(v) = data.guide_id {
        gdi.guide_id = v;
    }
    if let Some(v) = data.member_ids {
        gdi.member_ids = v;
    }
    gdi.updated_at = now_millis();
    Ok(gdi.clone())
}

pub fn delete(db: &Database, id: &str) -> bool {
    db.gdis().remove(id).is_some()
}

/// Add a member id to the roster (idempotent)
pub fn add_member(db: &Database, gdi_id: &str, member_id: &str) -> RepoResult<()> {
    let mut entry = db
        .gdis()
        .get_mut(gdi_id)
        .ok_or_else(|| RepoError::NotFound(format!("GDI {gdi_id} not found")))?;
    let gdi = entry.value_mut();
    if !gdi.member_ids.iter().any(|m| m == member_id) {
        gdi.member_ids.push(member_id.to_string());
        gdi.updated_at = now_millis();
    }
    Ok(())
}

/// Drop a member id from the roster (idempotent)
pub fn remove_member(db: &Database, gdi_id: &str, member_id: &str) -> RepoResult<()> {
    let mut entry = db
        .gdis()
        .get_mut(gdi_id)
        .ok_or_else(|| RepoError::NotFound(format!("GDI {gdi_id} not found")))?;
    let gdi = entry.value_mut();
    let before = gdi.member_ids.len();
    gdi.member_ids.retain(|m| m != member_id);
    if gdi.member_ids.len() != before {
        gdi.updated_at = now_millis();
    }
    Ok(())
}
