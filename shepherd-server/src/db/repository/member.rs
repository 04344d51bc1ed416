//! Member Repository

use shared::models::{Member, MemberCreate, MemberStatus, MemberUpdate};
use shared::util::{new_id, now_millis};

use super::{RepoError, RepoResult};
use crate::db::Database;

/// All members, newest first
pub fn find_all(db: &Database) -> Vec<Member> {
    let mut members: Vec<Member> = db.members().iter().map(|e| e.value().clone()).collect();
    members.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
    members
}

pub fn find_by_id(db: &Database, id: &str) -> Option<Member> {
    db.members().get(id).map(|e| e.value().clone())
}

pub fn create(db: &Database, data: MemberCreate) -> Member {
    let now = now_millis();
    let member = Member {
        id: new_id(),
        first_name: data.first_name,
        last_name: data.last_name,
        email: data.email,
        phone: data.phone,
        birth_date: data.birth_date,
        church_join_date: data.church_join_date,
        baptism_date: data.baptism_date,
        attends_life_school: data.attends_life_school,
        attends_bible_institute: data.attends_bible_institute,
        from_another_church: data.from_another_church,
        status: data.status,
        avatar_url: data.avatar_url,
        assigned_gdi_id: data.assigned_gdi_id,
        assigned_area_ids: data.assigned_area_ids,
        roles: data.roles,
        created_at: now,
        updated_at: now,
    };
    db.members().insert(member.id.clone(), member.clone());
    member
}

pub fn update(db: &Database, id: &str, data: MemberUpdate) -> RepoResult<Member> {
    let mut entry = db
        .members()
        .get_mut(id)
        .ok_or_else(|| RepoError::NotFound(format!("Member {id} not found")))?;
    let member = entry.value_mut();

    if let Some(v) = data.first_name {
        member.first_name = v;
    }
    if let Some(v) = data.last_name {
        member.last_name = v;
    }
    if let Some(v) = data.email {
        member.email = v;
    }
    if let Some(v) = data.phone {
        member.phone = v;
    }
    if let Some(v) = data.birth_date {
        member.birth_date = v;
    }
    if let Some(v) = data.church_join_date {
        member.church_join_date = v;
    }
    if let Some(v) = data.baptism_date {
        member.baptism_date = v;
    }
    if let Some(v) = data.attends_life_school {
        member.attends_life_school = v;
    }
    if let Some(v) = data.attends_bible_institute {
        member.attends_bible_institute = v;
    }
    if let Some(v) = data.from_another_church {
        member.from_another_church = v;
    }
    if let Some(v) = data.status {
        member.status = v;
    }
    if let Some(v) = data.avatar_url {
        member.avatar_url = v;
    }
    if let Some(v) = data.assigned_gdi_id {
        member.assigned_gdi_id = v;
    }
    if let Some(v) = data.assigned_area_ids {
        member.assigned_area_ids = v;
    }
    if let Some(v) = data.roles {
        member.roles = v;
    }
    member.updated_at = now_millis();

    Ok(member.clone())
}

/// Soft delete: members are never removed, they transition to Inactive
pub fn deactivate(db: &Database, id: &str) -> RepoResult<bool> {
    let mut entry = db
        .members()
        .get_mut(id)
        .ok_or_else(|| RepoError::NotFound(format!("Member {id} not found")))?;
    let member = entry.value_mut();
    if member.status == MemberStatus::Inactive {
        return Ok(false);
    }
    member.status = MemberStatus::Inactive;
    member.updated_at = now_millis();
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::MemberStatus;

    fn sample(first: &str) -> MemberCreate {
        MemberCreate {
            first_name: first.into(),
            last_name: "Pérez".into(),
            email: format!("{}@example.com", first.to_lowercase()),
            phone: "5550001111".into(),
            birth_date: None,
            church_join_date: None,
            baptism_date: None,
            attends_life_school: false,
            attends_bible_institute: false,
            from_another_church: false,
            status: MemberStatus::Active,
            avatar_url: None,
            assigned_gdi_id: None,
            assigned_area_ids: vec![],
            roles: vec![],
        }
    }

    #[test]
    fn deactivate_keeps_the_record() {
        let db = Database::new();
        let member = create(&db, sample("Ana"));

        assert!(deactivate(&db, &member.id).unwrap());
        let kept = find_by_id(&db, &member.id).unwrap();
        assert_eq!(kept.status, MemberStatus::Inactive);

        // Second deactivation is a no-op, not an error
        assert!(!deactivate(&db, &member.id).unwrap());
    }

    #[test]
    fn update_unknown_member_is_not_found() {
        let db = Database::new();
        let err = update(&db, "missing", MemberUpdate::default()).unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }
}
