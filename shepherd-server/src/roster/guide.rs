//! Guide name resolution
//!
//! Resolving a member's small-group guide distinguishes three failure
//! states: no GDI assigned, the assigned GDI missing from the roster,
//! and the GDI's guide missing from the member roster.

use std::fmt;

use shared::models::{Gdi, Member};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuideName {
    Resolved(String),
    Unassigned,
    GroupNotFound,
    GuideNotFound,
}

impl fmt::Display for GuideName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuideName::Resolved(name) => f.write_str(name),
            GuideName::Unassigned => f.write_str("unassigned"),
            GuideName::GroupNotFound => f.write_str("group not found"),
            GuideName::GuideNotFound => f.write_str("guide not found"),
        }
    }
}

/// Look up the display name of a member's GDI guide
pub fn resolve_guide_name(member: &Member, gdis: &[Gdi], members: &[Member]) -> GuideName {
    let Some(gdi_id) = member.assigned_gdi_id.as_deref() else {
        return GuideName::Unassigned;
    };
    let Some(gdi) = gdis.iter().find(|g| g.id == gdi_id) else {
        return GuideName::GroupNotFound;
    };
    match members.iter().find(|m| m.id == gdi.guide_id) {
        Some(guide) => GuideName::Resolved(guide.full_name()),
        None => GuideName::GuideNotFound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::MemberStatus;

    fn member(id: &str, first: &str, last: &str, gdi: Option<&str>) -> Member {
        Member {
            id: id.into(),
            first_name: first.into(),
            last_name: last.into(),
            email: format!("{first}@example.com").to_lowercase(),
            phone: "5550000000".into(),
            birth_date: None,
            church_join_date: None,
            baptism_date: None,
            attends_life_school: false,
            attends_bible_institute: false,
            from_another_church: false,
            status: MemberStatus::Active,
            avatar_url: None,
            assigned_gdi_id: gdi.map(Into::into),
            assigned_area_ids: vec![],
            roles: vec![],
            created_at: 0,
            updated_at: 0,
        }
    }

    fn gdi(id: &str, guide_id: &str) -> Gdi {
        Gdi {
            id: id.into(),
            name: format!("GDI {id}"),
            guide_id: guide_id.into(),
            member_ids: vec![],
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn resolves_each_state() {
        let guide = member("g-1", "Carla", "Ruiz", None);
        let assigned = member("m-1", "Ana", "García", Some("gdi-1"));
        let unassigned = member("m-2", "Beto", "Díaz", None);
        let dangling_group = member("m-3", "Caro", "Luna", Some("gdi-gone"));
        let dangling_guide = member("m-4", "Dani", "Paz", Some("gdi-2"));

        let gdis = vec![gdi("gdi-1", "g-1"), gdi("gdi-2", "g-gone")];
        let members = vec![guide.clone(), assigned.clone()];

        assert_eq!(
            resolve_guide_name(&assigned, &gdis, &members),
            GuideName::Resolved("Carla Ruiz".into())
        );
        assert_eq!(
            resolve_guide_name(&unassigned, &gdis, &members),
            GuideName::Unassigned
        );
        assert_eq!(
            resolve_guide_name(&dangling_group, &gdis, &members),
            GuideName::GroupNotFound
        );
        assert_eq!(
            resolve_guide_name(&dangling_guide, &gdis, &members),
            GuideName::GuideNotFound
        );
    }
}
