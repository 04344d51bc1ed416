//! Member list query
//!
//! Search is a case-insensitive substring match over first name, last name,
//! full name, email, phone and role labels; a member matches when any field
//! does. Sorting is stable so equal keys keep their input order, and the
//! reported total is the filtered set size, independent of the requested
//! page.

use std::cmp::Ordering;

use serde::Deserialize;

use shared::PaginatedResponse;
use shared::models::Member;

/// Sortable member fields plus the synthetic full name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    FullName,
    FirstName,
    LastName,
    Phone,
    Status,
    BirthDate,
    ChurchJoinDate,
    CreatedAt,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

fn default_page() -> usize {
    1
}

fn default_page_size() -> usize {
    25
}

/// Query-string parameters of the member list endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberQuery {
    pub search: Option<String>,
    #[serde(default)]
    pub sort_key: SortKey,
    #[serde(default)]
    pub sort_order: SortOrder,
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for MemberQuery {
    fn default() -> Self {
        Self {
            search: None,
            sort_key: SortKey::default(),
            sort_order: SortOrder::default(),
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

/// Filter, sort and slice the roster into one page
pub fn query_members(members: &[Member], query: &MemberQuery) -> PaginatedResponse<Member> {
    let needle = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    let mut matched: Vec<Member> = members
        .iter()
        .filter(|m| match &needle {
            Some(needle) => matches_search(m, needle),
            None => true,
        })
        .cloned()
        .collect();

    // sort_by is stable, so ties keep their input order
    matched.sort_by(|a, b| {
        let ord = compare(a, b, query.sort_key);
        match query.sort_order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });

    let total = matched.len();
    let page = query.page.max(1);
    let page_size = query.page_size.max(1);
    let items: Vec<Member> = matched
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .collect();

    PaginatedResponse::new(items, total as u64, page as u32, page_size as u32)
}

fn matches_search(member: &Member, needle: &str) -> bool {
    member.first_name.to_lowercase().contains(needle)
        || member.last_name.to_lowercase().contains(needle)
        || member.full_name().to_lowercase().contains(needle)
        || member.email.to_lowercase().contains(needle)
        || member.phone.to_lowercase().contains(needle)
        || member
            .roles
            .iter()
            .any(|r| r.display_name().to_lowercase().contains(needle))
}

fn compare(a: &Member, b: &Member, key: SortKey) -> Ordering {
    match key {
        SortKey::FullName => cmp_str(&a.full_name(), &b.full_name()),
        SortKey::FirstName => cmp_str(&a.first_name, &b.first_name),
        SortKey::LastName => cmp_str(&a.last_name, &b.last_name),
        SortKey::Phone => cmp_str(&a.phone, &b.phone),
        SortKey::Status => cmp_str(status_label(a), status_label(b)),
        SortKey::BirthDate => date_value(a.birth_date.as_deref())
            .cmp(&date_value(b.birth_date.as_deref())),
        SortKey::ChurchJoinDate => date_value(a.church_join_date.as_deref())
            .cmp(&date_value(b.church_join_date.as_deref())),
        SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
    }
}

/// Case-insensitive comparison so "ana" and "Ana" collate together
fn cmp_str(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn status_label(m: &Member) -> &'static str {
    match m.status {
        shared::models::MemberStatus::Active => "Active",
        shared::models::MemberStatus::Inactive => "Inactive",
        shared::models::MemberStatus::New => "New",
    }
}

/// Missing or unparsable dates sort as earliest
fn date_value(date: Option<&str>) -> i64 {
    date.and_then(|d| chrono::NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp())
        .unwrap_or(0)
}
