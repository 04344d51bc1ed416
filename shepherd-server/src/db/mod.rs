//! In-process data store
//!
//! One concurrent map per entity, reachable by key lookups.
//! Repositories (see [`repository`]) are the only access path.

pub mod repository;

use std::sync::Arc;

use dashmap::DashMap;

use shared::models::{AttendanceRecord, Gdi, Meeting, MeetingSeries, Member, MinistryArea};

/// Cloneable store handle, one table per entity
#[derive(Clone, Default)]
pub struct Database {
    inner: Arc<Tables>,
}

#[derive(Default)]
struct Tables {
    members: DashMap<String, Member>,
    gdis: DashMap<String, Gdi>,
    ministry_areas: DashMap<String, MinistryArea>,
    meeting_series: DashMap<String, MeetingSeries>,
    meetings: DashMap<String, Meeting>,
    /// Keyed on (meeting_id, member_id) — the at-most-one-record invariant
    attendance: DashMap<(String, String), AttendanceRecord>,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn members(&self) -> &DashMap<String, Member> {
        &self.inner.members
    }

    pub(crate) fn gdis(&self) -> &DashMap<String, Gdi> {
        &self.inner.gdis
    }

    pub(crate) fn ministry_areas(&self) -> &DashMap<String, MinistryArea> {
        &self.inner.ministry_areas
    }

    pub(crate) fn meeting_series(&self) -> &DashMap<String, MeetingSeries> {
        &self.inner.meeting_series
    }

    pub(crate) fn meetings(&self) -> &DashMap<String, Meeting> {
        &self.inner.meetings
    }

    pub(crate) fn attendance(&self) -> &DashMap<(String, String), AttendanceRecord> {
        &self.inner.attendance
    }
}
