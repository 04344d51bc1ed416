//! Meeting Series Repository
//!
//! Series are validated by the caller before they reach this layer; updates
//! go through fetch → merge → validate → `save` so cross-field recurrence
//! rules are checked against the merged result.

use shared::models::MeetingSeries;

use super::{RepoError, RepoResult};
use crate::db::Database;

/// All series, sorted by name
pub fn find_all(db: &Database) -> Vec<MeetingSeries> {
    let mut series: Vec<MeetingSeries> = db
        .meeting_series()
        .iter()
        .map(|e| e.value().clone())
        .collect();
    series.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
    series
}

pub fn find_by_id(db: &Database, id: &str) -> Option<MeetingSeries> {
    db.meeting_series().get(id).map(|e| e.value().clone())
}

pub fn create(db: &Database, series: MeetingSeries) -> MeetingSeries {
    db.meeting_series().insert(series.id.clone(), series.clone());
    series
}

/// Replace an existing series with its merged update
pub fn save(db: &Database, series: MeetingSeries) -> RepoResult<MeetingSeries> {
    if !db.meeting_series().contains_key(&series.id) {
        return Err(RepoError::NotFound(format!(
            "Meeting series {} not found",
            series.id
        )));
    }
    db.meeting_series().insert(series.id.clone(), series.clone());
    Ok(series)
}

/// Delete the series template. Materialized meetings are left untouched;
/// an orphaned meeting remains valid standalone.
pub fn delete(db: &Database, id: &str) -> bool {
    db.meeting_series().remove(id).is_some()
}
