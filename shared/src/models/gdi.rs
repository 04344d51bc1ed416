//! GDI Model (small integration group)

use serde::{Deserialize, Serialize};

use crate::validate::{self, IssueList, MAX_NAME_LEN, MIN_NAME_LEN, ValidationError};

/// GDI entity
///
/// `member_ids` and the members' `assigned_gdi_id` back-references are kept
/// consistent by the membership service, not by storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gdi {
    pub id: String,
    pub name: String,
    /// Member id of the guide
    pub guide_id: String,
    #[serde(default)]
    pub member_ids: Vec<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create GDI payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GdiCreate {
    pub name: String,
    pub guide_id: String,
    #[serde(default)]
    pub member_ids: Vec<String>,
}

impl GdiCreate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut out = IssueList::new();
        validate::check_text(&mut out, &self.name, "name", MIN_NAME_LEN, MAX_NAME_LEN);
        if self.guide_id.trim().is_empty() {
            out.push("guideId", "a guide must be selected");
        }
        out.finish()
    }
}

/// Update GDI payload (partial)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GdiUpdate {
    pub name: Option<String>,
    pub guide_id: Option<String>,
    pub member_ids: Option<Vec<String>>,
}

impl GdiUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut out = IssueList::new();
        if let Some(v) = &self.name {
            validate::check_text(&mut out, v, "name", MIN_NAME_LEN, MAX_NAME_LEN);
        }
        if let Some(v) = &self.guide_id
            && v.trim().is_empty()
        {
            out.push("guideId", "a guide must be selected");
        }
        out.finish()
    }
}
