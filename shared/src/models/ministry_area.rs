//! Ministry Area Model

use serde::{Deserialize, Serialize};

use crate::util::double_option;
use crate::validate::{
    self, IssueList, MAX_NAME_LEN, MAX_NOTE_LEN, MIN_NAME_LEN, ValidationError,
};

/// Minimum description length for a ministry area
const MIN_DESCRIPTION_LEN: usize = 10;

/// Ministry area entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinistryArea {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Member id of the leader
    pub leader_id: String,
    #[serde(default)]
    pub member_ids: Vec<String>,
    pub image_url: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create ministry area payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinistryAreaCreate {
    pub name: String,
    pub description: String,
    pub leader_id: String,
    #[serde(default)]
    pub member_ids: Vec<String>,
    pub image_url: Option<String>,
}

impl MinistryAreaCreate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut out = IssueList::new();
        validate::check_text(&mut out, &self.name, "name", MIN_NAME_LEN, MAX_NAME_LEN);
        validate::check_text(
            &mut out,
            &self.description,
            "description",
            MIN_DESCRIPTION_LEN,
            MAX_NOTE_LEN,
        );
        if self.leader_id.trim().is_empty() {
            out.push("leaderId", "a leader must be selected");
        }
        validate::check_optional_url(&mut out, self.image_url.as_deref(), "imageUrl");
        out.finish()
    }
}

/// Update ministry area payload (partial)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinistryAreaUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub leader_id: Option<String>,
    pub member_ids: Option<Vec<String>>,
    #[serde(default, with = "double_option", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<Option<String>>,
}

impl MinistryAreaUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut out = IssueList::new();
        if let Some(v) = &self.name {
            validate::check_text(&mut out, v, "name", MIN_NAME_LEN, MAX_NAME_LEN);
        }
        if let Some(v) = &self.description {
            validate::check_text(&mut out, v, "description", MIN_DESCRIPTION_LEN, MAX_NOTE_LEN);
        }
        if let Some(v) = &self.leader_id
            && v.trim().is_empty()
        {
            out.push("leaderId", "a leader must be selected");
        }
        if let Some(v) = &self.image_url {
            validate::check_optional_url(&mut out, v.as_deref(), "imageUrl");
        }
        out.finish()
    }
}
