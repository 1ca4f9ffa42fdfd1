// ── Project domain types ──

use serde::{Deserialize, Serialize};

use super::ids::ProjectId;

/// A showcased project. Tags keep their authored order; the first two are
/// shown on the grid card, all of them in the detail overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub id: ProjectId,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    pub description: String,
    #[serde(default, rename = "details")]
    pub detail_text: String,
    #[serde(default, rename = "icon")]
    pub icon_ref: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, rename = "github")]
    pub github_link: String,
    #[serde(default, rename = "demo")]
    pub demo_link: String,
}

impl ProjectEntry {
    /// Tags shown on the compact grid card.
    pub fn card_tags(&self) -> &[String] {
        &self.tags[..self.tags.len().min(2)]
    }
}
