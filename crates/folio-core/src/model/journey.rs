// ── Journey (timeline) domain types ──

use serde::{Deserialize, Serialize};

/// One milestone on the education / career timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JourneyEntry {
    pub period: String,
    pub title: String,
    pub institution: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}
