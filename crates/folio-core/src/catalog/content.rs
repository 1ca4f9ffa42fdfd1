// ── Authored content shape ──
//
// Mirrors the portfolio TOML one-to-one. Nothing here is validated; the
// `Portfolio` constructor turns it into checked catalogs.

use serde::{Deserialize, Serialize};

use crate::model::{JourneyEntry, Profile, ProjectEntry};

/// Raw, unvalidated portfolio content as authored in TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortfolioContent {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub categories: Vec<CategoryContent>,
    #[serde(default)]
    pub certificates: Vec<CertificateContent>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub journey: Vec<JourneyEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryContent {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub skills: Vec<SkillContent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillContent {
    pub name: String,
    /// Kept wide so out-of-range values reach validation instead of
    /// failing as a TOML type error.
    pub level: u32,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificateContent {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub issuer: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub tags: Vec<String>,
}
