// ── Profile (about) domain types ──

use serde::{Deserialize, Serialize};

/// Biography shown on the About screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub headline: String,
    /// Rotating role titles under the name.
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub bio: Vec<String>,
    #[serde(default)]
    pub resume_link: Option<String>,
    #[serde(default)]
    pub education: Vec<Education>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub duration: String,
    #[serde(default)]
    pub location: String,
}
