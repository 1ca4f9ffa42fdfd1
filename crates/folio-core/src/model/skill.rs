// ── Skill domain types ──

use indexmap::IndexSet;
use strum::{Display, EnumIter, IntoStaticStr};

use super::ids::CategoryId;

/// Highest representable proficiency level.
pub const MAX_LEVEL: u8 = 100;

/// A named group of skills, e.g. "Frontend Development".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCategory {
    pub id: CategoryId,
    pub title: String,
}

/// One skill with a proficiency level in `0..=100`.
///
/// Built only through [`Portfolio`](crate::Portfolio) construction, which
/// rejects out-of-range levels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillEntry {
    pub name: String,
    pub level: u8,
    pub tags: IndexSet<String>,
    pub category: CategoryId,
}

impl SkillEntry {
    /// Human label for the proficiency level.
    pub fn level_label(&self) -> SkillLevel {
        SkillLevel::from_level(self.level)
    }

    /// The strings a certificate tag is matched against: the skill name
    /// followed by every tag.
    pub fn match_candidates(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.tags.iter().map(String::as_str))
    }
}

/// Proficiency bucket shown under a skill card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, IntoStaticStr)]
pub enum SkillLevel {
    Expert,
    Advanced,
    Intermediate,
    Learning,
}

impl SkillLevel {
    pub fn from_level(level: u8) -> Self {
        match level {
            90.. => Self::Expert,
            80..=89 => Self::Advanced,
            70..=79 => Self::Intermediate,
            _ => Self::Learning,
        }
    }
}
