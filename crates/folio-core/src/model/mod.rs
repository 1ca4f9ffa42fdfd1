//! Domain model: catalog entries and their identifiers.

pub mod certificate;
pub mod ids;
pub mod journey;
pub mod profile;
pub mod project;
pub mod skill;

pub use certificate::CertificateEntry;
pub use ids::{CategoryId, CertificateId, ProjectId};
pub use journey::JourneyEntry;
pub use profile::{Education, Profile};
pub use project::ProjectEntry;
pub use skill::{MAX_LEVEL, SkillCategory, SkillEntry, SkillLevel};
