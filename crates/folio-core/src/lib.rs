//! View state and catalogs for the folio portfolio.
//!
//! Everything here is rendering-agnostic: the TUI consumes these types
//! but nothing in this crate knows about terminals.
//!
//! - **[`Portfolio`]** — Immutable catalogs (skills grouped by category,
//!   certificates, projects, journey milestones, profile) assembled once
//!   from [`PortfolioContent`] and validated at construction.
//!
//! - **[`CrossFilterController`]** — Selecting a certificate narrows the
//!   visible skills to those whose name or tags overlap the certificate's
//!   tags; also owns the Skills / Certificates tab.
//!
//! - **[`DetailModalController`]** — At most one project or certificate
//!   detail overlay open at a time.
//!
//! - **[`tilt`]** — Pointer offset normalization, spring smoothing and the
//!   offset → rotation mapping behind the card tilt effect.

pub mod catalog;
pub mod error;
pub mod filter;
pub mod modal;
pub mod model;
pub mod tilt;
pub mod view;

// ── Primary re-exports ──────────────────────────────────────────────
pub use catalog::{
    CertificateCatalog, Portfolio, PortfolioContent, ProjectCatalog, SkillCatalog,
};
pub use error::CoreError;
pub use filter::{CrossFilterController, CrossFilterState, SkillsTab};
pub use modal::{DetailKind, DetailModalController, DetailTarget};
pub use tilt::{Bounds, PointerOffset, Rotation, TiltConfig, TiltState};
pub use view::{Section, ViewCommand};

pub use model::{
    CategoryId, CertificateEntry, CertificateId, Education, JourneyEntry, Profile, ProjectEntry,
    ProjectId, SkillCategory, SkillEntry, SkillLevel,
};
