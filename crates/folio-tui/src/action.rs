//! All possible UI actions. Actions are the sole mechanism for state mutation.

use folio_core::{CertificateId, DetailTarget, Section, SkillsTab, ViewCommand};

use crate::screen::ScreenId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ── Lifecycle ──
    Quit,
    Tick,
    Render,
    Resize(u16, u16),

    // ── Navigation ──
    SwitchScreen(ScreenId),
    GoBack,
    /// Bring a section to the front with its scroll reset.
    ScrollTo(Section),
    ToggleHelp,

    // ── Cross-filter ──
    SelectCertificate(CertificateId),
    ClearFilter,
    SetSkillsTab(SkillsTab),

    // ── Detail overlay ──
    OpenDetail(DetailTarget),
    CloseDetail,
}

impl From<ViewCommand> for Action {
    fn from(command: ViewCommand) -> Self {
        match command {
            ViewCommand::ScrollTo(section) => Self::ScrollTo(section),
        }
    }
}
