//! Screen identifier enum.

use std::fmt;

use folio_core::Section;

/// Identifies each primary TUI screen, navigable by number keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScreenId {
    #[default]
    About, // 1
    Journey,  // 2
    Skills,   // 3
    Projects, // 4
}

impl ScreenId {
    /// All screens in tab-bar order.
    pub const ALL: [ScreenId; 4] = [Self::About, Self::Journey, Self::Skills, Self::Projects];

    /// Numeric key (1-4) for this screen.
    pub fn number(self) -> u8 {
        match self {
            Self::About => 1,
            Self::Journey => 2,
            Self::Skills => 3,
            Self::Projects => 4,
        }
    }

    /// Screen from a numeric key (1-4). Returns None for out-of-range.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::About),
            2 => Some(Self::Journey),
            3 => Some(Self::Skills),
            4 => Some(Self::Projects),
            _ => None,
        }
    }

    /// Next screen in tab order (wraps around).
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&s| s == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous screen in tab order (wraps around).
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|&s| s == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Short label for the tab bar.
    pub fn label(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Journey => "Journey",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
        }
    }
}

impl From<Section> for ScreenId {
    fn from(section: Section) -> Self {
        match section {
            Section::About => Self::About,
            Section::Journey => Self::Journey,
            Section::Skills => Self::Skills,
            Section::Projects => Self::Projects,
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
