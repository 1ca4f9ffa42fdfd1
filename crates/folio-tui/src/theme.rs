//! Neon palette and semantic styling for the portfolio screens.

use folio_core::SkillLevel;
use ratatui::style::{Color, Modifier, Style};

// ── Core Palette ──────────────────────────────────────────────────────

pub const ELECTRIC_PURPLE: Color = Color::Rgb(225, 53, 255); // #e135ff
pub const NEON_CYAN: Color = Color::Rgb(128, 255, 234); // #80ffea
pub const CORAL: Color = Color::Rgb(255, 106, 193); // #ff6ac1
pub const ELECTRIC_YELLOW: Color = Color::Rgb(241, 250, 140); // #f1fa8c
pub const SUCCESS_GREEN: Color = Color::Rgb(80, 250, 123); // #50fa7b

// ── Extended Palette ──────────────────────────────────────────────────

pub const DIM_WHITE: Color = Color::Rgb(189, 193, 207); // #bdc1cf
pub const BORDER_GRAY: Color = Color::Rgb(98, 114, 164); // #6272a4
pub const BG_HIGHLIGHT: Color = Color::Rgb(40, 42, 54); // #282a36
pub const BG_DARK: Color = Color::Rgb(30, 31, 41); // #1e1f29
pub const LIGHT_BLUE: Color = Color::Rgb(139, 233, 253); // #8be9fd
pub const SHADOW: Color = Color::Rgb(68, 71, 90); // #44475a

// ── Semantic Styles ───────────────────────────────────────────────────

/// Title text for blocks/panels.
pub fn title_style() -> Style {
    Style::default().fg(NEON_CYAN).add_modifier(Modifier::BOLD)
}

/// Border for a focused panel.
pub fn border_focused() -> Style {
    Style::default().fg(ELECTRIC_PURPLE)
}

/// Border for an unfocused panel.
pub fn border_default() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// Border for the card under the pointer.
pub fn border_hover() -> Style {
    Style::default().fg(NEON_CYAN)
}

/// Body text.
pub fn body() -> Style {
    Style::default().fg(DIM_WHITE)
}

/// Secondary text: issuers, dates, institutions.
pub fn muted() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// `#tag` chips.
pub fn tag() -> Style {
    Style::default().fg(CORAL)
}

/// Links (resume, verify, GitHub, demo).
pub fn link() -> Style {
    Style::default()
        .fg(LIGHT_BLUE)
        .add_modifier(Modifier::UNDERLINED)
}

/// Active tab in the tab bar.
pub fn tab_active() -> Style {
    Style::default()
        .fg(ELECTRIC_PURPLE)
        .add_modifier(Modifier::BOLD)
}

/// Inactive tab in the tab bar.
pub fn tab_inactive() -> Style {
    Style::default().fg(DIM_WHITE)
}

/// Key hint text (e.g., "q quit  ? help").
pub fn key_hint() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// Key hint key character.
pub fn key_hint_key() -> Style {
    Style::default().fg(NEON_CYAN).add_modifier(Modifier::BOLD)
}

/// Banner shown while a certificate filters the skill grid.
pub fn filter_banner() -> Style {
    Style::default()
        .fg(ELECTRIC_YELLOW)
        .add_modifier(Modifier::BOLD)
}

/// Gauge colour per proficiency band.
pub fn level_color(level: SkillLevel) -> Color {
    match level {
        SkillLevel::Expert => SUCCESS_GREEN,
        SkillLevel::Advanced => NEON_CYAN,
        SkillLevel::Intermediate => LIGHT_BLUE,
        SkillLevel::Learning => ELECTRIC_YELLOW,
    }
}
