//! Inline proficiency bar for skill cards.

use folio_core::SkillLevel;
use folio_core::model::MAX_LEVEL;
use ratatui::{
    style::Style,
    text::{Line, Span},
};

use crate::theme;

/// `width` cells of bar followed by the percentage, e.g. `█████░░░░░ 50%`.
pub fn level_bar(level: u8, width: u16) -> Line<'static> {
    let level = level.min(MAX_LEVEL);
    let width = usize::from(width);
    let filled = (usize::from(level) * width + usize::from(MAX_LEVEL) / 2) / usize::from(MAX_LEVEL);
    let color = theme::level_color(SkillLevel::from_level(level));

    Line::from(vec![
        Span::styled("█".repeat(filled), Style::default().fg(color)),
        Span::styled("░".repeat(width - filled), theme::muted()),
        Span::styled(format!(" {level}%"), theme::body()),
    ])
}
