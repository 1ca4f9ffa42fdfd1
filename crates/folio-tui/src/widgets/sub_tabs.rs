//! Horizontal sub-tab bar used inside a screen (Skills / Certifications).

use ratatui::style::Modifier;
use ratatui::text::{Line, Span};

use crate::theme;

/// One line with every label inline; the active one bracketed in purple,
/// the rest dim.
pub fn render_sub_tabs(labels: &[String], active_index: usize) -> Line<'static> {
    let mut spans = Vec::with_capacity(labels.len() * 2);

    for (i, label) in labels.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", theme::key_hint()));
        }

        if i == active_index {
            spans.push(Span::styled(
                format!("[{label}]"),
                theme::tab_active().add_modifier(Modifier::UNDERLINED),
            ));
        } else {
            spans.push(Span::styled(label.clone(), theme::tab_inactive()));
        }
    }

    Line::from(spans)
}
