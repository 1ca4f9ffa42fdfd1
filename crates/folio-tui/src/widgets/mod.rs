//! Reusable rendering pieces shared by the screens.

pub mod backdrop;
pub mod grid;
pub mod level_gauge;
pub mod sub_tabs;
pub mod tilt_card;

use ratatui::layout::Rect;

/// A `width` × `height` rect centred in `area`, shrunk to leave a 2-cell
/// margin when `area` is smaller.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));
    let x = area.width.saturating_sub(width) / 2;
    let y = area.height.saturating_sub(height) / 2;
    Rect::new(area.x + x, area.y + y, width, height)
}

/// `#tag` chips separated by spaces.
pub fn tag_line<I, S>(tags: I) -> ratatui::text::Line<'static>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut spans = Vec::new();
    for tag in tags {
        if !spans.is_empty() {
            spans.push(ratatui::text::Span::raw(" "));
        }
        spans.push(ratatui::text::Span::styled(
            format!("#{}", tag.as_ref()),
            crate::theme::tag(),
        ));
    }
    ratatui::text::Line::from(spans)
}
