//! Card widget with a pointer-following tilt.
//!
//! A terminal cell grid can't rotate, so tilt is drawn as depth: the card
//! body shifts away from the edge the pointer presses down, a shadow strip
//! fills the vacated edge, and the glyph darkens with the angle. A flat
//! card draws no shadow.

use folio_core::Rotation;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Text},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use crate::theme;

/// Angles below this read as flat.
const DEAD_ZONE_DEG: f64 = 1.0;

/// Which edges carry a shadow and how dark it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shadow {
    /// `1` right edge, `-1` left edge, `0` neither.
    pub dx: i8,
    /// `1` bottom edge, `-1` top edge, `0` neither.
    pub dy: i8,
    pub glyph: &'static str,
}

fn edge(angle_deg: f64) -> i8 {
    if angle_deg > DEAD_ZONE_DEG {
        1
    } else if angle_deg < -DEAD_ZONE_DEG {
        -1
    } else {
        0
    }
}

/// Shadow for a rotation. Rotation about y follows the pointer's
/// horizontal offset, rotation about x the inverse of its vertical one.
pub fn shadow_for(rotation: Rotation, max_angle_deg: f64) -> Option<Shadow> {
    let dx = edge(rotation.y_deg);
    let dy = -edge(rotation.x_deg);
    if dx == 0 && dy == 0 {
        return None;
    }

    let steepness = if max_angle_deg > 0.0 {
        (rotation.x_deg.abs().max(rotation.y_deg.abs()) / max_angle_deg).clamp(0.0, 1.0)
    } else {
        1.0
    };
    let glyph = if steepness >= 2.0 / 3.0 {
        "▓"
    } else if steepness >= 1.0 / 3.0 {
        "▒"
    } else {
        "░"
    };

    Some(Shadow { dx, dy, glyph })
}

pub struct TiltCard<'a> {
    title: Line<'a>,
    body: Text<'a>,
    rotation: Rotation,
    max_angle_deg: f64,
    selected: bool,
    hovered: bool,
}

impl<'a> TiltCard<'a> {
    pub fn new(title: impl Into<Line<'a>>, body: impl Into<Text<'a>>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            rotation: Rotation::default(),
            max_angle_deg: 0.0,
            selected: false,
            hovered: false,
        }
    }

    pub fn rotation(mut self, rotation: Rotation, max_angle_deg: f64) -> Self {
        self.rotation = rotation;
        self.max_angle_deg = max_angle_deg;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn hovered(mut self, hovered: bool) -> Self {
        self.hovered = hovered;
        self
    }
}

impl Widget for TiltCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 3 {
            return;
        }

        let shadow = shadow_for(self.rotation, self.max_angle_deg);

        // The body is one cell narrower and shorter than the slot; the spare
        // column/row holds the shadow.
        let (dx, dy) = shadow.map_or((0, 0), |s| (s.dx, s.dy));
        let card = Rect::new(
            area.x + u16::from(dx < 0),
            area.y + u16::from(dy < 0),
            area.width - 1,
            area.height - 1,
        );

        if let Some(shadow) = shadow {
            let style = Style::default().fg(theme::SHADOW);
            let mut paint = |x: u16, y: u16| {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol(shadow.glyph).set_style(style);
                }
            };
            if shadow.dx != 0 {
                let x = if shadow.dx > 0 { card.right() } else { area.x };
                for y in card.y + 1..card.bottom() {
                    paint(x, y);
                }
            }
            if shadow.dy != 0 {
                let y = if shadow.dy > 0 { card.bottom() } else { area.y };
                for x in card.x + 1..card.right() {
                    paint(x, y);
                }
            }
        }

        let mut border_style = if self.selected {
            theme::border_focused()
        } else if self.hovered {
            theme::border_hover()
        } else {
            theme::border_default()
        };
        if shadow.is_some() {
            border_style = border_style.add_modifier(Modifier::BOLD);
        }

        let block = Block::default()
            .title(self.title)
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);
        let inner = block.inner(card);
        block.render(card, buf);

        Paragraph::new(self.body)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn symbol(buf: &Buffer, x: u16, y: u16) -> String {
        buf.cell((x, y))
            .map(|c| c.symbol().to_owned())
            .unwrap_or_default()
    }

    #[test]
    fn flat_card_has_no_shadow() {
        assert_eq!(shadow_for(Rotation::default(), 15.0), None);
        let barely = Rotation {
            x_deg: 0.5,
            y_deg: -0.9,
        };
        assert_eq!(shadow_for(barely, 15.0), None);
    }

    #[test]
    fn shadow_sits_under_the_pointer() {
        // pointer at the right edge, vertically centred
        let right = Rotation {
            x_deg: 0.0,
            y_deg: 15.0,
        };
        assert_eq!(
            shadow_for(right, 15.0),
            Some(Shadow {
                dx: 1,
                dy: 0,
                glyph: "▓"
            })
        );

        // pointer near the top-left corner
        let top_left = Rotation {
            x_deg: 6.0,
            y_deg: -3.0,
        };
        assert_eq!(
            shadow_for(top_left, 15.0),
            Some(Shadow {
                dx: -1,
                dy: -1,
                glyph: "▒"
            })
        );
    }

    #[test]
    fn shadow_flips_with_rotation() {
        let r = Rotation {
            x_deg: -4.0,
            y_deg: 2.0,
        };
        let flipped = Rotation {
            x_deg: 4.0,
            y_deg: -2.0,
        };
        let a = shadow_for(r, 15.0).map(|s| (s.dx, s.dy));
        let b = shadow_for(flipped, 15.0).map(|s| (-s.dx, -s.dy));
        assert_eq!(a, b);
    }

    #[test]
    fn renders_shadow_strip_on_pressed_edge() {
        let area = Rect::new(0, 0, 12, 5);
        let mut buf = Buffer::empty(area);
        TiltCard::new(" HTML ", "90%")
            .rotation(
                Rotation {
                    x_deg: 0.0,
                    y_deg: 15.0,
                },
                15.0,
            )
            .render(area, &mut buf);

        assert_eq!(symbol(&buf, 0, 0), "╭");
        assert_eq!(symbol(&buf, 11, 2), "▓");
        assert_eq!(symbol(&buf, 11, 0), " ");
    }

    #[test]
    fn flat_card_leaves_margin_blank() {
        let area = Rect::new(0, 0, 12, 5);
        let mut buf = Buffer::empty(area);
        TiltCard::new(" HTML ", "90%").render(area, &mut buf);

        assert_eq!(symbol(&buf, 0, 0), "╭");
        assert_eq!(symbol(&buf, 10, 0), "╮");
        assert_eq!(symbol(&buf, 11, 2), " ");
        assert_eq!(symbol(&buf, 5, 4), " ");
    }
}
