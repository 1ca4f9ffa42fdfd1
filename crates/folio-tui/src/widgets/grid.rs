//! Card grid geometry, pointer hit-testing and hover tracking.
//!
//! Screens lay cards out with a [`GridSpec`], keep the resulting rects from
//! the last render, and resolve mouse cells against them. Pointer positions
//! are cell centres so a card's middle cell maps to a zero offset.

use folio_core::Bounds;
use ratatui::layout::{Position, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    pub min_card_width: u16,
    pub card_height: u16,
    pub gap: u16,
}

impl GridSpec {
    pub const fn new(min_card_width: u16, card_height: u16, gap: u16) -> Self {
        Self {
            min_card_width,
            card_height,
            gap,
        }
    }

    /// Columns that fit in `width`, at least one.
    pub fn columns(&self, width: u16) -> u16 {
        let pitch = self.min_card_width.saturating_add(self.gap).max(1);
        (width.saturating_add(self.gap) / pitch).max(1)
    }

    /// Rows that fit fully in `height`, at least one.
    pub fn visible_rows(&self, height: u16) -> u16 {
        let pitch = self.card_height.saturating_add(self.gap).max(1);
        (height.saturating_add(self.gap) / pitch).max(1)
    }

    /// Rects for the cards visible in `area` when the grid is scrolled down
    /// by `first_row` rows, paired with their card index.
    pub fn layout(&self, area: Rect, count: usize, first_row: usize) -> Vec<(usize, Rect)> {
        if area.is_empty() || count == 0 {
            return Vec::new();
        }

        let columns = self.columns(area.width);
        let card_width = area
            .width
            .saturating_sub(self.gap.saturating_mul(columns - 1))
            / columns;
        // partially visible rows are drawn clipped
        let row_pitch = self.card_height.saturating_add(self.gap).max(1);
        let rows = area.height.div_ceil(row_pitch);

        let mut cards = Vec::new();
        for row_offset in 0..rows {
            for col in 0..columns {
                let index = (first_row + usize::from(row_offset)) * usize::from(columns)
                    + usize::from(col);
                if index >= count {
                    return cards;
                }
                let x = area.x + col * (card_width + self.gap);
                let y = area.y + row_offset * row_pitch;
                let height = self.card_height.min(area.bottom().saturating_sub(y));
                cards.push((index, Rect::new(x, y, card_width, height)));
            }
        }
        cards
    }
}

/// First row to show so that `selected` stays on screen.
pub fn scroll_to_show(selected: usize, columns: usize, rows: usize, first_row: usize) -> usize {
    let columns = columns.max(1);
    let rows = rows.max(1);
    let row = selected / columns;
    if row < first_row {
        row
    } else if row >= first_row + rows {
        row + 1 - rows
    } else {
        first_row
    }
}

/// The card under a mouse cell.
pub fn hit_test(cards: &[(usize, Rect)], column: u16, row: u16) -> Option<(usize, Rect)> {
    cards
        .iter()
        .copied()
        .find(|(_, rect)| rect.contains(Position::new(column, row)))
}

/// A card rect in pointer space.
pub fn cell_bounds(rect: Rect) -> Bounds {
    Bounds::new(
        f64::from(rect.x),
        f64::from(rect.y),
        f64::from(rect.width),
        f64::from(rect.height),
    )
}

/// Pointer position of a mouse cell: its centre.
pub fn cell_center(column: u16, row: u16) -> (f64, f64) {
    (f64::from(column) + 0.5, f64::from(row) + 0.5)
}

/// Which card the pointer is over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hover {
    current: Option<usize>,
}

impl Hover {
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Record the card under the pointer (`None` when off the grid).
    /// Returns the card the pointer just left, if any.
    pub fn pointer_at(&mut self, hit: Option<usize>) -> Option<usize> {
        let previous = std::mem::replace(&mut self.current, hit);
        previous.filter(|&p| Some(p) != hit)
    }

    /// Forget the hovered card, returning it.
    pub fn clear(&mut self) -> Option<usize> {
        self.current.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const GRID: GridSpec = GridSpec::new(20, 6, 1);

    #[test]
    fn columns_and_rows_fit_the_area() {
        assert_eq!(GRID.columns(62), 3);
        assert_eq!(GRID.columns(61), 2);
        assert_eq!(GRID.columns(5), 1);
        assert_eq!(GRID.visible_rows(20), 3);
        assert_eq!(GRID.visible_rows(2), 1);
    }

    #[test]
    fn layout_fills_rows_left_to_right() {
        let cards = GRID.layout(Rect::new(0, 0, 62, 20), 5, 0);
        let indices: Vec<usize> = cards.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, [0, 1, 2, 3, 4]);
        assert_eq!(cards[0].1, Rect::new(0, 0, 20, 6));
        assert_eq!(cards[2].1, Rect::new(42, 0, 20, 6));
        assert_eq!(cards[4].1, Rect::new(21, 7, 20, 6));
    }

    #[test]
    fn layout_honours_scroll_and_clips_last_row() {
        let cards = GRID.layout(Rect::new(2, 1, 41, 10), 9, 1);
        let indices: Vec<usize> = cards.iter().map(|(i, _)| *i).collect();
        // two columns, second row of the grid first; 10 rows fit one full
        // card plus three lines of the next
        assert_eq!(indices, [2, 3, 4, 5]);
        assert_eq!(cards[0].1, Rect::new(2, 1, 20, 6));
        assert_eq!(cards[2].1.height, 3);
    }

    #[test]
    fn empty_area_or_catalog_lays_out_nothing() {
        assert!(GRID.layout(Rect::new(0, 0, 0, 10), 3, 0).is_empty());
        assert!(GRID.layout(Rect::new(0, 0, 40, 10), 0, 0).is_empty());
    }

    #[test]
    fn hit_testing_respects_gaps() {
        let cards = GRID.layout(Rect::new(0, 0, 62, 20), 5, 0);
        assert_eq!(hit_test(&cards, 0, 0).map(|(i, _)| i), Some(0));
        assert_eq!(hit_test(&cards, 19, 5).map(|(i, _)| i), Some(0));
        assert_eq!(hit_test(&cards, 20, 0), None);
        assert_eq!(hit_test(&cards, 0, 6), None);
        assert_eq!(hit_test(&cards, 21, 7).map(|(i, _)| i), Some(4));
        // slot for a sixth card is empty
        assert_eq!(hit_test(&cards, 45, 8), None);
    }

    #[test]
    fn centre_cell_is_neutral() {
        let rect = Rect::new(10, 4, 21, 7);
        let mut tracker = folio_core::tilt::PointerTracker::new();
        let (x, y) = cell_center(20, 7);
        let offset = tracker.on_pointer_move(x, y, cell_bounds(rect));
        assert!(offset.is_neutral());
    }

    #[test]
    fn scrolling_follows_selection() {
        assert_eq!(scroll_to_show(0, 3, 2, 0), 0);
        assert_eq!(scroll_to_show(7, 3, 2, 0), 1);
        assert_eq!(scroll_to_show(2, 3, 2, 1), 0);
        assert_eq!(scroll_to_show(5, 3, 2, 1), 1);
    }

    #[test]
    fn hover_reports_leave_on_change() {
        let mut hover = Hover::default();
        assert_eq!(hover.pointer_at(Some(1)), None);
        assert_eq!(hover.pointer_at(Some(1)), None);
        assert_eq!(hover.pointer_at(Some(2)), Some(1));
        assert_eq!(hover.current(), Some(2));
        assert_eq!(hover.pointer_at(None), Some(2));
        assert_eq!(hover.pointer_at(None), None);
        hover.pointer_at(Some(0));
        assert_eq!(hover.clear(), Some(0));
        assert_eq!(hover.current(), None);
    }
}
