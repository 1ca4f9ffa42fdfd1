//! Journey screen — education and career timeline.
//!
//! Left: one row per milestone. Right: the selected milestone in full.

use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use folio_core::{JourneyEntry, Portfolio, Section};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::action::Action;
use crate::component::Component;
use crate::theme;
use crate::widgets::tag_line;

pub struct JourneyScreen {
    focused: bool,
    portfolio: Arc<Portfolio>,
    selected: usize,
}

impl JourneyScreen {
    pub fn new(portfolio: Arc<Portfolio>) -> Self {
        Self {
            focused: false,
            portfolio,
            selected: 0,
        }
    }

    fn entries(&self) -> &[JourneyEntry] {
        self.portfolio.journey()
    }

    fn select_next(&mut self) {
        let last = self.entries().len().saturating_sub(1);
        self.selected = (self.selected + 1).min(last);
    }

    fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn render_detail(&self, frame: &mut Frame, area: Rect, entry: &JourneyEntry) {
        let lines = vec![
            Line::styled(
                entry.period.clone(),
                Style::default()
                    .fg(theme::ELECTRIC_PURPLE)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(entry.title.clone(), theme::title_style()),
            Line::styled(entry.institution.clone(), theme::muted()),
            Line::from(""),
            Line::styled(entry.description.clone(), theme::body()),
            Line::from(""),
            tag_line(&entry.tags),
        ];
        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: true }),
            area.inner(Margin::new(2, 1)),
        );
    }
}

impl Component for JourneyScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.select_prev(),
            KeyCode::Char('g') | KeyCode::Home => self.selected = 0,
            KeyCode::Char('G') | KeyCode::End => {
                self.selected = self.entries().len().saturating_sub(1);
            }
            _ => {}
        }
        Ok(None)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.select_next(),
            MouseEventKind::ScrollUp => self.select_prev(),
            _ => {}
        }
        Ok(None)
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        if let Action::ScrollTo(Section::Journey) = action {
            self.selected = 0;
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" My Journey ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focused {
                theme::border_focused()
            } else {
                theme::border_default()
            });
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [list_area, detail_area] =
            Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
                .areas(inner);

        let items: Vec<ListItem> = self
            .entries()
            .iter()
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled("● ", Style::default().fg(theme::ELECTRIC_PURPLE)),
                    Span::styled(format!("{:<16}", entry.period), theme::muted()),
                    Span::styled(entry.title.clone(), theme::body()),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::RIGHT)
                    .border_style(theme::border_default()),
            )
            .highlight_style(
                Style::default()
                    .fg(theme::ELECTRIC_PURPLE)
                    .bg(theme::BG_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD),
            );
        let mut state = ListState::default().with_selected(Some(self.selected));
        frame.render_stateful_widget(list, list_area, &mut state);

        if let Some(entry) = self.entries().get(self.selected) {
            self.render_detail(frame, detail_area, entry);
        }
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn id(&self) -> &str {
        "journey"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn selection_is_clamped_to_the_timeline() {
        let portfolio = folio_config::load_portfolio(&folio_config::Config::default()).unwrap();
        let mut screen = JourneyScreen::new(Arc::new(portfolio));
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);

        screen.handle_key_event(key(KeyCode::Up)).unwrap();
        assert_eq!(screen.selected, 0);

        for _ in 0..20 {
            screen.handle_key_event(key(KeyCode::Char('j'))).unwrap();
        }
        assert_eq!(screen.selected, 5);

        screen.update(&Action::ScrollTo(Section::Journey)).unwrap();
        assert_eq!(screen.selected, 0);
    }
}
