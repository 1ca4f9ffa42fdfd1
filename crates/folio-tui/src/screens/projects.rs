//! Projects screen — project cards; Enter or click opens the detail overlay.

use std::cell::{Cell, RefCell};
use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use folio_core::{DetailTarget, Portfolio, ProjectEntry, Section};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::action::Action;
use crate::component::Component;
use crate::theme;
use crate::widgets::grid::{self, GridSpec, Hover};
use crate::widgets::tag_line;
use crate::widgets::tilt_card::TiltCard;

const GRID: GridSpec = GridSpec::new(36, 9, 1);

pub struct ProjectsScreen {
    focused: bool,
    portfolio: Arc<Portfolio>,
    selected: usize,
    first_row: usize,
    hover: Hover,
    grid_area: Cell<Rect>,
    cards: RefCell<Vec<(usize, Rect)>>,
}

impl ProjectsScreen {
    pub fn new(portfolio: Arc<Portfolio>) -> Self {
        Self {
            focused: false,
            portfolio,
            selected: 0,
            first_row: 0,
            hover: Hover::default(),
            grid_area: Cell::new(Rect::default()),
            cards: RefCell::new(Vec::new()),
        }
    }

    fn open(&self, index: usize) -> Option<Action> {
        self.portfolio
            .projects()
            .get_index(index)
            .map(|p| Action::OpenDetail(DetailTarget::Project(p.id)))
    }

    fn move_selection(&mut self, delta: isize) {
        let count = self.portfolio.projects().len();
        if count == 0 {
            return;
        }
        self.selected = self.selected.saturating_add_signed(delta).min(count - 1);
        let area = self.grid_area.get();
        self.first_row = grid::scroll_to_show(
            self.selected,
            usize::from(GRID.columns(area.width)),
            usize::from(GRID.visible_rows(area.height)),
            self.first_row,
        );
    }

    fn card(project: &ProjectEntry) -> TiltCard<'static> {
        let extra = project.tags.len().saturating_sub(project.card_tags().len());
        let mut tags = tag_line(project.card_tags());
        if extra > 0 {
            tags.push_span(Span::styled(format!(" +{extra}"), theme::muted()));
        }

        let body = Text::from(vec![
            Line::styled(project.subtitle.clone(), theme::tag()),
            Line::from(""),
            Line::styled(project.description.clone(), theme::body()),
            tags,
        ]);
        TiltCard::new(format!(" {} ", project.title), body)
    }
}

impl Component for ProjectsScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let row = isize::try_from(GRID.columns(self.grid_area.get().width)).unwrap_or(1);
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.move_selection(row);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.move_selection(-row);
                None
            }
            KeyCode::Char('l') | KeyCode::Right => {
                self.move_selection(1);
                None
            }
            KeyCode::Char('h') | KeyCode::Left => {
                self.move_selection(-1);
                None
            }
            KeyCode::Enter => self.open(self.selected),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let hit = grid::hit_test(&self.cards.borrow(), mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved => {
                self.hover.pointer_at(hit.map(|(index, _)| index));
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some((index, _)) = hit {
                    self.selected = index;
                    return Ok(self.open(index));
                }
            }
            _ => {}
        }
        Ok(None)
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        if let Action::ScrollTo(Section::Projects) = action {
            self.selected = 0;
            self.first_row = 0;
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Featured Projects ")
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

        let [grid_area, hints_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);
        self.grid_area.set(grid_area);

        let cards = GRID.layout(grid_area, self.portfolio.projects().len(), self.first_row);
        for &(index, rect) in &cards {
            if let Some(project) = self.portfolio.projects().get_index(index) {
                frame.render_widget(
                    Self::card(project)
                        .selected(self.selected == index)
                        .hovered(self.hover.current() == Some(index)),
                    rect,
                );
            }
        }
        *self.cards.borrow_mut() = cards;

        let hints = Line::from(vec![
            Span::styled("hjkl ", theme::key_hint_key()),
            Span::styled("move  ", theme::key_hint()),
            Span::styled("Enter ", theme::key_hint_key()),
            Span::styled("details", theme::key_hint()),
        ]);
        frame.render_widget(Paragraph::new(hints), hints_area);
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        if !focused {
            self.hover.clear();
        }
    }

    fn id(&self) -> &str {
        "projects"
    }
}
