//! Skills screen — skill grid, certificate grid and the cross-filter.
//!
//! Layout:
//! ╭─ Skills & Certifications ─────────────────────────────────────╮
//! │ Technical Skills (5)  [Certifications (5)]                     │
//! │ Skills related to: Programming in Java  Showing 2 matching …   │
//! │                                                                │
//! │ ╭─ HTML ──────────────╮ ╭─ Java ──────────────╮                │
//! │ │ █████████░ 90%      │ │ ██████░░░░ 65%      │▓               │
//! │ │ Expert · Frontend   │ │ Learning · Backend  │▓               │
//! │ ╰─────────────────────╯ ╰─────────────────────╯▓               │
//! │ j/k move  s/c tabs  x clear  v certificate                     │
//! ╰────────────────────────────────────────────────────────────────╯
//!
//! The screen owns the [`CrossFilterController`] and one [`TiltState`] per
//! card in the current grid. Cards are rebuilt flat whenever the grid's
//! contents change (tab switch, filter set or cleared).

use std::cell::{Cell, RefCell};
use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use folio_core::{
    CertificateEntry, CertificateId, CrossFilterController, DetailTarget, Portfolio, Section,
    SkillEntry, SkillsTab, TiltConfig, TiltState,
};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use tracing::debug;

use crate::action::Action;
use crate::component::Component;
use crate::theme;
use crate::widgets::grid::{self, GridSpec, Hover};
use crate::widgets::level_gauge::level_bar;
use crate::widgets::sub_tabs::render_sub_tabs;
use crate::widgets::tag_line;
use crate::widgets::tilt_card::TiltCard;

const GRID: GridSpec = GridSpec::new(28, 7, 1);

pub struct SkillsScreen {
    focused: bool,
    portfolio: Arc<Portfolio>,
    filter: CrossFilterController,
    tilt_config: TiltConfig,
    /// Spring step per `Render` action.
    frame_dt: Duration,
    /// Indexed like the cards of the current grid.
    tilts: Vec<TiltState>,
    hover: Hover,
    selected: usize,
    first_row: usize,
    /// Geometry from the last render, for mouse hit-testing.
    grid_area: Cell<Rect>,
    cards: RefCell<Vec<(usize, Rect)>>,
}

impl SkillsScreen {
    pub fn new(portfolio: Arc<Portfolio>, tilt_config: TiltConfig, frame_dt: Duration) -> Self {
        let filter = CrossFilterController::new(Arc::clone(&portfolio));
        let mut screen = Self {
            focused: false,
            portfolio,
            filter,
            tilt_config,
            frame_dt,
            tilts: Vec::new(),
            hover: Hover::default(),
            selected: 0,
            first_row: 0,
            grid_area: Cell::new(Rect::default()),
            cards: RefCell::new(Vec::new()),
        };
        screen.reset_cards();
        screen
    }

    fn card_count(&self) -> usize {
        match self.filter.active_tab() {
            SkillsTab::Skills => self.filter.visible_count(),
            SkillsTab::Certificates => self.portfolio.certificates().len(),
        }
    }

    /// The grid now shows different cards: every card starts flat.
    fn reset_cards(&mut self) {
        self.tilts = vec![TiltState::new(self.tilt_config); self.card_count()];
        self.hover = Hover::default();
        self.selected = 0;
        self.first_row = 0;
        self.cards.borrow_mut().clear();
    }

    fn certificate_at(&self, index: usize) -> Option<&CertificateEntry> {
        self.portfolio.certificates().get_index(index)
    }

    /// Certificate under the keyboard cursor (Certificates tab only).
    fn selected_certificate(&self) -> Option<&CertificateEntry> {
        match self.filter.active_tab() {
            SkillsTab::Certificates => self.certificate_at(self.selected),
            SkillsTab::Skills => None,
        }
    }

    /// Certificate `v` opens: the selected card, or the filtering one.
    fn detail_certificate(&self) -> Option<CertificateId> {
        match self.filter.active_tab() {
            SkillsTab::Certificates => self.selected_certificate().map(|c| c.id.clone()),
            SkillsTab::Skills => self.filter.active_certificate().map(|c| c.id.clone()),
        }
    }

    fn columns(&self) -> usize {
        usize::from(GRID.columns(self.grid_area.get().width))
    }

    fn visible_rows(&self) -> usize {
        usize::from(GRID.visible_rows(self.grid_area.get().height))
    }

    fn move_selection(&mut self, delta: isize) {
        let count = self.card_count();
        if count == 0 {
            return;
        }
        self.selected = self.selected.saturating_add_signed(delta).min(count - 1);
        self.first_row =
            grid::scroll_to_show(self.selected, self.columns(), self.visible_rows(), self.first_row);
    }

    fn scroll(&mut self, down: bool) {
        let total_rows = self.card_count().div_ceil(self.columns());
        let max_first = total_rows.saturating_sub(self.visible_rows());
        self.first_row = if down {
            (self.first_row + 1).min(max_first)
        } else {
            self.first_row.saturating_sub(1)
        };
        self.leave_hover();
    }

    fn leave_hover(&mut self) {
        if let Some(previous) = self.hover.clear() {
            if let Some(tilt) = self.tilts.get_mut(previous) {
                tilt.on_pointer_leave();
            }
        }
    }

    fn pointer_moved(&mut self, column: u16, row: u16) {
        let hit = grid::hit_test(&self.cards.borrow(), column, row);

        if let Some(left) = self.hover.pointer_at(hit.map(|(index, _)| index)) {
            if let Some(tilt) = self.tilts.get_mut(left) {
                tilt.on_pointer_leave();
            }
        }
        if let Some((index, rect)) = hit {
            let (x, y) = grid::cell_center(column, row);
            if let Some(tilt) = self.tilts.get_mut(index) {
                tilt.on_pointer_move(x, y, grid::cell_bounds(rect));
            }
        }
    }

    fn other_tab(&self) -> SkillsTab {
        match self.filter.active_tab() {
            SkillsTab::Skills => SkillsTab::Certificates,
            SkillsTab::Certificates => SkillsTab::Skills,
        }
    }

    // ── Rendering ────────────────────────────────────────────────

    fn render_header(&self, frame: &mut Frame, tabs_area: Rect, banner_area: Rect) {
        let labels = [
            format!("{} ({})", SkillsTab::Skills, self.portfolio.skills().len()),
            format!(
                "{} ({})",
                SkillsTab::Certificates,
                self.portfolio.certificates().len()
            ),
        ];
        let active = match self.filter.active_tab() {
            SkillsTab::Skills => 0,
            SkillsTab::Certificates => 1,
        };
        frame.render_widget(Paragraph::new(render_sub_tabs(&labels, active)), tabs_area);

        let banner = match (self.filter.active_tab(), self.filter.active_certificate()) {
            (SkillsTab::Skills, Some(cert)) => Line::from(vec![
                Span::styled("Skills related to: ", theme::filter_banner()),
                Span::styled(cert.title.clone(), theme::title_style()),
                Span::styled(
                    format!("  Showing {} matching skills", self.filter.visible_count()),
                    theme::body(),
                ),
                Span::styled("  x ", theme::key_hint_key()),
                Span::styled("clear", theme::key_hint()),
            ]),
            (SkillsTab::Skills, None) => Line::styled(
                format!("Showing all {} skills", self.filter.visible_count()),
                theme::muted(),
            ),
            (SkillsTab::Certificates, _) => Line::styled(
                "Select a certificate to see the skills it validates",
                theme::muted(),
            ),
        };
        frame.render_widget(Paragraph::new(banner), banner_area);
    }

    fn skill_card(&self, skill: &SkillEntry, width: u16) -> TiltCard<'static> {
        let category = self
            .portfolio
            .skills()
            .category(&skill.category)
            .map_or_else(String::new, |c| c.title.clone());
        let level = skill.level_label();

        let body = Text::from(vec![
            level_bar(skill.level, width.saturating_sub(8)),
            Line::from(vec![
                Span::styled(
                    level.to_string(),
                    Style::default().fg(theme::level_color(level)),
                ),
                Span::styled(format!(" · {category}"), theme::muted()),
            ]),
            tag_line(&skill.tags),
        ]);
        TiltCard::new(format!(" {} ", skill.name), body)
    }

    fn certificate_card(&self, cert: &CertificateEntry) -> TiltCard<'static> {
        let filtering = self.filter.state().active_certificate.as_ref() == Some(&cert.id);

        let mut lines = vec![Line::styled(cert.byline(), theme::muted()), tag_line(&cert.tags)];
        if filtering {
            lines.push(Line::styled(
                "✓ filtering skills",
                Style::default().fg(theme::SUCCESS_GREEN),
            ));
        }
        TiltCard::new(format!(" {} ", cert.title), Text::from(lines))
    }

    fn render_grid(&self, frame: &mut Frame, area: Rect) {
        self.grid_area.set(area);

        let count = self.card_count();
        if count == 0 {
            self.cards.borrow_mut().clear();
            self.render_empty(frame, area);
            return;
        }

        let cards = GRID.layout(area, count, self.first_row);
        for &(index, rect) in &cards {
            let card = match self.filter.active_tab() {
                SkillsTab::Skills => self
                    .filter
                    .visible_skill(index)
                    .map(|skill| self.skill_card(skill, rect.width)),
                SkillsTab::Certificates => {
                    self.certificate_at(index).map(|cert| self.certificate_card(cert))
                }
            };
            let Some(card) = card else { continue };

            let rotation = self
                .tilts
                .get(index)
                .map(TiltState::rotation)
                .unwrap_or_default();
            frame.render_widget(
                card.rotation(rotation, self.tilt_config.max_angle_deg)
                    .selected(self.selected == index)
                    .hovered(self.hover.current() == Some(index)),
                rect,
            );
        }
        *self.cards.borrow_mut() = cards;
    }

    /// Explicit "no results" state for a filter that matches nothing.
    fn render_empty(&self, frame: &mut Frame, area: Rect) {
        let lines = match self.filter.active_certificate() {
            Some(cert) => vec![
                Line::from(""),
                Line::styled(
                    format!("No skills match {}", cert.title),
                    theme::filter_banner(),
                ),
                Line::from(""),
                Line::from(vec![
                    Span::styled("x ", theme::key_hint_key()),
                    Span::styled("clear the filter", theme::key_hint()),
                ]),
            ],
            None => vec![Line::from(""), Line::styled("Nothing here yet", theme::muted())],
        };
        frame.render_widget(Paragraph::new(lines).centered(), area);
    }

    fn render_hints(&self, frame: &mut Frame, area: Rect) {
        let hints: &[(&str, &str)] = match self.filter.active_tab() {
            SkillsTab::Skills if self.filter.is_filtered() => &[
                ("hjkl ", "move  "),
                ("s/c ", "tabs  "),
                ("x ", "clear  "),
                ("v ", "certificate"),
            ],
            SkillsTab::Skills => &[("hjkl ", "move  "), ("s/c ", "tabs")],
            SkillsTab::Certificates => &[
                ("hjkl ", "move  "),
                ("Enter ", "filter skills  "),
                ("v ", "details  "),
                ("s/c ", "tabs"),
            ],
        };
        let spans: Vec<Span> = hints
            .iter()
            .flat_map(|(key, label)| {
                [
                    Span::styled(*key, theme::key_hint_key()),
                    Span::styled(*label, theme::key_hint()),
                ]
            })
            .collect();
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

impl Component for SkillsScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let row = isize::try_from(self.columns()).unwrap_or(1);

        let action = match key.code {
            KeyCode::Char('s') => Some(Action::SetSkillsTab(SkillsTab::Skills)),
            KeyCode::Char('c') => Some(Action::SetSkillsTab(SkillsTab::Certificates)),
            KeyCode::Char('[' | ']') => Some(Action::SetSkillsTab(self.other_tab())),
            KeyCode::Char('x') if self.filter.is_filtered() => Some(Action::ClearFilter),
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
            KeyCode::Enter => self
                .selected_certificate()
                .map(|cert| Action::SelectCertificate(cert.id.clone())),
            KeyCode::Char('v') => self
                .detail_certificate()
                .map(|id| Action::OpenDetail(DetailTarget::Certificate(id))),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.pointer_moved(mouse.column, mouse.row);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                let hit = grid::hit_test(&self.cards.borrow(), mouse.column, mouse.row);
                if let Some((index, _)) = hit {
                    self.selected = index;
                    return Ok(self
                        .selected_certificate()
                        .map(|cert| Action::SelectCertificate(cert.id.clone())));
                }
            }
            MouseEventKind::ScrollDown => self.scroll(true),
            MouseEventKind::ScrollUp => self.scroll(false),
            _ => {}
        }
        Ok(None)
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::SelectCertificate(id) => {
                let before = self.filter.state().clone();
                let command = self.filter.select_certificate(id);
                if *self.filter.state() != before {
                    self.reset_cards();
                }
                return Ok(command.map(Action::from));
            }
            Action::ClearFilter => {
                if self.filter.clear_filter() {
                    self.reset_cards();
                }
            }
            Action::SetSkillsTab(tab) => {
                if *tab != self.filter.active_tab() {
                    debug!(%tab, "skills tab switched");
                    self.filter.set_tab(*tab);
                    self.reset_cards();
                }
            }
            Action::ScrollTo(Section::Skills) => {
                self.selected = 0;
                self.first_row = 0;
            }
            Action::Render => {
                for tilt in self.tilts.iter_mut().filter(|t| !t.is_settled()) {
                    tilt.tick(self.frame_dt);
                }
            }
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Skills & Certifications ")
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

        let [tabs_area, banner_area, _, grid_area, hints_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

        self.render_header(frame, tabs_area, banner_area);
        self.render_grid(frame, grid_area);
        self.render_hints(frame, hints_area);
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        if !focused {
            self.leave_hover();
        }
    }

    fn id(&self) -> &str {
        "skills"
    }
}
