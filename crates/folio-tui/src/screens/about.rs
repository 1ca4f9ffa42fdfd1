//! About screen — profile, bio and education, with a spinning globe
//! backdrop on wide terminals.

use std::cell::Cell;
use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use folio_core::{Portfolio, Section};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use tracing::warn;

use crate::action::Action;
use crate::component::Component;
use crate::theme;
use crate::widgets::backdrop;

/// Globe rotation per tick, in radians.
const SPIN_PER_TICK: f64 = 0.08;

/// Below this width the profile gets the whole screen.
const BACKDROP_MIN_SCREEN_WIDTH: u16 = 90;

pub struct AboutScreen {
    focused: bool,
    portfolio: Arc<Portfolio>,
    backdrop: bool,
    reduced_motion: bool,
    phase: f64,
    scroll: u16,
    /// Set while the globe is failing, so the warning is logged once per
    /// failure rather than every frame.
    backdrop_failed: Cell<bool>,
}

impl AboutScreen {
    pub fn new(portfolio: Arc<Portfolio>, backdrop: bool, reduced_motion: bool) -> Self {
        Self {
            focused: false,
            portfolio,
            backdrop,
            reduced_motion,
            phase: 0.0,
            scroll: 0,
            backdrop_failed: Cell::new(false),
        }
    }

    fn profile_lines(&self) -> Vec<Line<'static>> {
        let profile = self.portfolio.profile();
        let heading = |text: &str| {
            Line::styled(
                text.to_owned(),
                Style::default()
                    .fg(theme::NEON_CYAN)
                    .add_modifier(Modifier::BOLD),
            )
        };

        let mut lines = vec![
            Line::styled(
                profile.name.clone(),
                Style::default()
                    .fg(theme::ELECTRIC_PURPLE)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(profile.roles.join(" · "), theme::tag()),
        ];
        if !profile.headline.is_empty() {
            lines.push(Line::styled(profile.headline.clone(), theme::body()));
        }
        if !profile.location.is_empty() {
            lines.push(Line::styled(profile.location.clone(), theme::muted()));
        }

        if !profile.bio.is_empty() {
            lines.push(Line::from(""));
            lines.push(heading("About Me"));
            for paragraph in &profile.bio {
                lines.push(Line::styled(paragraph.clone(), theme::body()));
                lines.push(Line::from(""));
            }
        }

        if !profile.education.is_empty() {
            lines.push(heading("Education"));
            for edu in &profile.education {
                lines.push(Line::styled(
                    edu.degree.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ));
                lines.push(Line::styled(edu.institution.clone(), theme::body()));
                lines.push(Line::styled(
                    [edu.duration.as_str(), edu.location.as_str()]
                        .iter()
                        .filter(|s| !s.is_empty())
                        .copied()
                        .collect::<Vec<_>>()
                        .join(" · "),
                    theme::muted(),
                ));
            }
        }

        if let Some(link) = &profile.resume_link {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled("Resume  ", theme::key_hint()),
                Span::styled(link.clone(), theme::link()),
            ]));
        }

        lines
    }

    fn render_backdrop(&self, frame: &mut Frame, area: Rect) {
        match backdrop::render_globe(frame, area, self.phase) {
            Ok(()) => self.backdrop_failed.set(false),
            Err(err) => {
                if !self.backdrop_failed.replace(true) {
                    warn!(error = %err, "backdrop failed, drawing static background");
                }
                backdrop::render_static(frame, area);
            }
        }
    }
}

impl Component for AboutScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.scroll = self.scroll.saturating_add(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Char('g') | KeyCode::Home => self.scroll = 0,
            _ => {}
        }
        Ok(None)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.scroll = self.scroll.saturating_add(1),
            MouseEventKind::ScrollUp => self.scroll = self.scroll.saturating_sub(1),
            _ => {}
        }
        Ok(None)
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::Tick if self.backdrop && !self.reduced_motion => {
                self.phase = (self.phase + SPIN_PER_TICK) % std::f64::consts::TAU;
            }
            Action::ScrollTo(Section::About) => self.scroll = 0,
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" About ")
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

        let text_area = if self.backdrop && area.width >= BACKDROP_MIN_SCREEN_WIDTH {
            let [text_area, globe_area] =
                Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                    .areas(inner);
            self.render_backdrop(frame, globe_area);
            text_area
        } else {
            inner
        };

        let paragraph = Paragraph::new(self.profile_lines())
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));
        frame.render_widget(paragraph, text_area.inner(Margin::new(1, 0)));
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn id(&self) -> &str {
        "about"
    }
}
