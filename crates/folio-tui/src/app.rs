//! Application core — event loop, screen management, action dispatch.
//!
//! The App owns the [`DetailModalController`] because overlays sit above
//! every screen; each screen owns its own view state.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use folio_config::Config;
use folio_core::{
    CertificateEntry, DetailModalController, DetailTarget, Portfolio, ProjectEntry,
    filter::related_skills,
};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Tabs, Wrap},
};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::action::Action;
use crate::component::Component;
use crate::event::{Event, EventReader};
use crate::screen::ScreenId;
use crate::screens::create_screens;
use crate::theme;
use crate::tui::Tui;
use crate::widgets::{centered_rect, tag_line};

const DETAIL_WIDTH: u16 = 72;
const DETAIL_HEIGHT: u16 = 24;

/// Top-level application state and event loop.
pub struct App {
    active_screen: ScreenId,
    /// Previous screen for GoBack.
    previous_screen: Option<ScreenId>,
    screens: HashMap<ScreenId, Box<dyn Component>>,
    running: bool,
    help_visible: bool,
    portfolio: Arc<Portfolio>,
    modal: DetailModalController,
    tick_rate: Duration,
    render_rate: Duration,
    reduced_motion: bool,
    /// Terminal size for overlay placement and mouse hit-testing.
    terminal_size: (u16, u16),
    /// Action sender — components can dispatch actions through this.
    action_tx: mpsc::UnboundedSender<Action>,
    /// Action receiver — main loop drains this.
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl App {
    pub fn new(portfolio: Arc<Portfolio>, config: &Config) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let screens = create_screens(&portfolio, config).into_iter().collect();

        Self {
            active_screen: ScreenId::default(),
            previous_screen: None,
            screens,
            running: true,
            help_visible: false,
            modal: DetailModalController::new(Arc::clone(&portfolio)),
            portfolio,
            tick_rate: Duration::from_millis(config.ui.tick_rate_ms),
            render_rate: Duration::from_millis(config.ui.render_rate_ms),
            reduced_motion: config.effective_tilt().reduced_motion,
            terminal_size: (0, 0),
            action_tx,
            action_rx,
        }
    }

    /// Initialize all screen components with the action sender.
    fn init_screens(&mut self) -> Result<()> {
        for screen in self.screens.values_mut() {
            screen.init(self.action_tx.clone())?;
            debug!(screen = screen.id(), "screen initialized");
        }
        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            screen.set_focused(true);
        }
        Ok(())
    }

    /// Run the main event loop until the user quits.
    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;
        self.terminal_size = tui.size().unwrap_or((80, 24));
        self.init_screens()?;

        let mut events = EventReader::new(self.tick_rate, self.render_rate);

        info!(
            skills = self.portfolio.skills().len(),
            certificates = self.portfolio.certificates().len(),
            projects = self.portfolio.projects().len(),
            "TUI event loop started"
        );

        while self.running {
            // 1. Wait for the next event
            let Some(event) = events.next().await else {
                break;
            };

            // 2. Map event → action(s)
            match event {
                Event::Key(key) => {
                    if let Some(action) = self.handle_key_event(key)? {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(action) = self.handle_mouse_event(mouse)? {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Resize(w, h) => self.action_tx.send(Action::Resize(w, h))?,
                Event::Tick => self.action_tx.send(Action::Tick)?,
                Event::Render => self.action_tx.send(Action::Render)?,
            }

            // 3. Drain and process all queued actions
            while let Ok(action) = self.action_rx.try_recv() {
                self.process_action(&action)?;

                if let Action::Render = action {
                    tui.draw(|frame| self.render(frame))?;
                }
            }
        }

        events.stop();
        tui.exit();
        info!("TUI event loop ended");
        Ok(())
    }

    /// Map a key event to an action. Overlays capture input first, then
    /// global keys, then the active screen.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::Quit));
        }

        if let Some(target) = self.modal.current() {
            return Ok(match (key.code, target) {
                (KeyCode::Esc, _) => Some(Action::CloseDetail),
                (KeyCode::Char('q'), _) => Some(Action::Quit),
                (KeyCode::Enter, DetailTarget::Certificate(id)) => {
                    // filter by this certificate, then close
                    self.action_tx.send(Action::SelectCertificate(id.clone()))?;
                    Some(Action::CloseDetail)
                }
                _ => None,
            });
        }

        if self.help_visible {
            return Ok(match key.code {
                KeyCode::Esc | KeyCode::Char('?') => Some(Action::ToggleHelp),
                _ => None,
            });
        }

        match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(Some(Action::Quit)),
            (KeyModifiers::NONE, KeyCode::Char('?')) => return Ok(Some(Action::ToggleHelp)),

            // Screen navigation via number keys
            (KeyModifiers::NONE, KeyCode::Char(c @ '1'..='4')) => {
                let n = c.to_digit(10).and_then(|d| u8::try_from(d).ok());
                if let Some(screen) = n.and_then(ScreenId::from_number) {
                    return Ok(Some(Action::SwitchScreen(screen)));
                }
            }

            (KeyModifiers::NONE, KeyCode::Tab) => {
                return Ok(Some(Action::SwitchScreen(self.active_screen.next())));
            }
            (KeyModifiers::SHIFT, KeyCode::BackTab) => {
                return Ok(Some(Action::SwitchScreen(self.active_screen.prev())));
            }

            (KeyModifiers::NONE, KeyCode::Esc) => return Ok(Some(Action::GoBack)),

            _ => {}
        }

        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            return screen.handle_key_event(key);
        }

        Ok(None)
    }

    /// Mouse goes to the active screen unless an overlay is up; a click
    /// outside the detail overlay dismisses it.
    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if self.modal.is_open() {
            let overlay = self.detail_area();
            let outside = !overlay.contains(Position::new(mouse.column, mouse.row));
            if outside && mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                return Ok(Some(Action::CloseDetail));
            }
            return Ok(None);
        }
        if self.help_visible {
            return Ok(None);
        }

        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            return screen.handle_mouse_event(mouse);
        }
        Ok(None)
    }

    fn switch_to(&mut self, target: ScreenId) {
        if target == self.active_screen {
            return;
        }
        debug!("switching screen: {} → {}", self.active_screen, target);
        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            screen.set_focused(false);
        }
        self.previous_screen = Some(self.active_screen);
        self.active_screen = target;
        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            screen.set_focused(true);
        }
    }

    /// Process a single action — update app state and propagate to components.
    fn process_action(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::Quit => {
                self.running = false;
            }

            Action::Resize(w, h) => {
                self.terminal_size = (*w, *h);
            }

            Action::SwitchScreen(target) => self.switch_to(*target),

            Action::GoBack => {
                if let Some(prev) = self.previous_screen.take() {
                    self.action_tx.send(Action::SwitchScreen(prev))?;
                }
            }

            Action::ToggleHelp => {
                self.help_visible = !self.help_visible;
            }

            Action::OpenDetail(target) => {
                self.modal.open(target.clone());
            }

            Action::CloseDetail => self.modal.close(),

            Action::ScrollTo(section) => {
                let target = ScreenId::from(*section);
                self.switch_to(target);
                if let Some(screen) = self.screens.get_mut(&target) {
                    screen.update(action)?;
                }
            }

            // Filter actions belong to the Skills screen even when it is
            // not in front (e.g. Enter inside a certificate overlay).
            Action::SelectCertificate(_) | Action::ClearFilter | Action::SetSkillsTab(_) => {
                if let Some(screen) = self.screens.get_mut(&ScreenId::Skills) {
                    if let Some(follow_up) = screen.update(action)? {
                        self.action_tx.send(follow_up)?;
                    }
                }
            }

            // Springs settle and the globe spins only where they are visible
            Action::Tick | Action::Render => {
                if let Some(screen) = self.screens.get_mut(&self.active_screen) {
                    screen.update(action)?;
                }
            }
        }
        Ok(())
    }

    // ── Rendering ────────────────────────────────────────────────

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        // Layout: [screen content] [tab bar] [status bar]
        let [content_area, tab_area, status_area] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        if let Some(screen) = self.screens.get(&self.active_screen) {
            screen.render(frame, content_area);
        }
        self.render_tab_bar(frame, tab_area);
        self.render_status_bar(frame, status_area);

        // Overlays (last = topmost)
        if let Some(target) = self.modal.current() {
            self.render_detail(frame, target);
        }
        if self.help_visible {
            render_help_overlay(frame, area);
        }
    }

    fn render_tab_bar(&self, frame: &mut Frame, area: Rect) {
        let titles: Vec<Line> = ScreenId::ALL
            .iter()
            .map(|&id| {
                let style = if id == self.active_screen {
                    theme::tab_active()
                } else {
                    theme::tab_inactive()
                };
                Line::from(Span::styled(
                    format!(" {} {} ", id.number(), id.label()),
                    style,
                ))
            })
            .collect();

        let tabs = Tabs::new(titles)
            .divider(Span::styled(" ", theme::key_hint()))
            .select(
                ScreenId::ALL
                    .iter()
                    .position(|&s| s == self.active_screen)
                    .unwrap_or(0),
            );

        frame.render_widget(tabs, area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::raw(" "),
            Span::styled(
                self.portfolio.profile().name.clone(),
                Style::default().fg(theme::ELECTRIC_PURPLE),
            ),
        ];
        if self.reduced_motion {
            spans.push(Span::styled("  reduced motion", theme::muted()));
        }
        spans.push(Span::styled(
            " │ ? help  Tab next  q quit",
            theme::key_hint(),
        ));
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    /// Where the detail overlay is drawn for the current terminal size.
    fn detail_area(&self) -> Rect {
        let (w, h) = self.terminal_size;
        centered_rect(Rect::new(0, 0, w, h), DETAIL_WIDTH, DETAIL_HEIGHT)
    }

    fn render_detail(&self, frame: &mut Frame, target: &DetailTarget) {
        let lines = match target {
            DetailTarget::Project(id) => self
                .portfolio
                .projects()
                .get(*id)
                .map(project_detail_lines),
            DetailTarget::Certificate(id) => self
                .portfolio
                .certificates()
                .get(id)
                .map(|cert| self.certificate_detail_lines(cert)),
        };
        let Some((title, lines)) = lines else { return };

        let area = centered_rect(frame.area(), DETAIL_WIDTH, DETAIL_HEIGHT);
        frame.render_widget(Clear, area);
        frame.render_widget(
            Block::default().style(Style::default().bg(theme::BG_DARK)),
            area,
        );

        let block = Block::default()
            .title(format!(" {title} "))
            .title_style(theme::title_style())
            .title_bottom(Line::styled(" Esc close ", theme::key_hint()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused());
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: true }),
            inner.inner(ratatui::layout::Margin::new(1, 1)),
        );
    }

    fn certificate_detail_lines(&self, cert: &CertificateEntry) -> (String, Vec<Line<'static>>) {
        let skills = related_skills(self.portfolio.skills(), cert);

        let mut lines = vec![
            Line::styled(cert.byline(), theme::muted()),
            Line::from(""),
            section_heading("Validated Skills"),
        ];
        if skills.is_empty() {
            lines.push(Line::styled(
                "No catalogued skill matches this certificate",
                theme::muted(),
            ));
        } else {
            for skill in skills {
                lines.push(Line::from(vec![
                    Span::styled("  ✓ ", Style::default().fg(theme::SUCCESS_GREEN)),
                    Span::styled(skill.name.clone(), theme::body()),
                    Span::styled(
                        format!("  {} · {}%", skill.level_label(), skill.level),
                        theme::muted(),
                    ),
                ]));
            }
        }

        lines.push(Line::from(""));
        lines.push(section_heading("Tags"));
        lines.push(tag_line(&cert.tags));

        if !cert.external_link.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled("Verify  ", theme::key_hint()),
                Span::styled(cert.external_link.clone(), theme::link()),
            ]));
        }
        if !cert.image_ref.is_empty() {
            lines.push(Line::from(vec![
                Span::styled("Image   ", theme::key_hint()),
                Span::styled(cert.image_ref.clone(), theme::muted()),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Enter ", theme::key_hint_key()),
            Span::styled("show these skills", theme::key_hint()),
        ]));

        (cert.title.clone(), lines)
    }
}

fn section_heading(text: &'static str) -> Line<'static> {
    Line::styled(
        text,
        Style::default()
            .fg(theme::NEON_CYAN)
            .add_modifier(Modifier::BOLD),
    )
}

fn project_detail_lines(project: &ProjectEntry) -> (String, Vec<Line<'static>>) {
    let mut lines = vec![
        Line::styled(project.subtitle.clone(), theme::tag()),
        Line::from(""),
        Line::styled(project.description.clone(), theme::body()),
    ];
    if !project.detail_text.is_empty() {
        lines.push(Line::from(""));
        lines.push(section_heading("Details"));
        lines.push(Line::styled(project.detail_text.clone(), theme::body()));
    }

    lines.push(Line::from(""));
    lines.push(section_heading("Technologies"));
    lines.push(tag_line(&project.tags));

    let links = [
        ("GitHub  ", &project.github_link),
        ("Demo    ", &project.demo_link),
    ];
    if links.iter().any(|(_, url)| !url.is_empty()) {
        lines.push(Line::from(""));
    }
    for (label, url) in links {
        if !url.is_empty() {
            lines.push(Line::from(vec![
                Span::styled(label, theme::key_hint()),
                Span::styled(url.clone(), theme::link()),
            ]));
        }
    }

    (project.title.clone(), lines)
}

fn help_row(key: &'static str, label: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<10}"), theme::key_hint_key()),
        Span::styled(label, theme::key_hint()),
    ])
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let help_area = centered_rect(area, 56, 22);
    frame.render_widget(Clear, help_area);
    frame.render_widget(
        Block::default().style(Style::default().bg(theme::BG_DARK)),
        help_area,
    );

    let block = Block::default()
        .title(" Keyboard Shortcuts ")
        .title_style(theme::title_style())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border_focused());
    let inner = block.inner(help_area);
    frame.render_widget(block, help_area);

    let help_text = vec![
        Line::from(""),
        section_heading("  Navigation"),
        help_row("1-4", "Jump to screen"),
        help_row("Tab", "Next screen"),
        help_row("hjkl ←↓↑→", "Move between cards"),
        help_row("Esc", "Close overlay / back"),
        Line::from(""),
        section_heading("  Skills & Certifications"),
        help_row("s / c", "Skills / Certifications tab"),
        help_row("[ ]", "Switch tab"),
        help_row("Enter", "Filter skills by certificate"),
        help_row("v", "Certificate details"),
        help_row("x", "Clear filter"),
        help_row("mouse", "Hover to tilt, click to select"),
        Line::from(""),
        section_heading("  Global"),
        help_row("?", "This help"),
        help_row("q", "Quit"),
        Line::from(""),
        Line::styled("                 Esc or ? to close", theme::key_hint()),
    ];
    frame.render_widget(Paragraph::new(help_text), inner);
}
