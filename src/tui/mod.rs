// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Skema-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Skema and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Kiosk terminal UI.
//!
//! Shows the day board on the alternate screen (ratatui + crossterm), refreshes it on a timer
//! and on `r`, keeps the last good board when a refresh fails, and idles with a slow
//! autoscroll when the board is taller than the terminal.

use std::{
    error::Error,
    io,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::{Duration, Instant},
};

use chrono::NaiveDate;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{layout::Size, prelude::*, widgets::Paragraph};

use crate::layout::{BoardGeometry, DEFAULT_ROWS_PER_HOUR};
use crate::model::Minute;
use crate::pass::{render_document, run_pass, PassOptions, RenderedBoard, WallClock};
use crate::render::{BoardObject, LineSpan};
use crate::store::DocumentSource;

mod autoscroll;
mod theme;

use autoscroll::AutoScroll;
use theme::{event_color, TuiTheme};

pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(60);
const TOAST_DURATION: Duration = Duration::from_secs(4);
const IDLE_POLL: Duration = Duration::from_millis(250);
const ANIMATION_POLL: Duration = Duration::from_millis(50);
const MOUSE_SCROLL_ROWS: i32 = 3;
const FOOTER_BRAND: &str = "skema";
const FULLSCREEN_PROMPT: &str = "Press f or click to return to fullscreen";

/// Runtime knobs for the kiosk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KioskOptions {
    /// Overrides `settings.date` when set.
    pub date: Option<NaiveDate>,
    pub rows_per_hour: u16,
    pub refresh_interval: Duration,
    pub autoscroll: bool,
}

impl Default for KioskOptions {
    fn default() -> Self {
        Self {
            date: None,
            rows_per_hour: DEFAULT_ROWS_PER_HOUR,
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            autoscroll: true,
        }
    }
}

/// Runs the kiosk until the user quits.
pub fn run(source: Box<dyn DocumentSource>, options: KioskOptions) -> Result<(), Box<dyn Error>> {
    let theme = TuiTheme::from_env()?;
    let mut terminal = TerminalSession::new()?;
    let size = terminal.size()?;

    let mut app = App::new(source, options, theme, Instant::now());
    app.fullscreen = terminal.fullscreen;
    app.set_viewport(size.width, size.height);

    while !app.should_quit {
        let now = Instant::now();
        if app.refresh_due(now) {
            app.refresh(now, WallClock::now());
        }
        if let Some(wanted) = app.fullscreen_request.take() {
            match terminal.set_fullscreen(wanted) {
                Ok(()) => app.fullscreen = wanted,
                Err(err) => {
                    tracing::warn!(%err, wanted, "fullscreen change failed");
                    app.set_toast(format!("Fullscreen failed: {err}"));
                }
            }
        }
        app.tick(now);
        terminal.draw(|frame| draw(frame, &mut app))?;

        let timeout = if app.autoscroll.is_animating() { ANIMATION_POLL } else { IDLE_POLL };
        if event::poll(timeout)? {
            let now = Instant::now();
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key, now),
                Event::Mouse(mouse) => app.handle_mouse(mouse, now),
                Event::Resize(width, height) => {
                    app.set_viewport(width, height);
                    app.relayout(WallClock::now());
                }
                _ => {}
            }
        }
    }

    Ok(())
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let board_area = layout[0];
    let status_area = layout[1];

    let board = Paragraph::new(app.board_text())
        .style(app.theme.base_style())
        .scroll((app.scroll_offset, 0));
    frame.render_widget(board, board_area);

    let status = Paragraph::new(footer_line(app, Instant::now()));
    frame.render_widget(status, status_area);
    let brand = Paragraph::new(footer_brand_line(&app.theme)).alignment(Alignment::Right);
    frame.render_widget(brand, status_area);
}

// Footer rendering helpers.
include!("chrome.rs");

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    expires_at: Instant,
}

/// Re-entrancy flag for render passes.
///
/// A trigger that finds the gate closed is dropped; the next timer tick or key press retries.
#[derive(Debug, Clone, Default)]
pub(crate) struct RenderGate {
    busy: Arc<AtomicBool>,
}

impl RenderGate {
    pub(crate) fn try_enter(&self) -> Option<RenderPermit> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| RenderPermit { busy: Arc::clone(&self.busy) })
    }
}

#[derive(Debug)]
pub(crate) struct RenderPermit {
    busy: Arc<AtomicBool>,
}

impl Drop for RenderPermit {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}

struct App {
    source: Box<dyn DocumentSource>,
    options: KioskOptions,
    theme: TuiTheme,
    gate: RenderGate,
    rendered: Option<RenderedBoard>,
    updated_at: Option<Minute>,
    toast: Option<Toast>,
    autoscroll: AutoScroll,
    scroll_offset: u16,
    viewport_width: u16,
    viewport_height: u16,
    next_refresh: Instant,
    refresh_requested: bool,
    fullscreen: bool,
    fullscreen_request: Option<bool>,
    should_quit: bool,
}

impl App {
    fn new(
        source: Box<dyn DocumentSource>,
        options: KioskOptions,
        theme: TuiTheme,
        now: Instant,
    ) -> Self {
        let autoscroll = AutoScroll::new(options.autoscroll, now);
        Self {
            source,
            options,
            theme,
            gate: RenderGate::default(),
            rendered: None,
            updated_at: None,
            toast: None,
            autoscroll,
            scroll_offset: 0,
            viewport_width: BoardGeometry::default().width,
            viewport_height: 0,
            next_refresh: now,
            refresh_requested: false,
            fullscreen: true,
            fullscreen_request: None,
            should_quit: false,
        }
    }

    fn pass_options(&self) -> PassOptions {
        let geometry =
            BoardGeometry::new(self.viewport_width).with_rows_per_hour(self.options.rows_per_hour);
        PassOptions { date: self.options.date, geometry }
    }

    /// Terminal size including the footer row.
    fn set_viewport(&mut self, width: u16, height: u16) {
        self.viewport_width = width;
        self.viewport_height = height.saturating_sub(1);
    }

    fn refresh_due(&self, now: Instant) -> bool {
        self.refresh_requested || now >= self.next_refresh
    }

    /// Full render pass: re-read the source, re-parse, re-layout.
    fn refresh(&mut self, now: Instant, clock: WallClock) {
        self.refresh_requested = false;
        self.next_refresh = now + self.options.refresh_interval;

        let Some(_permit) = self.gate.try_enter() else {
            tracing::debug!("render pass already in flight; refresh dropped");
            return;
        };
        match run_pass(self.source.as_ref(), &self.pass_options(), clock) {
            Ok(rendered) => self.install(rendered, clock),
            Err(err) => {
                tracing::error!(source = %self.source.describe(), %err, "refresh failed");
                self.set_toast(format!("Refresh failed: {err}"));
            }
        }
    }

    /// Re-lays out the last loaded document, e.g. after a resize.
    fn relayout(&mut self, clock: WallClock) {
        let Some(document) = self.rendered.as_ref().map(|rendered| rendered.document.clone())
        else {
            return;
        };
        let Some(_permit) = self.gate.try_enter() else {
            tracing::debug!("render pass already in flight; relayout dropped");
            return;
        };
        match render_document(document, &self.pass_options(), clock) {
            Ok(rendered) => self.install(rendered, clock),
            Err(err) => {
                tracing::error!(%err, "relayout failed");
                self.set_toast(format!("Layout failed: {err}"));
            }
        }
    }

    fn install(&mut self, rendered: RenderedBoard, clock: WallClock) {
        tracing::info!(
            date = %rendered.layout.date,
            events = rendered.layout.events.len(),
            lines = rendered.board.line_count(),
            width = self.viewport_width,
            "board rendered"
        );
        self.rendered = Some(rendered);
        self.updated_at = Some(clock.minute);
        self.scroll_offset = self.scroll_offset.min(self.max_offset());
    }

    fn max_offset(&self) -> u16 {
        let lines = self.rendered.as_ref().map_or(0, |rendered| rendered.board.line_count());
        u16::try_from(lines).unwrap_or(u16::MAX).saturating_sub(self.viewport_height)
    }

    fn tick(&mut self, now: Instant) {
        self.scroll_offset = self.autoscroll.tick(now, self.max_offset());
        if self.toast.as_ref().is_some_and(|toast| now >= toast.expires_at) {
            self.toast = None;
        }
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast =
            Some(Toast { message: message.into(), expires_at: Instant::now() + TOAST_DURATION });
    }

    fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        let ctrl_c =
            key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c');
        if ctrl_c || self.handle_key_code(key.code, now) {
            self.should_quit = true;
        }
    }

    /// Returns `true` when the key asks to quit.
    fn handle_key_code(&mut self, code: KeyCode, now: Instant) -> bool {
        let page = i32::from(self.viewport_height.max(1));
        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('r') => self.refresh_requested = true,
            KeyCode::Char('f') => self.request_fullscreen(true),
            KeyCode::Esc => self.request_fullscreen(false),
            KeyCode::Up => self.scroll_by(-1, now),
            KeyCode::Down => self.scroll_by(1, now),
            KeyCode::PageUp => self.scroll_by(-page, now),
            KeyCode::PageDown => self.scroll_by(page, now),
            KeyCode::Home => self.scroll_to(0, now),
            KeyCode::End => self.scroll_to(self.max_offset(), now),
            _ => {}
        }
        false
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        match mouse.kind {
            MouseEventKind::Down(_) => self.request_fullscreen(true),
            MouseEventKind::ScrollUp => self.scroll_by(-MOUSE_SCROLL_ROWS, now),
            MouseEventKind::ScrollDown => self.scroll_by(MOUSE_SCROLL_ROWS, now),
            _ => {}
        }
    }

    fn request_fullscreen(&mut self, wanted: bool) {
        if self.fullscreen != wanted {
            self.fullscreen_request = Some(wanted);
        }
    }

    fn scroll_by(&mut self, delta: i32, now: Instant) {
        let target = (i32::from(self.scroll_offset) + delta).clamp(0, i32::from(self.max_offset()));
        self.scroll_to(u16::try_from(target).unwrap_or(0), now);
    }

    fn scroll_to(&mut self, offset: u16, now: Instant) {
        let max = self.max_offset();
        self.autoscroll.scroll_manually(now, offset, max);
        self.scroll_offset = offset.min(max);
    }

    fn board_text(&self) -> Text<'static> {
        let Some(rendered) = &self.rendered else {
            let message = Line::styled("No schedule loaded yet.", self.theme.subtitle_style());
            return Text::from(message);
        };

        let base = self.theme.base_style();
        let lines = rendered.board.text.split('\n').collect::<Vec<_>>();
        let mut styles_by_line = lines
            .iter()
            .map(|line| vec![base; line.chars().count()])
            .collect::<Vec<_>>();
        for (object, spans) in &rendered.board.index {
            apply_style(&mut styles_by_line, spans, self.style_for(object, rendered));
        }

        lines
            .iter()
            .zip(&styles_by_line)
            .map(|(line, styles)| styled_line(line, styles))
            .collect::<Vec<_>>()
            .into()
    }

    fn style_for(&self, object: &BoardObject, rendered: &RenderedBoard) -> Style {
        let document = &rendered.document;
        match object {
            BoardObject::Title => self.theme.title_style(),
            BoardObject::Subtitle => self.theme.subtitle_style(),
            BoardObject::HourLabel(_) => self.theme.hour_label_style(),
            BoardObject::Event(index) => {
                let kind = document.events.get(*index).and_then(|event| event.kind());
                self.theme.card_style(event_color(document.palette.color_for(kind)))
            }
            BoardObject::NowLine => self.theme.now_line_style(),
            BoardObject::Legend(index) => match document.palette.entries().get(*index) {
                Some((_, color)) => self.theme.legend_swatch_style(event_color(color)),
                None => self.theme.base_style(),
            },
        }
    }
}

fn apply_style(styles_by_line: &mut [Vec<Style>], spans: &[LineSpan], style: Style) {
    for &(y, x0, x1) in spans {
        let Some(line) = styles_by_line.get_mut(y) else {
            continue;
        };
        for cell in line.iter_mut().take(x1.saturating_add(1)).skip(x0) {
            *cell = style;
        }
    }
}

fn styled_line(line: &str, styles: &[Style]) -> Line<'static> {
    let mut spans = Vec::new();
    let mut run = String::new();
    let mut run_style = Style::default();
    for (ch, &style) in line.chars().zip(styles) {
        if style != run_style && !run.is_empty() {
            spans.push(Span::styled(std::mem::take(&mut run), run_style));
        }
        run_style = style;
        run.push(ch);
    }
    if !run.is_empty() {
        spans.push(Span::styled(run, run_style));
    }
    Line::from(spans)
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    fullscreen: bool,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnableMouseCapture).map_err(|err| {
            teardown_terminal();
            err
        })?;
        let fullscreen = match execute!(stdout, EnterAlternateScreen) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(%err, "could not enter the alternate screen");
                false
            }
        };

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.hide_cursor().and_then(|()| terminal.clear()).map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal, fullscreen })
    }

    fn size(&self) -> io::Result<Size> {
        self.terminal.size()
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }

    fn set_fullscreen(&mut self, wanted: bool) -> io::Result<()> {
        if wanted {
            execute!(self.terminal.backend_mut(), EnterAlternateScreen)?;
        } else {
            execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        }
        self.terminal.clear()?;
        self.fullscreen = wanted;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, DisableMouseCapture, LeaveAlternateScreen);
}
