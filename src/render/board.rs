// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Skema-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Skema and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use chrono::{Locale, NaiveDate, NaiveTime};

use crate::format::ScheduleDocument;
use crate::layout::{BoardLayout, PlacedEvent};
use crate::model::{Event, Minute, MINUTES_PER_HOUR};

use super::text::{flow_positions, text_len, truncate_with_ellipsis};
use super::{clamp_index_to_text, AnnotatedBoard, BoardIndex, Canvas, CanvasError, LineSpan};

/// Title, subtitle and rule.
const HEADER_ROWS: usize = 3;
const LEGEND_GAP_ROWS: usize = 1;
const LEGEND_ITEM_GAP: usize = 3;
const LEGEND_SWATCH: char = '■';
const GRID: char = '┈';
const NOW_LINE: char = '━';
const META_SEPARATOR: &str = " • ";

/// Something drawn on the board that the TUI may want to style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BoardObject {
    Title,
    Subtitle,
    HourLabel(u8),
    /// Card of the event at this position in `ScheduleDocument::events`.
    Event(usize),
    NowLine,
    /// Swatch of the palette entry at this position.
    Legend(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardRenderError {
    Canvas(CanvasError),
    MissingEvent { index: usize },
}

impl fmt::Display for BoardRenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Canvas(err) => write!(f, "canvas error: {err}"),
            Self::MissingEvent { index } => write!(f, "layout refers to missing event #{index}"),
        }
    }
}

impl std::error::Error for BoardRenderError {}

impl From<CanvasError> for BoardRenderError {
    fn from(value: CanvasError) -> Self {
        Self::Canvas(value)
    }
}

/// Long Danish date, e.g. `søndag den 18. oktober 2026`.
pub fn long_danish_date(date: NaiveDate) -> String {
    date.and_time(NaiveTime::MIN)
        .and_utc()
        .format_localized("%A den %-d. %B %Y", Locale::da_DK)
        .to_string()
}

/// Plain-text board, as printed by `skema --print`.
pub fn render_board_text(
    document: &ScheduleDocument,
    layout: &BoardLayout,
    now: Option<Minute>,
) -> Result<String, BoardRenderError> {
    Ok(render_board_annotated(document, layout, now)?.text)
}

/// Renders the board and records which cells each object occupies.
///
/// `now` is only drawn when the document enables the now line and it falls inside the window.
pub fn render_board_annotated(
    document: &ScheduleDocument,
    layout: &BoardLayout,
    now: Option<Minute>,
) -> Result<AnnotatedBoard, BoardRenderError> {
    let geometry = layout.geometry;
    let width = usize::from(geometry.width);
    let board_rows = usize::from(layout.rows);
    let side = usize::from(geometry.left_gutter);
    let inner_width = width.saturating_sub(side + usize::from(geometry.right_gutter));

    let legend_items = document
        .palette
        .entries()
        .iter()
        .map(|(name, _)| format!("{LEGEND_SWATCH} {name}"))
        .collect::<Vec<_>>();
    let legend_lens = legend_items.iter().map(|item| text_len(item)).collect::<Vec<_>>();
    let legend_positions = flow_positions(&legend_lens, inner_width, LEGEND_ITEM_GAP);
    let legend_rows = legend_positions.last().map_or(0, |(row, _)| row + 1);
    let legend_top = HEADER_ROWS + board_rows + LEGEND_GAP_ROWS;
    let height = if legend_rows == 0 { HEADER_ROWS + board_rows } else { legend_top + legend_rows };

    let mut canvas = Canvas::new(width, height)?;
    let mut index = BoardIndex::new();

    // Header.
    let settings = &document.settings;
    let title = settings.brand().unwrap_or_else(|| settings.title());
    let subtitle = long_danish_date(layout.date);
    let header = [(0, BoardObject::Title, title), (1, BoardObject::Subtitle, subtitle.as_str())];
    for (y, object, text) in header {
        let written = canvas.write_str(side, y, &truncate_with_ellipsis(text, inner_width))?;
        if written > 0 {
            index.insert(object, vec![(y, side, side + written - 1)]);
        }
    }
    if width > 0 {
        canvas.draw_hline(0, width - 1, 2, super::BOX_HORIZONTAL)?;
    }

    // Hour labels and grid.
    let window = layout.window;
    let rows_per_hour = usize::from(geometry.rows_per_hour);
    let label_width = usize::from(geometry.label_width);
    for hour in window.hours() {
        let y = HEADER_ROWS + usize::from(hour - window.start_hour()) * rows_per_hour;
        if y >= HEADER_ROWS + board_rows {
            break;
        }
        if label_width < width {
            canvas.draw_hline(label_width, width - 1, y, GRID)?;
        }
        let written = canvas.write_str(0, y, &format!("{hour:02}:00"))?;
        if written > 0 {
            index.insert(BoardObject::HourLabel(hour), vec![(y, 0, written - 1)]);
        }
    }

    // The now line goes in before the cards so that cards cover it.
    let now_row = now
        .filter(|now| settings.show_now_line() && window.contains(*now) && board_rows > 0)
        .map(|now| {
            let elapsed = usize::from(now.get().saturating_sub(window.start_minute()));
            let row = elapsed * board_rows / usize::from(window.minutes());
            HEADER_ROWS + row.min(board_rows - 1)
        });
    if let Some(y) = now_row {
        draw_now_line(&mut canvas, y, label_width)?;
    }

    // Event cards. `next_free` is the first row below the drawn cards, per column.
    let mut next_free = vec![0; width];
    for placed in &layout.events {
        let event = document
            .events
            .get(placed.index())
            .ok_or(BoardRenderError::MissingEvent { index: placed.index() })?;
        if let Some(spans) = draw_card(&mut canvas, &mut next_free, placed, event, board_rows)? {
            index.insert(BoardObject::Event(placed.index()), spans);
        }
    }

    if let Some(y) = now_row {
        let spans = now_line_spans(&canvas, y, label_width)?;
        if !spans.is_empty() {
            index.insert(BoardObject::NowLine, spans);
        }
    }

    // Legend.
    for (idx, (item, (row, col))) in legend_items.iter().zip(&legend_positions).enumerate() {
        let y = legend_top + row;
        let x = side + col;
        if canvas.write_str(x, y, item)? > 0 {
            index.insert(BoardObject::Legend(idx), vec![(y, x, x)]);
        }
    }

    let text = canvas.to_trimmed_string();
    clamp_index_to_text(&mut index, &text);
    Ok(AnnotatedBoard { text, index })
}

/// Draws one card and returns the spans it covers, or `None` when it has no visible cells.
///
/// A card whose rounded top lands on rows already taken in its columns is pushed down below them,
/// so a short card is never painted over by the next one. Only when no row is left does a card
/// share the last board row.
fn draw_card(
    canvas: &mut Canvas,
    next_free: &mut [usize],
    placed: &PlacedEvent,
    event: &Event,
    board_rows: usize,
) -> Result<Option<Vec<LineSpan>>, CanvasError> {
    let rect = placed.rect;
    let x0 = (rect.left.round().max(0.0) as usize).min(canvas.width());
    let x1 = (rect.right().round().max(0.0) as usize).min(canvas.width());
    if x1 <= x0 {
        return Ok(None);
    }
    let taken = next_free.get(x0..x1).and_then(|cols| cols.iter().copied().max()).unwrap_or(0);
    let top = (rect.top.round().max(0.0) as usize).max(taken).min(board_rows.saturating_sub(1));
    let bottom = (rect.bottom().round().max(0.0) as usize).max(top + 1).min(board_rows);
    if top >= bottom {
        return Ok(None);
    }
    if let Some(cols) = next_free.get_mut(x0..x1) {
        for col in cols {
            *col = (*col).max(bottom);
        }
    }

    let (x1, y0, y1) = (x1 - 1, HEADER_ROWS + top, HEADER_ROWS + bottom - 1);
    let (card_width, card_height) = (x1 - x0 + 1, y1 - y0 + 1);
    canvas.fill_rect(x0, y0, x1, y1, ' ')?;

    let title = event.title();
    let meta = card_meta(placed, event);
    if card_height >= 3 && card_width >= 3 {
        canvas.draw_box(x0, y0, x1, y1)?;
        let inner = card_width - 2;
        canvas.write_str(x0 + 1, y0 + 1, &truncate_with_ellipsis(title, inner))?;
        if card_height >= 4 {
            canvas.write_str(x0 + 1, y0 + 2, &truncate_with_ellipsis(&meta, inner))?;
        }
    } else {
        canvas.write_str(x0, y0, &truncate_with_ellipsis(title, card_width))?;
        if card_height >= 2 {
            canvas.write_str(x0, y0 + 1, &truncate_with_ellipsis(&meta, card_width))?;
        }
    }

    Ok(Some((y0..=y1).map(|y| (y, x0, x1)).collect()))
}

/// `HH:MM–HH:MM • room • teacher • type`, skipping absent parts.
fn card_meta(placed: &PlacedEvent, event: &Event) -> String {
    let mut meta = format!("{}–{}", clock(placed.laned.start), clock(placed.laned.end));
    for part in [event.room(), event.teacher(), event.kind()].into_iter().flatten() {
        meta.push_str(META_SEPARATOR);
        meta.push_str(part);
    }
    meta
}

/// Formats minutes since midnight; padded ends may run a few minutes past 24:00.
fn clock(minutes: u16) -> String {
    format!("{:02}:{:02}", minutes / MINUTES_PER_HOUR, minutes % MINUTES_PER_HOUR)
}

fn draw_now_line(canvas: &mut Canvas, y: usize, from_x: usize) -> Result<(), CanvasError> {
    for x in from_x..canvas.width() {
        canvas.set(x, y, NOW_LINE)?;
    }
    Ok(())
}

/// Runs of now-line cells left visible once the cards are drawn.
fn now_line_spans(canvas: &Canvas, y: usize, from_x: usize) -> Result<Vec<LineSpan>, CanvasError> {
    let mut spans = Vec::<LineSpan>::new();
    for x in from_x..canvas.width() {
        if canvas.get(x, y)? != NOW_LINE {
            continue;
        }
        match spans.last_mut() {
            Some((_, _, end)) if *end + 1 == x => *end = x,
            _ => spans.push((y, x, x)),
        }
    }
    Ok(spans)
}
