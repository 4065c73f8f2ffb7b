// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Skema-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Skema and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! One full render pass: read the source, parse, lay out, render.
//!
//! Both `skema --print` and every kiosk refresh go through [`run_pass`]. A pass derives all of
//! its state from its inputs, so running it twice on the same inputs gives the same board.

use std::fmt;

use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};

use crate::format::ScheduleDocument;
use crate::layout::{layout_board, BoardGeometry, BoardLayout};
use crate::model::{Minute, MINUTES_PER_HOUR};
use crate::render::board::BoardRenderError;
use crate::render::{render_board_annotated, AnnotatedBoard};
use crate::store::{load_document, DocumentSource, SourceError};

/// Local wall-clock reading used for the reference date and the now line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallClock {
    pub today: NaiveDate,
    pub minute: Minute,
}

impl WallClock {
    pub fn now() -> Self {
        Self::at(Local::now().naive_local())
    }

    pub fn at(moment: NaiveDateTime) -> Self {
        let minutes = moment.hour() as u16 * MINUTES_PER_HOUR + moment.minute() as u16;
        Self { today: moment.date(), minute: Minute::new(minutes).unwrap_or(Minute::MIDNIGHT) }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassOptions {
    /// Overrides `settings.date` when set.
    pub date: Option<NaiveDate>,
    pub geometry: BoardGeometry,
}

impl PassOptions {
    pub fn new(geometry: BoardGeometry) -> Self {
        Self { date: None, geometry }
    }

    fn reference_date(&self, document: &ScheduleDocument, clock: WallClock) -> NaiveDate {
        self.date.unwrap_or_else(|| document.settings.reference_date(clock.today))
    }
}

#[derive(Debug, Clone)]
pub struct RenderedBoard {
    pub document: ScheduleDocument,
    pub layout: BoardLayout,
    pub board: AnnotatedBoard,
}

#[derive(Debug)]
pub enum PassError {
    Source(SourceError),
    Render(BoardRenderError),
}

impl fmt::Display for PassError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source(err) => write!(f, "{err}"),
            Self::Render(err) => write!(f, "render failed: {err}"),
        }
    }
}

impl std::error::Error for PassError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Source(err) => Some(err),
            Self::Render(err) => Some(err),
        }
    }
}

impl From<SourceError> for PassError {
    fn from(value: SourceError) -> Self {
        Self::Source(value)
    }
}

impl From<BoardRenderError> for PassError {
    fn from(value: BoardRenderError) -> Self {
        Self::Render(value)
    }
}

/// Reads `source` afresh and renders it.
pub fn run_pass(
    source: &dyn DocumentSource,
    options: &PassOptions,
    clock: WallClock,
) -> Result<RenderedBoard, PassError> {
    let document = load_document(source)?;
    Ok(render_document(document, options, clock)?)
}

/// Lays out and renders an already loaded document, e.g. after a terminal resize.
pub fn render_document(
    document: ScheduleDocument,
    options: &PassOptions,
    clock: WallClock,
) -> Result<RenderedBoard, BoardRenderError> {
    let date = options.reference_date(&document, clock);
    let layout = layout_board(&document, date, options.geometry);
    let board = render_board_annotated(&document, &layout, Some(clock.minute))?;
    Ok(RenderedBoard { document, layout, board })
}
