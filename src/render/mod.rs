// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Skema-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Skema and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Character-cell rendering of the schedule board.
//!
//! The renderer produces plain Unicode text plus a span index that tells the TUI which cells belong
//! to which board object, so colours can be applied without re-deriving the layout.

use std::collections::BTreeMap;
use std::fmt;

pub mod board;
mod text;

pub use board::{long_danish_date, render_board_annotated, render_board_text, BoardObject};

/// A contiguous run of cells within one rendered line.
///
/// Coordinates are `(y, x0, x1)` in character-cell indices, inclusive.
pub type LineSpan = (usize, usize, usize);

/// Spans occupied by each drawn board object.
pub type BoardIndex = BTreeMap<BoardObject, Vec<LineSpan>>;

/// Rendered board text plus its span index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedBoard {
    pub text: String,
    pub index: BoardIndex,
}

impl AnnotatedBoard {
    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    pub fn spans_of(&self, object: &BoardObject) -> &[LineSpan] {
        self.index.get(object).map_or(&[], Vec::as_slice)
    }
}

/// Drops spans that fall outside the (trimmed) text and shortens the rest to fit.
pub(crate) fn clamp_index_to_text(index: &mut BoardIndex, text: &str) {
    let line_lens = text.split('\n').map(text::text_len).collect::<Vec<_>>();

    index.retain(|_, spans| {
        spans.retain_mut(|(y, x0, x1)| {
            let Some(&len) = line_lens.get(*y) else {
                return false;
            };
            if len == 0 || *x0 >= len {
                return false;
            }
            *x1 = (*x1).min(len - 1);
            *x0 <= *x1
        });
        !spans.is_empty()
    });
}

pub const BOX_HORIZONTAL: char = '─';
pub const BOX_VERTICAL: char = '│';
pub const BOX_TOP_LEFT: char = '┌';
pub const BOX_TOP_RIGHT: char = '┐';
pub const BOX_BOTTOM_LEFT: char = '└';
pub const BOX_BOTTOM_RIGHT: char = '┘';

/// A fixed-size, bounds-checked character grid. Later writes overwrite earlier ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Canvas {
    /// Creates a canvas filled with spaces.
    pub fn new(width: usize, height: usize) -> Result<Self, CanvasError> {
        let len = width
            .checked_mul(height)
            .ok_or(CanvasError::AreaOverflow { width, height })?;
        Ok(Self { width, height, cells: vec![' '; len] })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Result<char, CanvasError> {
        Ok(self.cells[self.index_of(x, y)?])
    }

    pub fn set(&mut self, x: usize, y: usize, ch: char) -> Result<(), CanvasError> {
        let idx = self.index_of(x, y)?;
        self.cells[idx] = ch;
        Ok(())
    }

    /// Writes `text` left-to-right from `(x, y)`, clipping at the right edge.
    ///
    /// Returns the number of cells written.
    pub fn write_str(&mut self, x: usize, y: usize, text: &str) -> Result<usize, CanvasError> {
        if y >= self.height {
            return Err(self.out_of_bounds(x, y));
        }

        let mut written = 0;
        for (col, ch) in (x..self.width).zip(text.chars()) {
            self.set(col, y, ch)?;
            written += 1;
        }
        Ok(written)
    }

    /// Fills `x0..=x1` on row `y` with `ch`.
    pub fn draw_hline(
        &mut self,
        x0: usize,
        x1: usize,
        y: usize,
        ch: char,
    ) -> Result<(), CanvasError> {
        let (min_x, max_x) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        self.check_rect(min_x, y, max_x, y)?;
        for x in min_x..=max_x {
            self.set(x, y, ch)?;
        }
        Ok(())
    }

    /// Fills the inclusive rectangle `(x0, y0)..=(x1, y1)` with `ch`.
    pub fn fill_rect(
        &mut self,
        x0: usize,
        y0: usize,
        x1: usize,
        y1: usize,
        ch: char,
    ) -> Result<(), CanvasError> {
        self.check_rect(x0, y0, x1, y1)?;
        for y in y0..=y1 {
            for x in x0..=x1 {
                self.set(x, y, ch)?;
            }
        }
        Ok(())
    }

    /// Draws a single-line box with corners at `(x0, y0)` and `(x1, y1)`.
    ///
    /// Nothing is drawn when any corner is out of bounds.
    pub fn draw_box(
        &mut self,
        x0: usize,
        y0: usize,
        x1: usize,
        y1: usize,
    ) -> Result<(), CanvasError> {
        let (min_x, max_x) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let (min_y, max_y) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        self.check_rect(min_x, min_y, max_x, max_y)?;

        if min_y == max_y {
            return self.draw_hline(min_x, max_x, min_y, BOX_HORIZONTAL);
        }

        for x in (min_x + 1)..max_x {
            self.set(x, min_y, BOX_HORIZONTAL)?;
            self.set(x, max_y, BOX_HORIZONTAL)?;
        }
        for y in (min_y + 1)..max_y {
            self.set(min_x, y, BOX_VERTICAL)?;
            self.set(max_x, y, BOX_VERTICAL)?;
        }

        if min_x == max_x {
            self.set(min_x, min_y, BOX_VERTICAL)?;
            return self.set(min_x, max_y, BOX_VERTICAL);
        }

        self.set(min_x, min_y, BOX_TOP_LEFT)?;
        self.set(max_x, min_y, BOX_TOP_RIGHT)?;
        self.set(min_x, max_y, BOX_BOTTOM_LEFT)?;
        self.set(max_x, max_y, BOX_BOTTOM_RIGHT)
    }

    /// Renders rows with trailing spaces removed, dropping trailing empty rows.
    pub fn to_trimmed_string(&self) -> String {
        let mut lines = self
            .cells
            .chunks(self.width.max(1))
            .take(self.height)
            .map(|row| row.iter().collect::<String>().trim_end_matches(' ').to_owned())
            .collect::<Vec<_>>();
        while matches!(lines.last(), Some(line) if line.is_empty()) {
            lines.pop();
        }
        lines.join("\n")
    }

    fn check_rect(&self, x0: usize, y0: usize, x1: usize, y1: usize) -> Result<(), CanvasError> {
        if !self.in_bounds(x0, y0) {
            return Err(self.out_of_bounds(x0, y0));
        }
        if !self.in_bounds(x1, y1) {
            return Err(self.out_of_bounds(x1, y1));
        }
        Ok(())
    }

    fn index_of(&self, x: usize, y: usize) -> Result<usize, CanvasError> {
        if !self.in_bounds(x, y) {
            return Err(self.out_of_bounds(x, y));
        }
        Ok((y * self.width) + x)
    }

    fn out_of_bounds(&self, x: usize, y: usize) -> CanvasError {
        CanvasError::OutOfBounds { x, y, width: self.width, height: self.height }
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use std::fmt::Write as _;

        for y in 0..self.height {
            for x in 0..self.width {
                f.write_char(self.cells[(y * self.width) + x])?;
            }
            if y + 1 < self.height {
                f.write_char('\n')?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasError {
    AreaOverflow { width: usize, height: usize },
    OutOfBounds { x: usize, y: usize, width: usize, height: usize },
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AreaOverflow { width, height } => {
                write!(f, "canvas area overflow: {width}*{height}")
            }
            Self::OutOfBounds { x, y, width, height } => {
                write!(f, "out of bounds: ({x},{y}) for {width}x{height} canvas")
            }
        }
    }
}

impl std::error::Error for CanvasError {}
