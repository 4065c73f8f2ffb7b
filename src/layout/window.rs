// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Skema-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Skema and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::format::Settings;
use crate::model::{Minute, MINUTES_PER_HOUR};

/// The visible part of the day, `[start, end)` in whole hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start_hour: u8,
    end_hour: u8,
}

impl TimeWindow {
    /// Builds a window, clamping it to at least one hour inside the day.
    pub fn new(start_hour: u8, end_hour: u8) -> Self {
        let start_hour = start_hour.min(23);
        let end_hour = end_hour.min(24);
        let end_hour = if end_hour <= start_hour { start_hour + 1 } else { end_hour };
        Self { start_hour, end_hour }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let (start_hour, end_hour) = settings.hours();
        Self::new(start_hour, end_hour)
    }

    pub fn start_hour(&self) -> u8 {
        self.start_hour
    }

    pub fn end_hour(&self) -> u8 {
        self.end_hour
    }

    /// Number of visible hours, never zero.
    pub fn hour_count(&self) -> u16 {
        u16::from(self.end_hour - self.start_hour).max(1)
    }

    pub fn start_minute(&self) -> u16 {
        u16::from(self.start_hour) * MINUTES_PER_HOUR
    }

    pub fn end_minute(&self) -> u16 {
        u16::from(self.end_hour) * MINUTES_PER_HOUR
    }

    pub fn minutes(&self) -> u16 {
        self.hour_count() * MINUTES_PER_HOUR
    }

    /// Whether `minute` falls inside the window, both ends included.
    pub fn contains(&self, minute: Minute) -> bool {
        (self.start_minute()..=self.end_minute()).contains(&minute.get())
    }

    /// Labelled hours, `start_hour..end_hour`.
    pub fn hours(&self) -> impl Iterator<Item = u8> {
        self.start_hour..self.end_hour
    }

    /// Vertical scale for a board `board_height` units tall.
    pub fn scale(&self, board_height: f64) -> TimeScale {
        TimeScale {
            window_start: self.start_minute(),
            px_per_minute: board_height.max(0.0) / f64::from(self.minutes()),
        }
    }
}

impl Default for TimeWindow {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

/// Conversion between minutes since midnight and vertical offsets on the board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    window_start: u16,
    px_per_minute: f64,
}

impl TimeScale {
    pub fn px_per_minute(&self) -> f64 {
        self.px_per_minute
    }

    pub fn window_start(&self) -> u16 {
        self.window_start
    }

    /// Offset of `minute` from the top of the board.
    pub fn offset_of(&self, minute: u16) -> f64 {
        (f64::from(minute) - f64::from(self.window_start)) * self.px_per_minute
    }

    /// Length of a span of `minutes`.
    pub fn length_of(&self, minutes: u16) -> f64 {
        f64::from(minutes) * self.px_per_minute
    }
}
