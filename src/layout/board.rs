// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Skema-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Skema and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use chrono::{Datelike, NaiveDate, Weekday};

use super::filter::{resolve_events, MIN_EVENT_MINUTES};
use super::grouping::group_conflicts;
use super::lanes::{assign_all_lanes, LanedEvent};
use super::projector::{project, DrawRect, ProjectionGeometry};
use super::window::{TimeScale, TimeWindow};
use crate::format::ScheduleDocument;

pub const DEFAULT_ROWS_PER_HOUR: u16 = 4;
pub const LABEL_WIDTH: u16 = 6;

/// Board dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    pub width: u16,
    pub rows_per_hour: u16,
    /// Columns reserved for the `HH:MM` hour labels.
    pub label_width: u16,
    pub left_gutter: u16,
    pub right_gutter: u16,
    /// Columns kept free between neighbouring lanes.
    pub lane_gutter: u16,
}

impl BoardGeometry {
    pub fn new(width: u16) -> Self {
        Self {
            width,
            rows_per_hour: DEFAULT_ROWS_PER_HOUR,
            label_width: LABEL_WIDTH,
            left_gutter: 1,
            right_gutter: 1,
            lane_gutter: 1,
        }
    }

    pub fn with_rows_per_hour(mut self, rows_per_hour: u16) -> Self {
        self.rows_per_hour = rows_per_hour.max(1);
        self
    }

    /// Left edge of lane 0.
    pub fn lanes_left(&self) -> u16 {
        self.label_width.saturating_add(self.left_gutter)
    }

    /// Width left for lanes once labels and gutters are taken, never negative.
    pub fn lanes_width(&self) -> u16 {
        self.width
            .saturating_sub(self.label_width)
            .saturating_sub(self.left_gutter)
            .saturating_sub(self.right_gutter)
    }
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self::new(80)
    }
}

/// A laned event together with where it is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedEvent {
    pub laned: LanedEvent,
    pub rect: DrawRect,
}

impl PlacedEvent {
    /// Position of the source event in `ScheduleDocument::events`.
    pub fn index(&self) -> usize {
        self.laned.index
    }
}

/// Result of one render pass over a document.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardLayout {
    pub window: TimeWindow,
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub geometry: BoardGeometry,
    pub scale: TimeScale,
    /// Board height in rows, `hour_count * rows_per_hour`.
    pub rows: u16,
    pub group_count: usize,
    /// Placed events in group order, then lane-assignment order.
    pub events: Vec<PlacedEvent>,
}

/// Runs the layout pipeline for `date`: filter, group, assign lanes, project.
///
/// The pass is pure; nothing derived from an earlier pass is reused.
pub fn layout_board(
    document: &ScheduleDocument,
    date: NaiveDate,
    geometry: BoardGeometry,
) -> BoardLayout {
    let window = TimeWindow::from_settings(&document.settings);
    let weekday = date.weekday();
    let rows = window.hour_count().saturating_mul(geometry.rows_per_hour.max(1));
    let scale = window.scale(f64::from(rows));

    let clipped = resolve_events(&document.events, weekday, &window);
    let groups = group_conflicts(&clipped);
    let laned = assign_all_lanes(&groups);

    let projection = ProjectionGeometry {
        available_width: f64::from(geometry.lanes_width()),
        base_offset: f64::from(geometry.lanes_left()),
        gutter: f64::from(geometry.lane_gutter),
        min_height: scale.length_of(MIN_EVENT_MINUTES),
        scale,
    };
    let events = laned
        .into_iter()
        .map(|laned| PlacedEvent { laned, rect: project(&laned, &projection) })
        .collect::<Vec<_>>();

    tracing::debug!(
        %date,
        ?weekday,
        input = document.events.len(),
        visible = events.len(),
        groups = groups.len(),
        "laid out board"
    );

    BoardLayout {
        window,
        date,
        weekday,
        geometry,
        scale,
        rows,
        group_count: groups.len(),
        events,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Weekday};

    use super::{layout_board, BoardGeometry};
    use crate::format::{ScheduleDocument, Settings};
    use crate::model::fixtures::{event, overlapping_pair_then_single};
    use crate::model::{DayConstraint, WeekdaySet};

    fn sunday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).expect("date")
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
    }

    fn document(events: Vec<crate::model::Event>) -> ScheduleDocument {
        ScheduleDocument {
            settings: Settings { start_hour: Some(8), end_hour: Some(12), ..Settings::default() },
            events,
            ..ScheduleDocument::default()
        }
    }

    #[test]
    fn lays_out_pair_and_single_in_cells() {
        let layout = layout_board(
            &document(overlapping_pair_then_single()),
            sunday(),
            BoardGeometry::new(48),
        );
        assert_eq!(layout.weekday, Weekday::Sun);
        assert_eq!(layout.rows, 16);
        assert_eq!(layout.group_count, 2);
        assert_eq!(layout.events.len(), 3);

        // 48 - 6 labels - 2 gutters = 40 columns of lanes starting at column 7.
        let a = layout.events[0];
        let b = layout.events[1];
        let c = layout.events[2];
        assert_eq!((a.index(), a.rect.left, a.rect.width), (0, 7.0, 19.0));
        assert_eq!((b.index(), b.rect.left, b.rect.width), (1, 27.0, 19.0));
        assert_eq!((c.index(), c.rect.left, c.rect.width), (2, 7.0, 39.0));
        assert_close(a.rect.top, 4.0);
        assert_close(a.rect.height, 4.0);
        assert_close(c.rect.top, 12.0);
    }

    #[test]
    fn filters_by_reference_weekday() {
        let only_monday = [Weekday::Mon].into_iter().collect::<WeekdaySet>();
        let events = vec![
            event("Monday", "09:00", "10:00").with_days(DayConstraint::Only(only_monday)),
            event("Daily", "09:00", "10:00"),
        ];
        let doc = document(events);

        let sunday = layout_board(&doc, sunday(), BoardGeometry::default());
        assert_eq!(sunday.events.iter().map(|placed| placed.index()).collect::<Vec<_>>(), [1]);

        let monday = sunday.date.succ_opt().expect("monday");
        let monday = layout_board(&doc, monday, BoardGeometry::default());
        assert_eq!(monday.events.len(), 2);
        assert_eq!(monday.group_count, 1);
    }

    #[test]
    fn min_height_is_five_minutes_of_rows() {
        let doc = document(vec![event("Blip", "09:00", "09:01")]);
        let geometry = BoardGeometry::new(40).with_rows_per_hour(12);
        let layout = layout_board(&doc, sunday(), geometry);
        assert_close(layout.events[0].rect.height, 1.0);
    }

    #[test]
    fn narrow_boards_degrade_without_panicking() {
        let doc = document(overlapping_pair_then_single());
        let layout = layout_board(&doc, sunday(), BoardGeometry::new(3));
        assert_eq!(layout.geometry.lanes_width(), 0);
        assert!(layout.events.iter().all(|placed| placed.rect.width == 0.0));
    }

    #[test]
    fn repeated_passes_are_identical() {
        let doc = document(overlapping_pair_then_single());
        let first = layout_board(&doc, sunday(), BoardGeometry::default());
        let second = layout_board(&doc, sunday(), BoardGeometry::default());
        assert_eq!(first, second);
    }
}
