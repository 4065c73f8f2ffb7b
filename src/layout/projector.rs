// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Skema-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Skema and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::lanes::LanedEvent;
use super::window::TimeScale;

/// Horizontal and vertical geometry shared by every event of a render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionGeometry {
    /// Width available to event lanes.
    pub available_width: f64,
    /// Left edge of lane 0.
    pub base_offset: f64,
    /// Space kept free to the right of every card.
    pub gutter: f64,
    /// Smallest height a card is drawn with.
    pub min_height: f64,
    pub scale: TimeScale,
}

/// Where a laned event is drawn, in board units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl DrawRect {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Maps a laned event onto the board.
pub fn project(event: &LanedEvent, geometry: &ProjectionGeometry) -> DrawRect {
    let lane_width = geometry.available_width.max(0.0) / event.lane_count.max(1) as f64;
    DrawRect {
        left: geometry.base_offset + event.lane as f64 * lane_width,
        top: geometry.scale.offset_of(event.start),
        width: (lane_width - geometry.gutter).max(0.0),
        height: geometry
            .scale
            .length_of(event.end.saturating_sub(event.start))
            .max(geometry.min_height),
    }
}
