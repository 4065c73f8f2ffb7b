// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Skema-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Skema and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Layout of a day's events into conflict-free lanes.
//!
//! The pipeline is leaf-first and one-way: [`resolve_events`] selects and clips the events of the
//! reference day, [`group_conflicts`] clusters them by transitive overlap, [`assign_lanes`] places
//! each group into first-fit lanes and [`project`] turns lanes into board rectangles.
//! [`layout_board`] runs the whole pass.

pub mod board;
pub mod filter;
pub mod grouping;
pub mod lanes;
pub mod projector;
pub mod window;

pub use board::{layout_board, BoardGeometry, BoardLayout, PlacedEvent, DEFAULT_ROWS_PER_HOUR};
pub use filter::{clip_to_window, resolve_events, ClippedEvent, MIN_EVENT_MINUTES};
pub use grouping::{group_conflicts, sweep_order, ConflictGroup};
pub use lanes::{assign_all_lanes, assign_lanes, LanedEvent};
pub use projector::{project, DrawRect, ProjectionGeometry};
pub use window::{TimeScale, TimeWindow};
