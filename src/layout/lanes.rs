// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Skema-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Skema and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smallvec::SmallVec;

use super::filter::ClippedEvent;
use super::grouping::{sweep_order, ConflictGroup};

/// Per-group lane end times; most groups need only a handful of lanes.
type LaneEnds = SmallVec<[u16; 8]>;

/// An event placed in a horizontal lane of its conflict group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LanedEvent {
    /// Position of the source event in the input list.
    pub index: usize,
    pub start: u16,
    pub end: u16,
    pub group_id: usize,
    pub lane: usize,
    /// Lanes used by the whole group; identical for every member.
    pub lane_count: usize,
}

impl LanedEvent {
    pub fn clipped(&self) -> ClippedEvent {
        ClippedEvent { index: self.index, start: self.start, end: self.end }
    }
}

/// Assigns every member of `group` to the lowest free lane.
///
/// Members are re-sorted into sweep order first. A lane is free for an event when its last
/// occupant ends at or before the event starts. Lane counts are stamped in a second pass once the
/// group's final lane count is known.
pub fn assign_lanes(group: &ConflictGroup) -> Vec<LanedEvent> {
    let mut members = group.members().to_vec();
    members.sort_by(sweep_order);

    let mut lane_ends = LaneEnds::new();
    let mut placed = Vec::<(ClippedEvent, usize)>::with_capacity(members.len());
    for event in members {
        let lane = match lane_ends.iter().position(|&free_at| free_at <= event.start) {
            Some(lane) => {
                lane_ends[lane] = event.end;
                lane
            }
            None => {
                lane_ends.push(event.end);
                lane_ends.len() - 1
            }
        };
        placed.push((event, lane));
    }

    let lane_count = lane_ends.len().max(1);
    placed
        .into_iter()
        .map(|(event, lane)| LanedEvent {
            index: event.index,
            start: event.start,
            end: event.end,
            group_id: group.id(),
            lane,
            lane_count,
        })
        .collect()
}

/// Lane assignment for every group, concatenated in group order.
pub fn assign_all_lanes(groups: &[ConflictGroup]) -> Vec<LanedEvent> {
    groups.iter().flat_map(assign_lanes).collect()
}
