// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Skema-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Skema and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::cmp::Ordering;

use super::filter::ClippedEvent;

/// A maximal cluster of events connected through a chain of time overlaps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictGroup {
    id: usize,
    members: Vec<ClippedEvent>,
    end: u16,
}

impl ConflictGroup {
    fn start_with(id: usize, first: ClippedEvent) -> Self {
        Self { id, end: first.end, members: vec![first] }
    }

    /// Builds a group from members in the given order, skipping the sweep.
    #[cfg(test)]
    pub(crate) fn from_members(id: usize, members: Vec<ClippedEvent>) -> Self {
        let end = members.iter().map(|member| member.end).max().unwrap_or(0);
        Self { id, members, end }
    }

    fn push(&mut self, event: ClippedEvent) {
        self.end = self.end.max(event.end);
        self.members.push(event);
    }

    /// 0-based position of the group in sweep order.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Members in sweep order.
    pub fn members(&self) -> &[ClippedEvent] {
        &self.members
    }

    pub fn start(&self) -> u16 {
        self.members.first().map_or(0, |first| first.start)
    }

    /// Latest end minute of any member.
    pub fn end(&self) -> u16 {
        self.end
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Sweep order: ascending start, longer events first on equal starts.
///
/// Remaining ties fall back to input position so the order is total and deterministic.
pub fn sweep_order(a: &ClippedEvent, b: &ClippedEvent) -> Ordering {
    a.start
        .cmp(&b.start)
        .then_with(|| b.end.cmp(&a.end))
        .then_with(|| a.index.cmp(&b.index))
}

/// Partitions events into conflict groups.
///
/// Events are swept in [`sweep_order`]; a new group starts whenever an event begins at or after
/// the latest end seen in the current group.
pub fn group_conflicts(events: &[ClippedEvent]) -> Vec<ConflictGroup> {
    let mut sorted = events.to_vec();
    sorted.sort_by(sweep_order);

    let mut groups = Vec::<ConflictGroup>::new();
    for event in sorted {
        match groups.last_mut() {
            Some(current) if event.start < current.end => current.push(event),
            _ => {
                let id = groups.len();
                groups.push(ConflictGroup::start_with(id, event));
            }
        }
    }

    groups
}
