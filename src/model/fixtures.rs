// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Skema-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Skema and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::event::Event;
use super::minutes::Minute;

pub(crate) fn hm(raw: &str) -> Minute {
    raw.parse().expect("fixture time")
}

pub(crate) fn event(title: &str, start: &str, end: &str) -> Event {
    Event::new(title, hm(start), hm(end))
}

/// Two overlapping morning events followed by a separate late-morning one.
pub(crate) fn overlapping_pair_then_single() -> Vec<Event> {
    vec![
        event("A", "09:00", "10:00"),
        event("B", "09:30", "10:30"),
        event("C", "11:00", "12:00"),
    ]
}

/// Three events nested inside one another.
pub(crate) fn fully_nested() -> Vec<Event> {
    vec![
        event("Outer", "09:00", "12:00"),
        event("Middle", "09:30", "11:30"),
        event("Inner", "10:00", "11:00"),
    ]
}

/// A chain where neighbours overlap but the ends do not: A-B, B-C, C-D.
pub(crate) fn overlap_chain() -> Vec<Event> {
    vec![
        event("A", "08:00", "09:00"),
        event("B", "08:45", "10:00"),
        event("C", "09:45", "11:00"),
        event("D", "10:45", "12:00"),
    ]
}
