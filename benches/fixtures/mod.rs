// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Skema-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Skema and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use chrono::{NaiveDate, Weekday};
use serde_json::json;

use skema::format::{Palette, ScheduleDocument, Settings};
use skema::model::{DayConstraint, Event, Minute, WeekdaySet};

const KINDS: [(&str, &str); 5] = [
    ("yoga", "#22c55e"),
    ("spinning", "#ef4444"),
    ("styrke", "#f59e0b"),
    ("pilates", "#a855f7"),
    ("mobilitet", "#06b6d4"),
];

/// Monday, so weekday-restricted fixture events are partly visible.
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    pub events: usize,
    /// Minutes between consecutive starts; small strides produce deep conflict groups.
    pub stride: u16,
    pub max_length: u16,
}

impl Params {
    pub const fn new(events: usize, stride: u16, max_length: u16) -> Self {
        Self { events, stride, max_length }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Small,
    MediumDense,
    LargeSparse,
    LargeDense,
}

impl Case {
    pub const fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::MediumDense => "medium_dense",
            Self::LargeSparse => "large_sparse",
            Self::LargeDense => "large_dense",
        }
    }

    pub const fn params(self) -> Params {
        match self {
            Self::Small => Params::new(16, 45, 60),
            Self::MediumDense => Params::new(200, 4, 90),
            Self::LargeSparse => Params::new(2_000, 1, 20),
            Self::LargeDense => Params::new(2_000, 1, 240),
        }
    }

    pub const fn all() -> [Self; 4] {
        [Self::Small, Self::MediumDense, Self::LargeSparse, Self::LargeDense]
    }
}

fn start_minute(idx: usize, params: Params) -> u16 {
    // Wraps inside 06:00..22:00 so every case stays within a full-day window.
    let span = 16 * 60;
    let offset = (idx as u64 * u64::from(params.stride) % span) as u16;
    6 * 60 + offset
}

fn length_minutes(idx: usize, params: Params) -> u16 {
    let spread = (idx as u64 * 37 % u64::from(params.max_length)) as u16;
    spread.max(1)
}

fn days_for(idx: usize) -> DayConstraint {
    let only = |days: &[Weekday]| DayConstraint::Only(days.iter().copied().collect::<WeekdaySet>());
    match idx % 7 {
        0 => only(&[Weekday::Mon, Weekday::Wed, Weekday::Fri]),
        1 => only(&[Weekday::Tue, Weekday::Thu]),
        _ => DayConstraint::EveryDay,
    }
}

pub fn fixture(case: Case) -> ScheduleDocument {
    let params = case.params();
    let events = (0..params.events)
        .map(|idx| {
            let start = start_minute(idx, params);
            let end = start.saturating_add(length_minutes(idx, params)).min(24 * 60);
            let (kind, _) = KINDS[idx % KINDS.len()];
            Event::new(
                format!("Hold {idx:04}"),
                Minute::new(start).expect("valid start"),
                Minute::new(end).expect("valid end"),
            )
            .with_kind(kind)
            .with_room(format!("Sal {}", idx % 4 + 1))
            .with_days(days_for(idx))
        })
        .collect();

    ScheduleDocument {
        settings: Settings {
            start_hour: Some(6),
            end_hour: Some(23),
            title: Some(format!("Bench {}", case.id())),
            show_now_line: Some(true),
            ..Settings::default()
        },
        palette: Palette::new(
            KINDS.iter().map(|(kind, color)| ((*kind).to_owned(), (*color).to_owned())).collect(),
        ),
        events,
        skipped: Vec::new(),
    }
}

/// The same schedule as [`fixture`], as document JSON text.
pub fn fixture_json(case: Case) -> String {
    let params = case.params();
    let events = (0..params.events)
        .map(|idx| {
            let start = start_minute(idx, params);
            let end = start.saturating_add(length_minutes(idx, params)).min(24 * 60);
            let (kind, _) = KINDS[idx % KINDS.len()];
            json!({
                "title": format!("Hold {idx:04}"),
                "start": format!("{:02}:{:02}", start / 60, start % 60),
                "end": format!("{:02}:{:02}", end / 60, end % 60),
                "type": kind,
                "room": format!("Sal {}", idx % 4 + 1),
            })
        })
        .collect::<Vec<_>>();
    let palette = KINDS
        .iter()
        .map(|(kind, color)| ((*kind).to_owned(), json!(color)))
        .collect::<serde_json::Map<_, _>>();

    json!({
        "settings": {"startHour": 6, "endHour": 23, "title": format!("Bench {}", case.id())},
        "palette": palette,
        "events": events,
    })
    .to_string()
}
