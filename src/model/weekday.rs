// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Skema-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Skema and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Day-of-week matching for recurring events.

use chrono::Weekday;
use schemars::JsonSchema;
use serde::Deserialize;

/// Weekdays in zero-based index order, `0 = Sunday .. 6 = Saturday`.
const SUNDAY_FIRST: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

const SHORT_NAMES: [&str; 7] = ["sun", "mon", "tue", "wed", "thu", "fri", "sat"];

pub fn weekday_from_index(index: u8) -> Option<Weekday> {
    SUNDAY_FIRST.get(usize::from(index)).copied()
}

pub fn weekday_index(weekday: Weekday) -> u8 {
    // `num_days_from_sunday` is always 0..=6.
    weekday.num_days_from_sunday() as u8
}

/// Normalizes a textual day to a weekday by its first three characters, case-insensitively.
///
/// `"Monday"`, `"mon"` and `"MON"` all map to Monday.
pub fn weekday_from_name(name: &str) -> Option<Weekday> {
    let key = name.chars().take(3).collect::<String>().to_lowercase();
    SHORT_NAMES
        .iter()
        .position(|short| *short == key)
        .and_then(|idx| SUNDAY_FIRST.get(idx).copied())
}

/// One declared day value as it appears in the input document.
#[derive(Debug, Clone, PartialEq, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum DayValue {
    /// Zero-based weekday index, `0 = Sunday`.
    Index(f64),
    /// Weekday name; only the first three characters are significant.
    Text(String),
}

impl DayValue {
    pub fn weekday(&self) -> Option<Weekday> {
        match self {
            Self::Index(value) => {
                if value.is_finite() && value.fract() == 0.0 && (0.0..=6.0).contains(value) {
                    weekday_from_index(*value as u8)
                } else {
                    None
                }
            }
            Self::Text(text) => weekday_from_name(text),
        }
    }
}

/// A `day`/`days`/`weekdays` field: either a single value or a list of values.
#[derive(Debug, Clone, PartialEq, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum DayField {
    One(DayValue),
    Many(Vec<DayValue>),
}

impl DayField {
    pub fn values(&self) -> &[DayValue] {
        match self {
            Self::One(value) => std::slice::from_ref(value),
            Self::Many(values) => values,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    pub const EMPTY: Self = Self(0);

    pub fn insert(&mut self, weekday: Weekday) {
        self.0 |= 1 << weekday_index(weekday);
    }

    pub fn contains(self, weekday: Weekday) -> bool {
        self.0 & (1 << weekday_index(weekday)) != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for weekday in iter {
            set.insert(weekday);
        }
        set
    }
}

/// Normalized day constraint of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayConstraint {
    /// No day fields were declared: the event recurs every day.
    #[default]
    EveryDay,
    /// Day fields were declared; the event applies only on these weekdays.
    ///
    /// A declared constraint whose values all fail to normalize matches no day.
    Only(WeekdaySet),
}

impl DayConstraint {
    /// Collects `day`, `days` and `weekdays` into one constraint.
    ///
    /// Absent (or `null`) fields do not count as declared.
    pub fn from_fields<'a>(fields: impl IntoIterator<Item = Option<&'a DayField>>) -> Self {
        let mut declared = false;
        let mut set = WeekdaySet::EMPTY;
        for field in fields.into_iter().flatten() {
            declared = true;
            for value in field.values() {
                if let Some(weekday) = value.weekday() {
                    set.insert(weekday);
                }
            }
        }

        if declared {
            Self::Only(set)
        } else {
            Self::EveryDay
        }
    }

    pub fn matches(self, weekday: Weekday) -> bool {
        match self {
            Self::EveryDay => true,
            Self::Only(set) => set.contains(weekday),
        }
    }
}
