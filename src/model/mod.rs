// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Skema-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Skema and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Input events are validated once at ingestion: wall-clock times become [`Minute`]s and the
//! flexible `day`/`days`/`weekdays` fields collapse into a [`DayConstraint`].

pub mod event;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod minutes;
pub mod weekday;

pub use event::{Event, EventError, EventRecord, UNTITLED};
pub use minutes::{Minute, MinuteParseError, MINUTES_PER_DAY, MINUTES_PER_HOUR};
pub use weekday::{
    weekday_from_index, weekday_from_name, weekday_index, DayConstraint, DayField, DayValue,
    WeekdaySet,
};
