// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Skema-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Skema and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use schemars::JsonSchema;
use serde::Deserialize;

use super::minutes::{Minute, MinuteParseError};
use super::weekday::{DayConstraint, DayField};

pub const UNTITLED: &str = "Untitled";

/// An event record exactly as it appears in the `events` array of the input document.
#[derive(Debug, Clone, PartialEq, Deserialize, JsonSchema)]
pub struct EventRecord {
    #[serde(default)]
    pub title: Option<String>,
    /// Wall-clock start, `"HH:MM"`.
    pub start: String,
    /// Wall-clock end, `"HH:MM"`.
    pub end: String,
    /// Event type; selects the palette colour.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub room: Option<String>,
    #[serde(default)]
    pub teacher: Option<String>,
    #[serde(default)]
    pub day: Option<DayField>,
    #[serde(default)]
    pub days: Option<DayField>,
    #[serde(default)]
    pub weekdays: Option<DayField>,
}

/// A validated event: times parsed and the day constraint normalized.
///
/// Events are immutable once ingested; layout passes derive new records from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    title: Option<String>,
    start: Minute,
    end: Minute,
    kind: Option<String>,
    room: Option<String>,
    teacher: Option<String>,
    days: DayConstraint,
}

impl Event {
    pub fn new(title: impl Into<String>, start: Minute, end: Minute) -> Self {
        let title = title.into();
        Self {
            title: (!title.is_empty()).then_some(title),
            start,
            end,
            kind: None,
            room: None,
            teacher: None,
            days: DayConstraint::EveryDay,
        }
    }

    pub fn from_record(record: &EventRecord) -> Result<Self, EventError> {
        let start = record
            .start
            .parse::<Minute>()
            .map_err(|source| EventError::Start { source })?;
        let end = record.end.parse::<Minute>().map_err(|source| EventError::End { source })?;

        Ok(Self {
            title: non_empty(record.title.as_deref()),
            start,
            end,
            kind: non_empty(record.kind.as_deref()),
            room: non_empty(record.room.as_deref()),
            teacher: non_empty(record.teacher.as_deref()),
            days: DayConstraint::from_fields([
                record.day.as_ref(),
                record.days.as_ref(),
                record.weekdays.as_ref(),
            ]),
        })
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = Some(room.into());
        self
    }

    pub fn with_teacher(mut self, teacher: impl Into<String>) -> Self {
        self.teacher = Some(teacher.into());
        self
    }

    pub fn with_days(mut self, days: DayConstraint) -> Self {
        self.days = days;
        self
    }

    /// Title for display; falls back to [`UNTITLED`].
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(UNTITLED)
    }

    pub fn start(&self) -> Minute {
        self.start
    }

    pub fn end(&self) -> Minute {
        self.end
    }

    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    pub fn room(&self) -> Option<&str> {
        self.room.as_deref()
    }

    pub fn teacher(&self) -> Option<&str> {
        self.teacher.as_deref()
    }

    pub fn days(&self) -> DayConstraint {
        self.days
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|value| !value.is_empty()).map(str::to_owned)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventError {
    Start { source: MinuteParseError },
    End { source: MinuteParseError },
}

impl fmt::Display for EventError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start { source } => write!(f, "invalid start: {source}"),
            Self::End { source } => write!(f, "invalid end: {source}"),
        }
    }
}

impl std::error::Error for EventError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Start { source } | Self::End { source } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;

    use super::{Event, EventError, EventRecord};
    use crate::model::minutes::MinuteParseError;

    fn record(json: &str) -> EventRecord {
        serde_json::from_str(json).expect("event record")
    }

    #[test]
    fn from_record_parses_times_and_days() {
        let event = Event::from_record(&record(
            r#"{"title":"Yoga","start":"09:00","end":"10:15","type":"class","room":"A",
                "days":["mon","Wed"]}"#,
        ))
        .expect("event");

        assert_eq!(event.title(), "Yoga");
        assert_eq!(event.start().get(), 540);
        assert_eq!(event.end().get(), 615);
        assert_eq!(event.kind(), Some("class"));
        assert_eq!(event.room(), Some("A"));
        assert_eq!(event.teacher(), None);
        assert!(event.days().matches(Weekday::Mon));
        assert!(event.days().matches(Weekday::Wed));
        assert!(!event.days().matches(Weekday::Tue));
    }

    #[test]
    fn missing_title_displays_untitled() {
        let event = Event::from_record(&record(r#"{"start":"09:00","end":"10:00","title":""}"#))
            .expect("event");
        assert_eq!(event.title(), "Untitled");
    }

    #[test]
    fn null_day_fields_count_as_undeclared() {
        let event = Event::from_record(&record(
            r#"{"start":"09:00","end":"10:00","day":null,"days":null,"weekdays":null}"#,
        ))
        .expect("event");
        assert!(event.days().matches(Weekday::Sun));
        assert!(event.days().matches(Weekday::Thu));
    }

    #[test]
    fn invalid_times_are_reported_per_field() {
        let err = Event::from_record(&record(r#"{"start":"soon","end":"10:00"}"#)).unwrap_err();
        assert_eq!(
            err,
            EventError::Start { source: MinuteParseError::Malformed { raw: "soon".to_owned() } }
        );

        let err = Event::from_record(&record(r#"{"start":"09:00","end":"99:00"}"#)).unwrap_err();
        assert!(matches!(err, EventError::End { .. }));
    }

    #[test]
    fn record_requires_start_and_end() {
        assert!(serde_json::from_str::<EventRecord>(r#"{"title":"x","start":"09:00"}"#).is_err());
    }
}
