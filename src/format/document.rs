// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Skema-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Skema and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The schedule input document: `settings`, `palette` and `events`.
//!
//! Parsing is deliberately forgiving below the top level. A malformed setting falls back to its
//! default and a malformed event record is skipped; neither aborts the document.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::model::{Event, EventRecord};

pub const DEFAULT_START_HOUR: u8 = 6;
pub const DEFAULT_END_HOUR: u8 = 23;
pub const DEFAULT_TITLE: &str = "Today's Schedule";
pub const DEFAULT_LOGO_ALT: &str = "Logo";
pub const DEFAULT_EVENT_COLOR: &str = "#3b82f6";

/// Board settings as written in the document. Every field is optional and individually lenient.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// First visible hour, `0..=23`. Defaults to 6.
    #[serde(default, deserialize_with = "lenient")]
    #[schemars(with = "Option<u8>")]
    pub start_hour: Option<i64>,
    /// Hour the board ends at, `1..=24`. Defaults to 23.
    #[serde(default, deserialize_with = "lenient")]
    #[schemars(with = "Option<u8>")]
    pub end_hour: Option<i64>,
    /// `"today"` or an explicit `YYYY-MM-DD` date.
    #[serde(default, deserialize_with = "lenient")]
    #[schemars(with = "Option<String>")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    #[schemars(with = "Option<String>")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    #[schemars(with = "Option<bool>")]
    pub show_now_line: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    #[schemars(with = "Option<String>")]
    pub logo_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    #[schemars(with = "Option<String>")]
    pub logo_alt: Option<String>,
    /// Accepted for compatibility with browser boards; terminals ignore it.
    #[serde(default, deserialize_with = "lenient")]
    #[schemars(with = "Option<f64>")]
    pub logo_height: Option<f64>,
}

impl Settings {
    /// Visible `(start_hour, end_hour)`.
    ///
    /// Out-of-range hours fall back to their defaults; a window that would be empty or inverted
    /// is clamped to a single hour.
    pub fn hours(&self) -> (u8, u8) {
        let start =
            hour_in_range(self.start_hour, 0..=23, "startHour").unwrap_or(DEFAULT_START_HOUR);
        let end = hour_in_range(self.end_hour, 1..=24, "endHour").unwrap_or(DEFAULT_END_HOUR);
        if end <= start {
            tracing::warn!(start, end, "endHour must be after startHour; showing a single hour");
            return (start, start + 1);
        }
        (start, end)
    }

    /// The day the board shows: `today` unless the document pins an explicit date.
    pub fn reference_date(&self, today: NaiveDate) -> NaiveDate {
        match self.date.as_deref().map(str::trim) {
            None | Some("") | Some("today") => today,
            Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap_or_else(|err| {
                tracing::warn!(date = raw, %err, "invalid settings.date; using today");
                today
            }),
        }
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().filter(|title| !title.is_empty()).unwrap_or(DEFAULT_TITLE)
    }

    pub fn show_now_line(&self) -> bool {
        self.show_now_line.unwrap_or(false)
    }

    /// Header brand text shown in place of the title when a logo is configured.
    pub fn brand(&self) -> Option<&str> {
        self.logo_url.as_deref().filter(|url| !url.is_empty())?;
        Some(
            self.logo_alt
                .as_deref()
                .filter(|alt| !alt.is_empty())
                .or_else(|| self.title.as_deref().filter(|title| !title.is_empty()))
                .unwrap_or(DEFAULT_LOGO_ALT),
        )
    }
}

fn hour_in_range(
    value: Option<i64>,
    range: std::ops::RangeInclusive<i64>,
    name: &'static str,
) -> Option<u8> {
    let value = value?;
    if !range.contains(&value) {
        tracing::warn!(setting = name, value, "hour out of range; using default");
        return None;
    }
    u8::try_from(value).ok()
}

/// Event type name to colour, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<(String, String)>,
}

impl Palette {
    pub fn new(entries: Vec<(String, String)>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, kind: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == kind)
            .map(|(_, color)| color.as_str())
    }

    /// Colour for an event of `kind`, falling back to [`DEFAULT_EVENT_COLOR`].
    pub fn color_for(&self, kind: Option<&str>) -> &str {
        kind.and_then(|kind| self.get(kind)).unwrap_or(DEFAULT_EVENT_COLOR)
    }
}

/// An event record that could not be ingested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEvent {
    pub index: usize,
    pub reason: String,
}

/// A parsed schedule document.
///
/// `events` keeps document order; `skipped` lists the records that were rejected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleDocument {
    pub settings: Settings,
    pub palette: Palette,
    pub events: Vec<Event>,
    pub skipped: Vec<SkippedEvent>,
}

/// Top-level shape of the input document, used for decoding and for the published JSON Schema.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct DocumentRecord {
    #[serde(default, deserialize_with = "lenient")]
    #[schemars(with = "Option<Settings>")]
    pub settings: Option<Settings>,
    /// Event type name to colour (any CSS-style `#RRGGBB` string).
    #[serde(default, deserialize_with = "lenient")]
    #[schemars(with = "Option<BTreeMap<String, String>>")]
    pub palette: Option<serde_json::Map<String, Value>>,
    #[serde(default, deserialize_with = "lenient")]
    #[schemars(with = "Option<Vec<EventRecord>>")]
    pub events: Option<Vec<Value>>,
}

#[derive(Debug)]
pub enum DocumentError {
    Json { source: serde_json::Error },
    /// The top-level JSON value is an array, string, number, boolean or null.
    NotAnObject { found: &'static str },
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json { source } => write!(f, "invalid schedule document: {source}"),
            Self::NotAnObject { found } => {
                write!(f, "invalid schedule document: expected a JSON object, found {found}")
            }
        }
    }
}

impl std::error::Error for DocumentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json { source } => Some(source),
            Self::NotAnObject { .. } => None,
        }
    }
}

/// Parses a schedule document from JSON text.
///
/// Only text that is not a JSON object at the top level is an error.
pub fn parse_document(text: &str) -> Result<ScheduleDocument, DocumentError> {
    let value: Value =
        serde_json::from_str(text).map_err(|source| DocumentError::Json { source })?;
    let found = match &value {
        Value::Object(_) => None,
        Value::Array(_) => Some("an array"),
        Value::String(_) => Some("a string"),
        Value::Number(_) => Some("a number"),
        Value::Bool(_) => Some("a boolean"),
        Value::Null => Some("null"),
    };
    if let Some(found) = found {
        return Err(DocumentError::NotAnObject { found });
    }
    let record: DocumentRecord =
        serde_json::from_value(value).map_err(|source| DocumentError::Json { source })?;
    Ok(document_from_record(record))
}

fn document_from_record(record: DocumentRecord) -> ScheduleDocument {
    let palette = record
        .palette
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(name, color)| match color {
            Value::String(color) => Some((name, color)),
            other => {
                tracing::warn!(kind = %name, value = %other, "ignoring non-string palette colour");
                None
            }
        })
        .collect::<Vec<_>>();

    let mut events = Vec::new();
    let mut skipped = Vec::new();
    for (index, raw) in record.events.unwrap_or_default().into_iter().enumerate() {
        let ingested = serde_json::from_value::<EventRecord>(raw)
            .map_err(|err| err.to_string())
            .and_then(|event| Event::from_record(&event).map_err(|err| err.to_string()));
        match ingested {
            Ok(event) => events.push(event),
            Err(reason) => {
                tracing::warn!(index, %reason, "skipping malformed event");
                skipped.push(SkippedEvent { index, reason });
            }
        }
    }

    ScheduleDocument {
        settings: record.settings.unwrap_or_default(),
        palette: Palette::new(palette),
        events,
        skipped,
    }
}

/// JSON Schema describing the input document.
pub fn document_schema() -> schemars::Schema {
    schemars::schema_for!(DocumentRecord)
}

/// Deserializes an optional value, treating a type mismatch as absent instead of failing.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }

    match serde_json::from_value::<T>(value.clone()) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(err) => {
            tracing::warn!(%value, %err, "ignoring malformed document field");
            Ok(None)
        }
    }
}
