// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Skema-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Skema and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::format::{parse_document, DocumentError, ScheduleDocument};

const DEMO_DOCUMENT: &str = include_str!("demo.json");

/// Where schedule documents come from. Every render pass reads the source afresh.
pub trait DocumentSource {
    /// Human-readable origin, used in logs and error messages.
    fn describe(&self) -> String;

    fn read(&self) -> Result<String, SourceError>;
}

/// A document file on disk, re-read on every pass so edits show up on the next refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DocumentSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read(&self) -> Result<String, SourceError> {
        fs::read_to_string(&self.path)
            .map_err(|source| SourceError::Io { path: self.path.clone(), source })
    }
}

/// A fixed in-memory document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticSource {
    name: String,
    text: String,
}

impl StaticSource {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self { name: name.into(), text: text.into() }
    }

    /// The bundled demo schedule.
    pub fn demo() -> Self {
        Self::new("demo", DEMO_DOCUMENT)
    }
}

impl DocumentSource for StaticSource {
    fn describe(&self) -> String {
        self.name.clone()
    }

    fn read(&self) -> Result<String, SourceError> {
        Ok(self.text.clone())
    }
}

#[derive(Debug)]
pub enum SourceError {
    Io { path: PathBuf, source: io::Error },
    Document { origin: String, source: DocumentError },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            Self::Document { origin, source } => write!(f, "{origin}: {source}"),
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Document { source, .. } => Some(source),
        }
    }
}

/// Reads and parses the current document from `source`.
pub fn load_document(source: &dyn DocumentSource) -> Result<ScheduleDocument, SourceError> {
    let text = source.read()?;
    let document = parse_document(&text).map_err(|err| SourceError::Document {
        origin: source.describe(),
        source: err,
    })?;
    if !document.skipped.is_empty() {
        tracing::warn!(
            origin = %source.describe(),
            skipped = document.skipped.len(),
            "some events were skipped"
        );
    }
    tracing::debug!(origin = %source.describe(), events = document.events.len(), "loaded document");
    Ok(document)
}
