// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Skema-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Skema and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Input document parsing.
//!
//! The board is driven by a single JSON document holding settings, a type palette and events.

pub mod document;

pub use document::{
    document_schema, parse_document, DocumentError, DocumentRecord, Palette, ScheduleDocument,
    Settings, SkippedEvent, DEFAULT_EVENT_COLOR, DEFAULT_TITLE,
};
