// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Skema-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Skema and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Schedule document sources.
//!
//! The board treats its source as read-only input and re-reads it on every render pass.

pub mod source;

pub use source::{load_document, DocumentSource, FileSource, SourceError, StaticSource};
