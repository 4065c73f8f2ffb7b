// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Skema-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Skema and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Skema: a terminal kiosk board for one day of scheduled events.
//!
//! A JSON schedule document is filtered to the reference day, clipped to the visible window,
//! split into conflict groups, packed into lanes and projected onto a character-cell board.

pub mod format;
pub mod layout;
pub mod model;
pub mod pass;
pub mod render;
pub mod store;
pub mod tui;
