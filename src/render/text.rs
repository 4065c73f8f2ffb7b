// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Skema-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Skema and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

pub(crate) fn text_len(text: &str) -> usize {
    text.chars().count()
}

pub(crate) fn truncate_with_ellipsis(text: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }
    if text_len(text) <= max_len {
        return text.to_owned();
    }
    if max_len == 1 {
        return "…".to_owned();
    }

    let mut out = text.chars().take(max_len - 1).collect::<String>();
    out.push('…');
    out
}

/// Packs items left to right into rows of at most `width` cells, `gap` cells apart.
///
/// Returns `(row, column)` for each item. An item wider than a row gets a row of its own.
pub(crate) fn flow_positions(lens: &[usize], width: usize, gap: usize) -> Vec<(usize, usize)> {
    let mut positions = Vec::with_capacity(lens.len());
    let (mut row, mut col) = (0usize, 0usize);
    for &len in lens {
        if col > 0 && col + gap + len > width {
            row += 1;
            col = 0;
        }
        let at = if col == 0 { 0 } else { col + gap };
        positions.push((row, at));
        col = at + len;
    }
    positions
}
