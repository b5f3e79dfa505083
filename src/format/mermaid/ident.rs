// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stepgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stepgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Whitespace as the renderer's scripting side defines it: Unicode `White_Space` plus the byte
/// order mark, minus NEL (U+0085).
fn is_ident_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

/// Mermaid node identifier for a step name: every whitespace character becomes `_`.
///
/// No other escaping is applied, and names that differ only in their whitespace map to the same
/// identifier (`"a b"` and `"a\tb"` are both `a_b`).
pub fn node_ident(name: &str) -> String {
    name.chars()
        .map(|c| if is_ident_whitespace(c) { '_' } else { c })
        .collect()
}
