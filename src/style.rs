// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stepgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stepgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Container style for a rendered graph.

use serde::Serialize;

/// Horizontal space reserved per item.
pub const ITEM_WIDTH_PX: usize = 240;

/// Layout attributes handed to the renderer alongside the definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphStyle {
    pub display: &'static str,
    pub align_items: &'static str,
    pub justify_content: &'static str,
    pub width: String,
    pub min_width: &'static str,
    pub min_height: &'static str,
}

/// Style for a graph of `item_count` items.
///
/// A present count, zero included, sizes the width to `count * ITEM_WIDTH_PX` pixels; an absent
/// input spans the full width.
pub fn compute_style(item_count: Option<usize>) -> GraphStyle {
    let width = match item_count {
        Some(count) => format!("{}px", count.saturating_mul(ITEM_WIDTH_PX)),
        None => "100%".to_owned(),
    };
    GraphStyle {
        display: "flex",
        align_items: "flex-center",
        justify_content: "flex-start",
        width,
        min_width: "100%",
        min_height: "200px",
    }
}
