// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stepgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stepgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mermaid flowchart export for workflow graphs.

pub mod graph;
mod ident;

pub use graph::{export_graph, status_class, translate, ClickBinding, CLASS_DEFS};
pub use ident::node_ident;
