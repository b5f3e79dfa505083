// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stepgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stepgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Stepgraph — Mermaid flowcharts for workflow steps and runs.
//!
//! A workflow's steps (or the nodes of one run) are translated into a Mermaid `flowchart`
//! definition: one node per step, one edge per dependency, status classes for run nodes and
//! optional `click` statements routed through a [`click::ClickRegistry`].

pub mod click;
pub mod format;
pub mod load;
pub mod model;
pub mod style;
pub mod view;

pub use click::{ClickHandler, ClickRegistry, CLICK_HANDLER_NAME};
pub use format::mermaid::{export_graph, translate, ClickBinding};
pub use model::{DiagramId, GraphInput, GraphMode, Node, NodeStatus, Step};
pub use style::{compute_style, GraphStyle};
pub use view::{DiagramRenderer, GraphView};
