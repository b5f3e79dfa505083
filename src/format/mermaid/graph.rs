// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stepgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stepgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use tracing::{debug, trace};

use super::ident::node_ident;
use crate::click::{ClickHandler, ClickRegistry, CLICK_HANDLER_NAME};
use crate::model::{DiagramId, GraphInput, NodeStatus};

const FLOWCHART_HEADER: &str = "flowchart LR;";

/// Class definitions appended to every non-empty graph, as `(class, stroke color)`.
///
/// Every class shares a white fill and a 2px stroke.
pub const CLASS_DEFS: [(&str, &str); 6] = [
    ("none", "lightblue"),
    ("running", "lime"),
    ("error", "red"),
    ("cancel", "pink"),
    ("done", "green"),
    ("skipped", "gray"),
];

/// Mermaid class for a node status, or `None` for codes the table does not cover.
pub fn status_class(status: NodeStatus) -> Option<&'static str> {
    match status {
        NodeStatus::None => Some("none"),
        NodeStatus::Running => Some("running"),
        NodeStatus::Error => Some("error"),
        NodeStatus::Cancel => Some("cancel"),
        NodeStatus::Success => Some("done"),
        NodeStatus::Skipped => Some("skipped"),
        NodeStatus::Unknown(_) => None,
    }
}

/// Where a translated graph's click statements route to.
pub struct ClickBinding<'a> {
    registry: &'a ClickRegistry,
    diagram_id: &'a DiagramId,
    handler: ClickHandler,
}

impl<'a> ClickBinding<'a> {
    pub fn new(registry: &'a ClickRegistry, diagram_id: &'a DiagramId, handler: ClickHandler) -> Self {
        Self {
            registry,
            diagram_id,
            handler,
        }
    }
}

/// Export a workflow graph to a Mermaid flowchart definition.
///
/// Absent or empty input yields an empty string. Otherwise the output is, line by line:
/// - the `flowchart LR;` header,
/// - per item in input order: its node statement, one edge per dependency, and a `click`
///   statement when `clickable`,
/// - the six [`CLASS_DEFS`].
///
/// Only status input carries a `:::class` suffix. Dependencies are not checked against the
/// declared steps; unknown names become implicit nodes in the renderer.
pub fn export_graph(input: Option<&GraphInput>, clickable: bool) -> String {
    let Some(input) = input.filter(|input| !input.is_empty()) else {
        return String::new();
    };

    let mut out = String::new();
    out.push_str(FLOWCHART_HEADER);
    out.push('\n');

    for (step, status) in input.entries() {
        let id = node_ident(&step.name);

        out.push_str(&id);
        out.push('(');
        out.push_str(&step.name);
        out.push(')');
        if let Some(class) = status.and_then(status_class) {
            out.push_str(":::");
            out.push_str(class);
        }
        out.push_str(";\n");

        for dep in &step.depends {
            out.push_str(&node_ident(dep));
            out.push_str("-->");
            out.push_str(&id);
            out.push_str(";\n");
        }

        if clickable {
            out.push_str("click ");
            out.push_str(&id);
            out.push(' ');
            out.push_str(CLICK_HANDLER_NAME);
            out.push('\n');
        }
    }

    for (class, stroke) in CLASS_DEFS {
        out.push_str("classDef ");
        out.push_str(class);
        out.push_str(" fill:white,stroke:");
        out.push_str(stroke);
        out.push_str(",stroke-width:2px\n");
    }
    out.pop();

    trace!(mode = input.mode().as_str(), bytes = out.len(), "exported graph");
    out
}

/// Translate a workflow graph, registering its click handler first.
///
/// With a binding, the handler is stored in the registry for the binding's diagram before the
/// definition exists, and the node identifiers of this graph are recorded so clicks resolve
/// back to step names. Empty input registers nothing.
pub fn translate(input: Option<&GraphInput>, click: Option<ClickBinding<'_>>) -> String {
    let Some(input) = input.filter(|input| !input.is_empty()) else {
        return String::new();
    };

    let clickable = click.is_some();
    if let Some(binding) = click {
        binding.registry.register(binding.diagram_id, binding.handler);
        binding.registry.bind_nodes(
            binding.diagram_id,
            input.entries().map(|(step, _)| step.name.as_str()),
        );
    }

    debug!(
        mode = input.mode().as_str(),
        items = input.len(),
        clickable,
        "translating workflow graph"
    );
    export_graph(Some(input), clickable)
}
