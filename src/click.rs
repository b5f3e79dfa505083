// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stepgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stepgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Click routing from rendered diagram nodes back to application code.
//!
//! Every `click` statement in a definition names [`CLICK_HANDLER_NAME`]. The renderer resolves
//! that name against a [`ClickRegistry`] scoped by [`DiagramId`], so two graphs on the same
//! surface keep their own handlers. Within one diagram the latest registration wins.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, warn};

use crate::format::mermaid::node_ident;
use crate::model::DiagramId;

/// Callback name written into every `click` statement.
pub const CLICK_HANDLER_NAME: &str = "onClickMermaidNode";

/// Receives the original step name of a clicked node.
pub type ClickHandler = Arc<dyn Fn(&str) + Send + Sync>;

#[derive(Default)]
struct ClickEntry {
    handler: Option<ClickHandler>,
    names: BTreeMap<String, String>,
}

#[derive(Default)]
pub struct ClickRegistry {
    entries: Mutex<BTreeMap<DiagramId, ClickEntry>>,
}

impl std::fmt::Debug for ClickRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let entries = self.lock();
        f.debug_struct("ClickRegistry")
            .field("diagrams", &entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl ClickRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<DiagramId, ClickEntry>> {
        // Handlers never run under this lock, so a poisoned map is still consistent.
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Store `handler` for `diagram_id`, replacing any previous one. There is no unregister.
    pub fn register(&self, diagram_id: &DiagramId, handler: ClickHandler) {
        let mut entries = self.lock();
        let entry = entries.entry(diagram_id.clone()).or_default();
        let replaced = entry.handler.replace(handler).is_some();
        debug!(diagram = %diagram_id, replaced, "registered click handler");
    }

    /// Record which step names the identifiers of `diagram_id`'s latest definition stand for.
    ///
    /// Names that collapse to the same identifier are not disambiguated: the first one keeps the
    /// identifier and the collision is logged.
    pub fn bind_nodes<'n>(&self, diagram_id: &DiagramId, names: impl IntoIterator<Item = &'n str>) {
        let mut bound = BTreeMap::<String, String>::new();
        for name in names {
            let ident = node_ident(name);
            match bound.get(&ident) {
                Some(existing) if existing != name => {
                    warn!(
                        diagram = %diagram_id,
                        ident = %ident,
                        kept = %existing,
                        dropped = %name,
                        "step names share a node identifier"
                    );
                }
                Some(_) => {}
                None => {
                    bound.insert(ident, name.to_owned());
                }
            }
        }

        let mut entries = self.lock();
        entries.entry(diagram_id.clone()).or_default().names = bound;
    }

    pub fn handler(&self, diagram_id: &DiagramId) -> Option<ClickHandler> {
        self.lock().get(diagram_id).and_then(|entry| entry.handler.clone())
    }

    /// Step name bound to `ident` in `diagram_id`'s latest definition.
    pub fn resolve(&self, diagram_id: &DiagramId, ident: &str) -> Option<String> {
        self.lock()
            .get(diagram_id)
            .and_then(|entry| entry.names.get(ident).cloned())
    }

    /// Route a click on node `ident` to `diagram_id`'s handler with the node's step name.
    ///
    /// Returns `false` when the diagram has no handler or the identifier is not part of its
    /// latest definition.
    pub fn dispatch(&self, diagram_id: &DiagramId, ident: &str) -> bool {
        let target = {
            let entries = self.lock();
            entries.get(diagram_id).and_then(|entry| {
                let handler = entry.handler.clone()?;
                let name = entry.names.get(ident)?.clone();
                Some((handler, name))
            })
        };

        let Some((handler, name)) = target else {
            debug!(diagram = %diagram_id, ident, "click without a bound handler");
            return false;
        };
        debug!(diagram = %diagram_id, ident, name = %name, "dispatching node click");
        handler(&name);
        true
    }
}
