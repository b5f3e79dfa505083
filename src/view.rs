// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stepgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stepgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! A graph component: inputs in, memoized definition and style out to a renderer.

use std::sync::Arc;

use tracing::trace;

use crate::click::{ClickHandler, ClickRegistry};
use crate::format::mermaid::{translate, ClickBinding};
use crate::model::{DiagramId, GraphInput};
use crate::style::{compute_style, GraphStyle};

/// Draws a Mermaid definition. Implemented by whatever hosts the diagram widget.
pub trait DiagramRenderer {
    fn render(&mut self, style: &GraphStyle, definition: &str);
}

struct Memo {
    input: Option<Arc<GraphInput>>,
    on_click: Option<ClickHandler>,
    definition: String,
}

/// One diagram instance.
///
/// The definition is recomputed only when the input or the click handler is replaced by a
/// different `Arc`; replacing either with a clone of the same `Arc` keeps the cached string.
/// Each recomputation with a handler re-registers it under this view's [`DiagramId`].
pub struct GraphView {
    diagram_id: DiagramId,
    registry: Arc<ClickRegistry>,
    input: Option<Arc<GraphInput>>,
    on_click: Option<ClickHandler>,
    memo: Option<Memo>,
    recomputations: u64,
}

fn same_arc<T: ?Sized>(a: &Option<Arc<T>>, b: &Option<Arc<T>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => std::ptr::eq(Arc::as_ptr(a).cast::<()>(), Arc::as_ptr(b).cast::<()>()),
        _ => false,
    }
}

impl GraphView {
    pub fn new(diagram_id: DiagramId, registry: Arc<ClickRegistry>) -> Self {
        Self {
            diagram_id,
            registry,
            input: None,
            on_click: None,
            memo: None,
            recomputations: 0,
        }
    }

    pub fn diagram_id(&self) -> &DiagramId {
        &self.diagram_id
    }

    pub fn input(&self) -> Option<&GraphInput> {
        self.input.as_deref()
    }

    pub fn set_input(&mut self, input: Option<Arc<GraphInput>>) {
        self.input = input;
    }

    pub fn set_on_click(&mut self, on_click: Option<ClickHandler>) {
        self.on_click = on_click;
    }

    /// Number of times the definition has been translated.
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    pub fn definition(&mut self) -> &str {
        let stale = match &self.memo {
            Some(memo) => {
                !same_arc(&memo.input, &self.input) || !same_arc(&memo.on_click, &self.on_click)
            }
            None => true,
        };

        if stale {
            let binding = self
                .on_click
                .clone()
                .map(|handler| ClickBinding::new(&self.registry, &self.diagram_id, handler));
            let definition = translate(self.input.as_deref(), binding);
            self.recomputations = self.recomputations.wrapping_add(1);
            trace!(diagram = %self.diagram_id, rev = self.recomputations, "recomputed definition");
            self.memo = Some(Memo {
                input: self.input.clone(),
                on_click: self.on_click.clone(),
                definition,
            });
        }

        self.memo.as_ref().map_or("", |memo| memo.definition.as_str())
    }

    pub fn style(&self) -> GraphStyle {
        compute_style(self.input.as_ref().map(|input| input.len()))
    }

    pub fn render(&mut self, renderer: &mut dyn DiagramRenderer) {
        let style = self.style();
        let definition = self.definition();
        renderer.render(&style, definition);
    }

    /// Forward a click on node `ident` to this diagram's handler.
    pub fn click(&self, ident: &str) -> bool {
        self.registry.dispatch(&self.diagram_id, ident)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::{DiagramRenderer, GraphView};
    use crate::click::{ClickHandler, ClickRegistry};
    use crate::model::fixtures;
    use crate::model::{DiagramId, GraphInput, Node, NodeStatus, Step};
    use crate::style::GraphStyle;

    #[derive(Default)]
    struct CaptureRenderer {
        frames: Vec<(GraphStyle, String)>,
    }

    impl DiagramRenderer for CaptureRenderer {
        fn render(&mut self, style: &GraphStyle, definition: &str) {
            self.frames.push((style.clone(), definition.to_owned()));
        }
    }

    fn view(id: &str, registry: &Arc<ClickRegistry>) -> GraphView {
        GraphView::new(DiagramId::new(id).unwrap(), registry.clone())
    }

    fn handler(log: &Arc<Mutex<Vec<String>>>, tag: &'static str) -> ClickHandler {
        let log = log.clone();
        Arc::new(move |name: &str| log.lock().unwrap().push(format!("{tag}:{name}")))
    }

    #[test]
    fn unchanged_inputs_reuse_the_cached_definition() {
        let registry = Arc::new(ClickRegistry::new());
        let mut graph = view("g", &registry);
        let input = Arc::new(fixtures::config_fetch_process());

        graph.set_input(Some(input.clone()));
        let first = graph.definition().to_owned();
        graph.set_input(Some(input));
        let second = graph.definition().to_owned();

        assert_eq!(first, second);
        assert_eq!(graph.recomputations(), 1);
    }

    #[test]
    fn new_input_reference_recomputes_even_when_equal() {
        let registry = Arc::new(ClickRegistry::new());
        let mut graph = view("g", &registry);

        graph.set_input(Some(Arc::new(fixtures::config_fetch_process())));
        let first = graph.definition().to_owned();
        graph.set_input(Some(Arc::new(fixtures::config_fetch_process())));
        let second = graph.definition().to_owned();

        assert_eq!(first, second);
        assert_eq!(graph.recomputations(), 2);
    }

    #[test]
    fn new_handler_recomputes_and_reregisters() {
        let registry = Arc::new(ClickRegistry::new());
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut graph = view("g", &registry);
        graph.set_input(Some(Arc::new(fixtures::config_diamond())));

        graph.set_on_click(Some(handler(&log, "first")));
        let with_click = graph.definition().to_owned();
        graph.set_on_click(Some(handler(&log, "second")));
        assert_eq!(graph.definition(), with_click);
        assert_eq!(graph.recomputations(), 2);

        assert!(graph.click("check_out"));
        assert_eq!(*log.lock().unwrap(), vec!["second:check out".to_owned()]);

        graph.set_on_click(None);
        assert!(!graph.definition().contains("click "));
    }

    #[test]
    fn views_on_one_registry_keep_their_handlers() {
        let registry = Arc::new(ClickRegistry::new());
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut left = view("left", &registry);
        let mut right = view("right", &registry);

        let input = Arc::new(GraphInput::Status(vec![Node::new(
            Step::new("shared step"),
            NodeStatus::Running,
        )]));
        left.set_input(Some(input.clone()));
        right.set_input(Some(input));
        left.set_on_click(Some(handler(&log, "left")));
        right.set_on_click(Some(handler(&log, "right")));
        left.definition();
        right.definition();

        assert!(left.click("shared_step"));
        assert!(right.click("shared_step"));
        assert_eq!(
            *log.lock().unwrap(),
            vec!["left:shared step".to_owned(), "right:shared step".to_owned()]
        );
    }

    #[test]
    fn render_hands_style_and_definition_to_renderer() {
        let registry = Arc::new(ClickRegistry::new());
        let mut graph = view("g", &registry);
        let mut renderer = CaptureRenderer::default();

        graph.render(&mut renderer);
        graph.set_input(Some(Arc::new(fixtures::config_chain(3))));
        graph.render(&mut renderer);

        assert_eq!(renderer.frames.len(), 2);
        assert_eq!(renderer.frames[0].0.width, "100%");
        assert_eq!(renderer.frames[0].1, "");
        assert_eq!(renderer.frames[1].0.width, "720px");
        assert!(renderer.frames[1].1.starts_with("flowchart LR;\nstep_0(step 0);\n"));
        assert!(renderer.frames[1].1.contains("\nstep_1-->step_2;\n"));
    }
}
