// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stepgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stepgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::input::GraphInput;
use super::node::{Node, NodeStatus};
use super::step::Step;

/// `Fetch -> Process`, the smallest pipeline with an edge.
pub(crate) fn config_fetch_process() -> GraphInput {
    GraphInput::Config(vec![
        Step::new("Fetch"),
        Step::new("Process").with_depends(["Fetch"]),
    ])
}

/// A diamond with a whitespace-named root, so identifiers differ from labels.
pub(crate) fn config_diamond() -> GraphInput {
    GraphInput::Config(vec![
        Step::new("check out").with_command("git clone"),
        Step::new("lint").with_depends(["check out"]),
        Step::new("unit tests").with_depends(["check out"]),
        Step::new("package").with_depends(["lint", "unit tests"]),
    ])
}

/// One node in every known status plus one the scheduler does not define yet.
pub(crate) fn status_every_kind() -> GraphInput {
    let mut nodes = NodeStatus::ALL
        .iter()
        .enumerate()
        .map(|(idx, status)| Node::new(Step::new(format!("step {idx}")), *status))
        .collect::<Vec<_>>();
    nodes.push(Node::new(Step::new("future"), NodeStatus::Unknown(17)));
    GraphInput::Status(nodes)
}

/// A long linear chain; used to size-test style output and translation.
pub(crate) fn config_chain(len: usize) -> GraphInput {
    GraphInput::Config(
        (0..len)
            .map(|idx| {
                let step = Step::new(format!("step {idx}"));
                if idx == 0 {
                    step
                } else {
                    step.with_depends([format!("step {}", idx - 1)])
                }
            })
            .collect(),
    )
}
