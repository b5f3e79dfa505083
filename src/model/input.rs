// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stepgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stepgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::node::{Node, NodeStatus};
use super::step::Step;

/// Which shape of input a graph is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphMode {
    /// Static step definitions, drawn without status styling.
    Config,
    /// Runtime nodes, styled by their execution status.
    Status,
}

impl GraphMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Config => "config",
            Self::Status => "status",
        }
    }
}

/// Items to draw, tagged by their shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphInput {
    Config(Vec<Step>),
    Status(Vec<Node>),
}

impl GraphInput {
    pub fn mode(&self) -> GraphMode {
        match self {
            Self::Config(_) => GraphMode::Config,
            Self::Status(_) => GraphMode::Status,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Config(steps) => steps.len(),
            Self::Status(nodes) => nodes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Each item's step and, for status input, its status.
    pub fn entries(&self) -> Box<dyn Iterator<Item = (&Step, Option<NodeStatus>)> + '_> {
        match self {
            Self::Config(steps) => Box::new(steps.iter().map(|step| (step, None))),
            Self::Status(nodes) => Box::new(nodes.iter().map(|node| (&node.step, Some(node.status)))),
        }
    }
}
