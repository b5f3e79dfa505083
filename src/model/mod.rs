// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stepgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stepgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Workflow data model.
//!
//! Steps are static definitions; nodes pair a step with its runtime status. A [`GraphInput`]
//! tags which of the two a graph is drawn from.

#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod input;
pub mod node;
pub mod step;

pub use ids::{DiagramId, IdError};
pub use input::{GraphInput, GraphMode};
pub use node::{Node, NodeStatus};
pub use step::{Condition, ContinueOn, RetryPolicy, Step};
