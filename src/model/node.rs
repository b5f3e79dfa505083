// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stepgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stepgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::step::Step;

/// Execution state of a node, as reported by the scheduler.
///
/// On the wire this is the scheduler's integer code. Codes outside the known range are kept as
/// [`NodeStatus::Unknown`] instead of being rejected, so a newer scheduler never breaks the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum NodeStatus {
    #[default]
    None,
    Running,
    Error,
    Cancel,
    Success,
    Skipped,
    Unknown(i64),
}

impl NodeStatus {
    pub const ALL: [NodeStatus; 6] = [
        Self::None,
        Self::Running,
        Self::Error,
        Self::Cancel,
        Self::Success,
        Self::Skipped,
    ];

    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Self::None,
            1 => Self::Running,
            2 => Self::Error,
            3 => Self::Cancel,
            4 => Self::Success,
            5 => Self::Skipped,
            other => Self::Unknown(other),
        }
    }

    pub fn code(self) -> i64 {
        match self {
            Self::None => 0,
            Self::Running => 1,
            Self::Error => 2,
            Self::Cancel => 3,
            Self::Success => 4,
            Self::Skipped => 5,
            Self::Unknown(code) => code,
        }
    }

    pub fn is_known(self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl From<i64> for NodeStatus {
    fn from(code: i64) -> Self {
        Self::from_code(code)
    }
}

impl From<NodeStatus> for i64 {
    fn from(status: NodeStatus) -> Self {
        status.code()
    }
}

/// A step paired with its runtime state in one workflow run.
///
/// Other fields of the scheduler's node payload (logs, timings, counters) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Node {
    pub step: Step,
    #[serde(default)]
    pub status: NodeStatus,
}

impl Node {
    pub fn new(step: Step, status: NodeStatus) -> Self {
        Self { step, status }
    }

    pub fn name(&self) -> &str {
        &self.step.name
    }
}
