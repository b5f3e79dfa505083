// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stepgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stepgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Reading graph input from scheduler JSON.
//!
//! Accepted shapes, per mode:
//! - a bare array of steps (`config`) or nodes (`status`),
//! - an object carrying them under `Steps` or `Nodes`, as in the scheduler's DAG and status
//!   payloads. Other fields of the object are ignored.

use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::model::{GraphInput, GraphMode, Node, Step};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid {mode} graph input in {path}: {source}")]
    Json {
        path: PathBuf,
        mode: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Deserialize)]
struct StepsPayload {
    #[serde(rename = "Steps", default)]
    steps: Option<Vec<Step>>,
}

#[derive(Deserialize)]
struct NodesPayload {
    #[serde(rename = "Nodes", default)]
    nodes: Option<Vec<Node>>,
}

/// Bare arrays and wrapper objects are told apart by their first token, so a malformed item
/// reports its own field error instead of a failed shape match.
fn is_bare_array(json: &str) -> bool {
    json.trim_start().starts_with('[')
}

/// Parse `json` as graph input of the given mode.
///
/// A wrapped payload whose list is missing or `null` is absent input (`None`), which draws
/// nothing; an explicit empty list is present but empty.
pub fn parse_graph_input(json: &str, mode: GraphMode) -> Result<Option<GraphInput>, serde_json::Error> {
    let bare = is_bare_array(json);
    let input = match mode {
        GraphMode::Config => {
            let steps = if bare {
                Some(serde_json::from_str::<Vec<Step>>(json)?)
            } else {
                serde_json::from_str::<StepsPayload>(json)?.steps
            };
            steps.map(GraphInput::Config)
        }
        GraphMode::Status => {
            let nodes = if bare {
                Some(serde_json::from_str::<Vec<Node>>(json)?)
            } else {
                serde_json::from_str::<NodesPayload>(json)?.nodes
            };
            nodes.map(GraphInput::Status)
        }
    };
    Ok(input)
}

/// Load graph input from a file, or from stdin when `path` is `-`.
pub fn load_graph_input(path: &Path, mode: GraphMode) -> Result<Option<GraphInput>, LoadError> {
    let io_err = |source| LoadError::Io {
        path: path.to_owned(),
        source,
    };
    let json = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map_err(io_err)?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(io_err)?
    };

    let input = parse_graph_input(&json, mode).map_err(|source| LoadError::Json {
        path: path.to_owned(),
        mode: mode.as_str(),
        source,
    })?;
    debug!(
        path = %path.display(),
        mode = mode.as_str(),
        items = input.as_ref().map(GraphInput::len),
        "loaded graph input"
    );
    Ok(input)
}
