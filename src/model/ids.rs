// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stepgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stepgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// Identifies one rendered diagram instance.
///
/// Click handlers are registered per diagram, so two graphs on the same surface need distinct
/// ids. The id is never written into the Mermaid source; it only has to be a non-empty token
/// without whitespace so hosts can reuse it as an element id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DiagramId {
    value: String,
}

impl DiagramId {
    pub fn new(value: impl Into<String>) -> Result<Self, IdError> {
        let value = value.into();
        validate_diagram_id(&value)?;
        Ok(Self { value })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl fmt::Display for DiagramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for DiagramId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for DiagramId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for DiagramId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_owned())
    }
}

impl TryFrom<String> for DiagramId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    Empty,
    ContainsWhitespace,
}

impl fmt::Display for IdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("diagram id must not be empty"),
            Self::ContainsWhitespace => f.write_str("diagram id must not contain whitespace"),
        }
    }
}

impl std::error::Error for IdError {}

fn validate_diagram_id(value: &str) -> Result<(), IdError> {
    if value.is_empty() {
        return Err(IdError::Empty);
    }
    if value.chars().any(char::is_whitespace) {
        return Err(IdError::ContainsWhitespace);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{DiagramId, IdError};

    #[test]
    fn diagram_id_rejects_empty() {
        assert_eq!(DiagramId::new(""), Err(IdError::Empty));
    }

    #[test]
    fn diagram_id_rejects_whitespace() {
        assert_eq!(DiagramId::new("dag graph"), Err(IdError::ContainsWhitespace));
        assert_eq!("dag\tgraph".parse::<DiagramId>(), Err(IdError::ContainsWhitespace));
    }

    #[test]
    fn diagram_id_round_trips_through_display() {
        let id = DiagramId::new("status-graph").unwrap();
        assert_eq!(id.to_string(), "status-graph");
        assert_eq!(id.into_string(), "status-graph");
    }
}
