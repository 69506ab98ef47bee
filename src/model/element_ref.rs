// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dagsketch-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dagsketch and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::Serialize;

use super::edge::Edge;
use super::ids::NodeId;

/// Reference to one element of the graph, as reported in edit deltas.
///
/// Ordering puts all nodes (by id) before all edges (by source, then target), which keeps
/// delta listings stable for renderers and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ElementRef {
    Node { id: NodeId },
    Edge { source: NodeId, target: NodeId },
}

impl ElementRef {
    pub fn node(id: NodeId) -> Self {
        Self::Node { id }
    }

    pub fn edge(edge: Edge) -> Self {
        Self::Edge { source: edge.source(), target: edge.target() }
    }

    pub fn as_node(&self) -> Option<NodeId> {
        match self {
            Self::Node { id } => Some(*id),
            Self::Edge { .. } => None,
        }
    }

    pub fn as_edge(&self) -> Option<Edge> {
        match self {
            Self::Node { .. } => None,
            Self::Edge { source, target } => Some(Edge::new(*source, *target)),
        }
    }
}

impl From<Edge> for ElementRef {
    fn from(edge: Edge) -> Self {
        Self::edge(edge)
    }
}

impl From<NodeId> for ElementRef {
    fn from(id: NodeId) -> Self {
        Self::node(id)
    }
}

impl fmt::Display for ElementRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node { id } => write!(f, "{id}"),
            Self::Edge { source, target } => write!(f, "e:{source}->{target}"),
        }
    }
}
