// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dagsketch-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dagsketch and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::layout::LayoutConfig;
use crate::model::{Edge, Graph, Node, NodeId, Point};
use crate::ops::{GraphEditor, SeedError};

/// On-disk snapshot of a graph: nodes in id order, edges in store insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub nodes: Vec<NodeRecord>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: NodeId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub x: i64,
    pub y: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: NodeId,
    pub target: NodeId,
}

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("cannot access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed graph document: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Seed(#[from] SeedError),
}

impl From<&Node> for NodeRecord {
    fn from(node: &Node) -> Self {
        Self {
            id: node.id(),
            title: node.title().to_string(),
            description: node.description().to_owned(),
            url: node.url().map(str::to_owned),
            x: node.x(),
            y: node.y(),
        }
    }
}

impl From<NodeRecord> for Node {
    fn from(record: NodeRecord) -> Self {
        Node::new(
            record.id,
            record.title,
            record.description,
            Point::new(record.x, record.y),
        )
        .with_url(record.url)
    }
}

impl From<Edge> for EdgeRecord {
    fn from(edge: Edge) -> Self {
        Self {
            source: edge.source(),
            target: edge.target(),
        }
    }
}

impl From<EdgeRecord> for Edge {
    fn from(record: EdgeRecord) -> Self {
        Edge::new(record.source, record.target)
    }
}

impl GraphDocument {
    /// Snapshots `graph`. Edge order is kept since propagation follows it.
    pub fn from_graph(graph: &Graph) -> Self {
        Self {
            nodes: graph.nodes().values().map(NodeRecord::from).collect(),
            edges: graph.edges().iter().copied().map(EdgeRecord::from).collect(),
        }
    }

    /// Seeds an editor from this document. Positions are kept as stored.
    pub fn into_editor(self, config: LayoutConfig) -> Result<GraphEditor, SeedError> {
        GraphEditor::from_parts(
            config,
            self.nodes.into_iter().map(Node::from),
            self.edges.into_iter().map(Edge::from),
        )
    }

    pub fn from_json_str(raw: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json_string_pretty(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| DocumentError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), DocumentError> {
        let path = path.as_ref();
        let mut out = self.to_json_string_pretty()?;
        out.push('\n');
        fs::write(path, out).map_err(|source| DocumentError::Io {
            path: path.display().to_string(),
            source,
        })
    }
}
