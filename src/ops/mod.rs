// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dagsketch-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dagsketch and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Edit operations on a diagram graph.
//!
//! Every edit runs to completion against a [`GraphEditor`] and reports a [`Delta`]: the nodes and
//! edges it added, removed, or moved, so a renderer can redraw only what changed.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::layout::ConfigError;
use crate::model::{Edge, ElementRef, NodeId, Point};

mod editor;

pub use editor::GraphEditor;

/// A scriptable edit, as accepted by [`GraphEditor::apply_op`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Op {
    AddNode {
        title: String,
        #[serde(default)]
        description: String,
        #[serde(default)]
        url: Option<String>,
        /// Omitted: the editor's viewport picks the position.
        #[serde(default)]
        at: Option<Point>,
    },
    AddEdge {
        source: NodeId,
        target: NodeId,
    },
    RemoveNode {
        node: NodeId,
    },
    RemoveEdge {
        source: NodeId,
        target: NodeId,
    },
    MoveNode {
        node: NodeId,
        to: Point,
    },
    UpdateNode {
        node: NodeId,
        #[serde(default)]
        patch: NodePatch,
    },
    /// Re-seeds the id counter. The graph is untouched, so the result is always
    /// [`EditStatus::NoOp`] and `rev` does not move.
    SetIdCounter {
        next: u64,
    },
}

/// Text fields to replace on a node. `None` keeps the current value; an empty `url` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    /// The edge would have closed a directed cycle.
    Cycle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EditStatus {
    /// The graph changed.
    Applied,
    /// The edit was valid but changed nothing (idempotent insert, absent delete).
    NoOp,
    /// The edit was refused; the graph is untouched.
    Rejected(Rejection),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditResult {
    pub status: EditStatus,
    /// Editor revision after the edit. Only edits that change the graph bump it.
    pub rev: u64,
    /// Id of the node created by an `AddNode` edit.
    pub created: Option<NodeId>,
    pub delta: Delta,
}

impl EditResult {
    fn rejected(rev: u64, rejection: Rejection) -> Self {
        Self {
            status: EditStatus::Rejected(rejection),
            rev,
            created: None,
            delta: Delta::default(),
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self.status, EditStatus::Rejected(_))
    }
}

/// Minimal delta describing which graph elements changed as the result of an edit.
///
/// `updated` lists nodes whose position or text changed; an element that was added or removed by
/// the same edit only appears in `added` / `removed`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Delta {
    pub added: Vec<ElementRef>,
    pub removed: Vec<ElementRef>,
    pub updated: Vec<ElementRef>,
}

impl Delta {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.updated.is_empty()
    }
}

#[derive(Debug, Default)]
struct DeltaBuilder {
    added: HashSet<ElementRef>,
    removed: HashSet<ElementRef>,
    updated: HashSet<ElementRef>,
}

impl DeltaBuilder {
    fn record_added(&mut self, element: ElementRef) {
        self.removed.remove(&element);
        self.updated.remove(&element);
        self.added.insert(element);
    }

    fn record_removed(&mut self, element: ElementRef) {
        // Added and removed within one edit: the renderer never saw it.
        if self.added.remove(&element) {
            self.updated.remove(&element);
            return;
        }
        self.updated.remove(&element);
        self.removed.insert(element);
    }

    fn record_updated(&mut self, element: ElementRef) {
        if self.added.contains(&element) || self.removed.contains(&element) {
            return;
        }
        self.updated.insert(element);
    }

    fn record_moved(&mut self, moved: BTreeSet<NodeId>) {
        for node_id in moved {
            self.record_updated(ElementRef::node(node_id));
        }
    }

    fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.updated.is_empty()
    }

    fn finish(self) -> Delta {
        let mut added = self.added.into_iter().collect::<Vec<_>>();
        let mut removed = self.removed.into_iter().collect::<Vec<_>>();
        let mut updated = self.updated.into_iter().collect::<Vec<_>>();

        added.sort();
        removed.sort();
        updated.sort();

        Delta { added, removed, updated }
    }
}

/// Hard failures of an edit. A refused edge is not an error; see [`EditStatus::Rejected`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("node {node} does not exist")]
    UnknownNode { node: NodeId },
}

/// Problems with the node and edge lists handed to [`GraphEditor::from_parts`].
#[derive(Debug, Error)]
pub enum SeedError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("node id {node} appears more than once")]
    DuplicateNode { node: NodeId },
    #[error("edge {edge} references a node that does not exist")]
    MissingEndpoint { edge: Edge },
    #[error("edge {edge} runs opposite to an edge seeded before it")]
    AntiParallel { edge: Edge },
    #[error("edge {edge} closes a cycle")]
    Cycle { edge: Edge },
}
