// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dagsketch-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dagsketch and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;

use tracing::debug;

use super::{
    DeltaBuilder, EditError, EditResult, EditStatus, NodePatch, Op, Rejection, SeedError,
};
use crate::layout::shove::shove_nodes_right;
use crate::layout::spacing::space_nodes;
use crate::layout::{ConfigError, LayoutConfig, Viewport};
use crate::model::{Edge, ElementRef, Graph, IdCounter, Node, NodeId, Point};
use crate::query::would_create_cycle;

/// Owns one diagram graph and applies edits to it while keeping it acyclic and laid out.
///
/// The editor is a plain value: hosts that share it between threads must serialize access
/// themselves. Every edit runs to completion before returning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphEditor {
    graph: Graph,
    config: LayoutConfig,
    ids: IdCounter,
    viewport: Viewport,
    rev: u64,
}

impl Default for GraphEditor {
    fn default() -> Self {
        Self {
            graph: Graph::default(),
            config: LayoutConfig::default(),
            ids: IdCounter::default(),
            viewport: Viewport::default(),
            rev: 0,
        }
    }
}

impl GraphEditor {
    pub fn new(config: LayoutConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, ..Self::default() })
    }

    /// Builds an editor around pre-existing nodes and edges.
    ///
    /// Node positions are taken as given. Edges are validated in order: repeated edges collapse
    /// into one, while an edge that reverses an earlier one, closes a cycle, or names a missing
    /// node fails the whole seed. The id counter continues after the largest seeded id.
    pub fn from_parts(
        config: LayoutConfig,
        nodes: impl IntoIterator<Item = Node>,
        edges: impl IntoIterator<Item = Edge>,
    ) -> Result<Self, SeedError> {
        let mut editor = Self::new(config)?;

        for node in nodes {
            let node_id = node.id();
            if !editor.graph.insert_node(node) {
                return Err(SeedError::DuplicateNode { node: node_id });
            }
        }

        for edge in edges {
            let graph = &editor.graph;
            if !graph.contains_node(edge.source()) || !graph.contains_node(edge.target()) {
                return Err(SeedError::MissingEndpoint { edge });
            }
            if graph.find_edge(edge.source(), edge.target()).is_some() {
                continue;
            }
            if graph.find_edge(edge.target(), edge.source()).is_some() {
                return Err(SeedError::AntiParallel { edge });
            }
            if would_create_cycle(graph, edge.source(), edge.target()) {
                return Err(SeedError::Cycle { edge });
            }
            editor.graph.add_edge_raw(edge);
        }

        let next = editor
            .graph
            .nodes()
            .keys()
            .next_back()
            .map_or(0, |last| last.get().saturating_add(1));
        editor.ids.reseed(next);

        debug!(
            nodes = editor.graph.node_count(),
            edges = editor.graph.edge_count(),
            next_id = next,
            "seeded graph"
        );
        Ok(editor)
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn rev(&self) -> u64 {
        self.rev
    }

    /// The id the next `add_node` will try first.
    pub fn next_id(&self) -> u64 {
        self.ids.peek()
    }

    /// Re-seeds id allocation, e.g. after the host bulk-loaded nodes with its own ids.
    ///
    /// Allocation still skips ids that are in use, so a low seed cannot produce duplicates.
    pub fn set_id_counter(&mut self, next: u64) {
        self.ids.reseed(next);
    }

    /// Creates a node. Without `at`, the node is centred in the current viewport.
    ///
    /// `x` is snapped to the nearest column, then the column is re-spaced around the new node.
    pub fn add_node(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        url: Option<String>,
        at: Option<Point>,
    ) -> EditResult {
        let requested = at.unwrap_or_else(|| self.viewport.center_placement(&self.config));
        let position = Point::new(self.config.snap_column(requested.x), requested.y);

        let graph = &self.graph;
        let node_id = self.ids.allocate(|candidate| graph.contains_node(candidate));
        let title: String = title.into();
        let description: String = description.into();
        let node = Node::new(node_id, title, description, position).with_url(url);
        self.graph.insert_node(node);

        let mut delta = DeltaBuilder::default();
        delta.record_added(ElementRef::node(node_id));

        let mut moved = BTreeSet::new();
        space_nodes(&mut self.graph, node_id, &self.config, &mut moved);
        delta.record_moved(moved);

        debug!(node = %node_id, x = position.x, y = position.y, "added node");
        self.finish(delta, Some(node_id))
    }

    /// Connects `source` to `dest`.
    ///
    /// Refused without touching the graph when `source` is reachable from `dest`. Otherwise the
    /// opposite edge is dropped if present, the edge is inserted unless it already exists, and
    /// every descendant of `source` is pushed right of its predecessors.
    pub fn add_edge(&mut self, source: NodeId, dest: NodeId) -> Result<EditResult, EditError> {
        self.require_node(source)?;
        self.require_node(dest)?;

        // Runs before the opposite edge is dropped, so reversing an edge is always refused.
        if would_create_cycle(&self.graph, source, dest) {
            debug!(%source, %dest, "refused edge: would close a cycle");
            return Ok(EditResult::rejected(self.rev, Rejection::Cycle));
        }

        let mut delta = DeltaBuilder::default();

        let edge = Edge::new(source, dest);
        let opposite = edge.reversed();
        if self.graph.remove_edge(opposite) {
            debug!(edge = %opposite, "dropped opposite edge");
            delta.record_removed(ElementRef::edge(opposite));
        }

        if self.graph.find_edge(source, dest).is_none() {
            self.graph.add_edge_raw(edge);
            delta.record_added(ElementRef::edge(edge));
        }

        let mut moved = BTreeSet::new();
        shove_nodes_right(&mut self.graph, source, &self.config, &mut moved);
        if !moved.is_empty() {
            debug!(%source, moved = moved.len(), "propagated layout");
        }
        delta.record_moved(moved);

        Ok(self.finish(delta, None))
    }

    /// Removes a node and every edge touching it. Absent nodes are a no-op.
    pub fn remove_node(&mut self, node_id: NodeId) -> EditResult {
        let mut delta = DeltaBuilder::default();
        if let Some(removed) = self.graph.remove_node(node_id) {
            for edge in removed.edges {
                delta.record_removed(ElementRef::edge(edge));
            }
            delta.record_removed(ElementRef::node(node_id));
            debug!(node = %node_id, "removed node");
        }
        self.finish(delta, None)
    }

    /// Removes the edge `source -> target`. Absent edges are a no-op.
    pub fn remove_edge(&mut self, source: NodeId, target: NodeId) -> EditResult {
        let mut delta = DeltaBuilder::default();
        let edge = Edge::new(source, target);
        if self.graph.remove_edge(edge) {
            delta.record_removed(ElementRef::edge(edge));
            debug!(%edge, "removed edge");
        }
        self.finish(delta, None)
    }

    /// Drops a node at a new position: `x` snaps to the nearest column and the column is
    /// re-spaced around the node. Descendants are not pushed.
    pub fn move_node(&mut self, node_id: NodeId, to: Point) -> Result<EditResult, EditError> {
        let x = self.config.snap_column(to.x);
        let node = self
            .graph
            .node_mut(node_id)
            .ok_or(EditError::UnknownNode { node: node_id })?;

        let mut delta = DeltaBuilder::default();
        if node.position() != Point::new(x, to.y) {
            node.set_x(x);
            node.set_y(to.y);
            delta.record_updated(ElementRef::node(node_id));
        }

        let mut moved = BTreeSet::new();
        space_nodes(&mut self.graph, node_id, &self.config, &mut moved);
        delta.record_moved(moved);

        Ok(self.finish(delta, None))
    }

    pub fn update_node(
        &mut self,
        node_id: NodeId,
        patch: &NodePatch,
    ) -> Result<EditResult, EditError> {
        let node = self
            .graph
            .node_mut(node_id)
            .ok_or(EditError::UnknownNode { node: node_id })?;

        let mut changed = false;
        if let Some(title) = patch.title.as_deref().filter(|t| *t != node.title()) {
            node.set_title(title);
            changed = true;
        }
        if let Some(description) = patch.description.as_deref().filter(|d| *d != node.description())
        {
            node.set_description(description);
            changed = true;
        }
        if let Some(url) = patch.url.as_deref() {
            let url = Some(url).filter(|u| !u.is_empty());
            if url != node.url() {
                node.set_url(url);
                changed = true;
            }
        }

        let mut delta = DeltaBuilder::default();
        if changed {
            delta.record_updated(ElementRef::node(node_id));
        }
        Ok(self.finish(delta, None))
    }

    pub fn apply_op(&mut self, op: &Op) -> Result<EditResult, EditError> {
        match op {
            Op::AddNode { title, description, url, at } => {
                Ok(self.add_node(title.as_str(), description.as_str(), url.clone(), *at))
            }
            Op::AddEdge { source, target } => self.add_edge(*source, *target),
            Op::RemoveNode { node } => Ok(self.remove_node(*node)),
            Op::RemoveEdge { source, target } => Ok(self.remove_edge(*source, *target)),
            Op::MoveNode { node, to } => self.move_node(*node, *to),
            Op::UpdateNode { node, patch } => self.update_node(*node, patch),
            Op::SetIdCounter { next } => {
                self.set_id_counter(*next);
                Ok(self.finish(DeltaBuilder::default(), None))
            }
        }
    }

    /// Applies `ops` in order, all or nothing: on the first error the editor is left exactly as
    /// it was and the error is returned. Refused edges are not errors and do not abort the batch.
    pub fn apply_ops(&mut self, ops: &[Op]) -> Result<Vec<EditResult>, EditError> {
        let mut staged = self.clone();
        let results = ops.iter().map(|op| staged.apply_op(op)).collect::<Result<Vec<_>, _>>()?;
        *self = staged;
        Ok(results)
    }

    fn require_node(&self, node_id: NodeId) -> Result<(), EditError> {
        if self.graph.contains_node(node_id) {
            Ok(())
        } else {
            Err(EditError::UnknownNode { node: node_id })
        }
    }

    fn finish(&mut self, delta: DeltaBuilder, created: Option<NodeId>) -> EditResult {
        let status = if delta.is_empty() {
            EditStatus::NoOp
        } else {
            self.rev = self.rev.saturating_add(1);
            EditStatus::Applied
        };
        EditResult { status, rev: self.rev, created, delta: delta.finish() }
    }
}
