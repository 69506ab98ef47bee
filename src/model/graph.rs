// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dagsketch-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dagsketch and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The graph store: sole owner of every node and edge.
//!
//! Reads are public. Every mutation is crate-private so that callers can only change the graph
//! through the edit operations in [`crate::ops`], which keep the acyclic and layout invariants.

use std::collections::BTreeMap;

use super::edge::Edge;
use super::ids::NodeId;
use super::node::Node;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Graph {
    nodes: BTreeMap<NodeId, Node>,
    // Insertion order matters: propagation visits outgoing edges in this order.
    edges: Vec<Edge>,
}

/// What a node removal took out of the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedNode {
    pub node: Node,
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn nodes(&self) -> &BTreeMap<NodeId, Node> {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, node_id: NodeId) -> Option<&Node> {
        self.nodes.get(&node_id)
    }

    pub fn contains_node(&self, node_id: NodeId) -> bool {
        self.nodes.contains_key(&node_id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn find_edge(&self, source: NodeId, target: NodeId) -> Option<&Edge> {
        self.edges.iter().find(|e| e.source() == source && e.target() == target)
    }

    pub fn outgoing_edges(&self, node_id: NodeId) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter().filter(move |e| e.source() == node_id)
    }

    pub fn incoming_edges(&self, node_id: NodeId) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter().filter(move |e| e.target() == node_id)
    }

    /// Nodes whose `x` equals `x`, in id order.
    pub fn column(&self, x: i64) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.values().filter(move |n| n.x() == x)
    }

    pub(crate) fn node_mut(&mut self, node_id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&node_id)
    }

    /// Inserts `node` unless its id is already taken. Returns whether it was inserted.
    pub(crate) fn insert_node(&mut self, node: Node) -> bool {
        if self.nodes.contains_key(&node.id()) {
            return false;
        }
        self.nodes.insert(node.id(), node);
        true
    }

    /// Appends `edge` without any validation.
    ///
    /// Only the edge-insertion protocol and the validated seed loader may call this: a cycle
    /// slipped in here would make rightward propagation loop forever.
    pub(crate) fn add_edge_raw(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    /// Removes `edge` if present. Returns whether anything was removed.
    pub(crate) fn remove_edge(&mut self, edge: Edge) -> bool {
        let Some(index) = self.edges.iter().position(|e| *e == edge) else {
            return false;
        };
        self.edges.remove(index);
        true
    }

    /// Removes a node together with every edge that starts or ends at it.
    pub(crate) fn remove_node(&mut self, node_id: NodeId) -> Option<RemovedNode> {
        if !self.nodes.contains_key(&node_id) {
            return None;
        }

        let removed_edges =
            self.edges.iter().filter(|e| e.touches(node_id)).copied().collect::<Vec<_>>();
        self.edges.retain(|e| !e.touches(node_id));

        let node = self.nodes.remove(&node_id)?;
        Some(RemovedNode { node, edges: removed_edges })
    }
}
