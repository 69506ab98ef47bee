// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dagsketch-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dagsketch and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, BTreeSet};

use smallvec::SmallVec;

use crate::model::{Graph, NodeId};

type Adjacency = BTreeMap<NodeId, SmallVec<[NodeId; 4]>>;

fn outgoing_adjacency(graph: &Graph) -> Adjacency {
    let mut outgoing: Adjacency = BTreeMap::new();
    for edge in graph.edges() {
        outgoing.entry(edge.source()).or_default().push(edge.target());
    }
    outgoing
}

/// Returns true if adding `source -> dest` would close a directed cycle, i.e. `source` is
/// reachable from `dest` over the current edges. A self-loop counts as a cycle.
///
/// The scan sees every edge currently stored, including one the caller may be about to replace;
/// reversing an existing edge is therefore always reported as a cycle.
pub fn would_create_cycle(graph: &Graph, source: NodeId, dest: NodeId) -> bool {
    let outgoing = outgoing_adjacency(graph);
    let mut seen: BTreeSet<NodeId> = BTreeSet::new();
    let mut stack = vec![dest];

    while let Some(current) = stack.pop() {
        if current == source {
            return true;
        }
        if !seen.insert(current) {
            continue;
        }
        if let Some(next) = outgoing.get(&current) {
            stack.extend(next.iter().copied());
        }
    }

    false
}

/// All nodes reachable from `start` by following at least one edge.
pub fn descendants(graph: &Graph, start: NodeId) -> BTreeSet<NodeId> {
    let outgoing = outgoing_adjacency(graph);
    let mut reached: BTreeSet<NodeId> = BTreeSet::new();
    let mut stack = outgoing.get(&start).map(|next| next.to_vec()).unwrap_or_default();

    while let Some(current) = stack.pop() {
        if !reached.insert(current) {
            continue;
        }
        if let Some(next) = outgoing.get(&current) {
            stack.extend(next.iter().copied());
        }
    }

    reached
}

/// True when no edge closes a directed cycle.
pub fn is_acyclic(graph: &Graph) -> bool {
    graph.edges().iter().all(|edge| !descendants(graph, edge.target()).contains(&edge.source()))
}
