// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dagsketch-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dagsketch and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Rightward propagation along edges.
//!
//! After an edge is added, every node reachable from its source must sit at least one column to
//! the right of each predecessor. Propagation only ever increases `x`; it relies on the graph being
//! acyclic to terminate.

use std::collections::BTreeSet;

use smallvec::SmallVec;
use tracing::trace;

use super::config::LayoutConfig;
use super::spacing::space_nodes;
use crate::model::{Graph, NodeId};

/// Moves `node_id` to the first column strictly right of `threshold_x`, unless it already sits at
/// least one full column to the right. Returns whether the node moved.
pub(crate) fn shove_right(
    graph: &mut Graph,
    threshold_x: i64,
    node_id: NodeId,
    config: &LayoutConfig,
    moved: &mut BTreeSet<NodeId>,
) -> bool {
    let Some(node) = graph.node_mut(node_id) else {
        return false;
    };
    if node.x() >= threshold_x.saturating_add(config.column_width) {
        return false;
    }

    let x = config.next_column_after(threshold_x);
    trace!(node = %node_id, from = node.x(), to = x, "shove right");
    node.set_x(x);
    moved.insert(node_id);
    true
}

/// Pushes every descendant of `source` right of its predecessor, depth first in edge insertion
/// order, re-spacing each target's (possibly new) column on the way back up.
pub(crate) fn shove_nodes_right(
    graph: &mut Graph,
    source: NodeId,
    config: &LayoutConfig,
    moved: &mut BTreeSet<NodeId>,
) {
    let Some(source_x) = graph.node(source).map(|n| n.x()) else {
        return;
    };
    let targets = graph.outgoing_edges(source).map(|e| e.target()).collect::<SmallVec<[_; 4]>>();

    for target in targets {
        shove_right(graph, source_x, target, config, moved);
        shove_nodes_right(graph, target, config, moved);
        space_nodes(graph, target, config, moved);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::{shove_nodes_right, shove_right};
    use crate::layout::LayoutConfig;
    use crate::model::fixtures::{chain_of_four, unlaid_diamond};
    use crate::model::{Edge, Graph, Node, NodeId, Point};

    fn nid(raw: u64) -> NodeId {
        NodeId::new(raw)
    }

    fn pos(graph: &Graph, raw: u64) -> (i64, i64) {
        let node = graph.node(nid(raw)).expect("node");
        (node.x(), node.y())
    }

    #[test]
    fn shove_right_moves_to_next_column_after_threshold() {
        let mut graph = Graph::default();
        graph.insert_node(Node::new(nid(0), "#0", "", Point::new(0, 0)));
        let mut moved = BTreeSet::new();

        assert!(shove_right(&mut graph, 0, nid(0), &LayoutConfig::default(), &mut moved));
        assert_eq!(pos(&graph, 0), (280, 0));

        // Threshold inside a column still lands on the next multiple.
        assert!(shove_right(&mut graph, 300, nid(0), &LayoutConfig::default(), &mut moved));
        assert_eq!(pos(&graph, 0), (560, 0));
    }

    #[test]
    fn shove_right_leaves_nodes_that_are_far_enough_right() {
        let mut graph = Graph::default();
        graph.insert_node(Node::new(nid(0), "#0", "", Point::new(840, 0)));
        let mut moved = BTreeSet::new();

        assert!(!shove_right(&mut graph, 280, nid(0), &LayoutConfig::default(), &mut moved));
        assert!(!shove_right(&mut graph, 560, nid(0), &LayoutConfig::default(), &mut moved));
        assert_eq!(pos(&graph, 0), (840, 0));
        assert!(moved.is_empty());
    }

    #[test]
    fn propagation_lays_out_a_diamond() {
        let mut graph = unlaid_diamond();
        let mut moved = BTreeSet::new();
        shove_nodes_right(&mut graph, nid(0), &LayoutConfig::default(), &mut moved);

        assert_eq!(pos(&graph, 0), (0, 0));
        assert_eq!(pos(&graph, 1), (280, 130));
        assert_eq!(pos(&graph, 2), (280, 260));
        assert_eq!(pos(&graph, 3), (560, 390));
        assert_eq!(moved, BTreeSet::from([nid(1), nid(2), nid(3)]));
    }

    #[test]
    fn propagation_only_moves_what_violates_the_ordering() {
        let mut graph = chain_of_four();
        graph.node_mut(nid(1)).expect("node").set_x(0);
        let mut moved = BTreeSet::new();
        shove_nodes_right(&mut graph, nid(0), &LayoutConfig::default(), &mut moved);

        assert_eq!(moved, BTreeSet::from([nid(1)]));
        assert_eq!(pos(&graph, 1), (280, 0));
        assert_eq!(pos(&graph, 3), (840, 0));
    }

    #[test]
    fn propagation_respaces_the_new_column() {
        let mut graph = Graph::default();
        graph.insert_node(Node::new(nid(0), "#0", "", Point::new(0, 0)));
        graph.insert_node(Node::new(nid(1), "#1", "", Point::new(0, 40)));
        graph.insert_node(Node::new(nid(2), "#2", "", Point::new(280, 0)));
        graph.add_edge_raw(Edge::new(nid(0), nid(1)));

        let mut moved = BTreeSet::new();
        shove_nodes_right(&mut graph, nid(0), &LayoutConfig::default(), &mut moved);

        // Node 1 lands in column 280 next to node 2 and pushes it up.
        assert_eq!(pos(&graph, 1), (280, 40));
        assert_eq!(pos(&graph, 2), (280, -90));
        assert_eq!(moved, BTreeSet::from([nid(1), nid(2)]));
    }
}
