// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dagsketch-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dagsketch and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::edge::Edge;
use super::graph::Graph;
use super::ids::NodeId;
use super::node::{Node, Point};

fn nid(raw: u64) -> NodeId {
    NodeId::new(raw)
}

fn graph_from(nodes: &[(u64, i64, i64)], edges: &[(u64, u64)]) -> Graph {
    let mut graph = Graph::default();
    for &(raw, x, y) in nodes {
        graph.insert_node(Node::new(nid(raw), format!("#{raw}"), "", Point::new(x, y)));
    }
    for &(source, target) in edges {
        graph.add_edge_raw(Edge::new(nid(source), nid(target)));
    }
    graph
}

/// `0 -> 1 -> 2 -> 3`, already laid out left to right on one row.
pub(crate) fn chain_of_four() -> Graph {
    graph_from(
        &[(0, 0, 0), (1, 280, 0), (2, 560, 0), (3, 840, 0)],
        &[(0, 1), (1, 2), (2, 3)],
    )
}

/// `0 -> {1, 2} -> 3` with every node still stacked in the first column.
pub(crate) fn unlaid_diamond() -> Graph {
    graph_from(
        &[(0, 0, 0), (1, 0, 130), (2, 0, 260), (3, 0, 390)],
        &[(0, 1), (0, 2), (1, 3), (2, 3)],
    )
}
