// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dagsketch-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dagsketch and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Deterministic graph builders shared by the bench targets (no RNG).

use dagsketch::layout::LayoutConfig;
use dagsketch::model::{Edge, Node, NodeId, Point};
use dagsketch::ops::GraphEditor;

fn node(raw: u64, x: i64, y: i64) -> Node {
    Node::new(NodeId::new(raw), format!("#{raw}"), "", Point::new(x, y))
}

fn seed(nodes: Vec<Node>, edges: Vec<Edge>) -> GraphEditor {
    GraphEditor::from_parts(LayoutConfig::default(), nodes, edges).expect("bench fixture seeds")
}

/// `columns` layers of `rows` nodes, laid out already, with every node linked to the node in the
/// same row and the row below it in the next layer.
pub fn layered(columns: u64, rows: u64) -> GraphEditor {
    let config = LayoutConfig::default();
    let id = |c: u64, r: u64| c * rows + r;

    let mut nodes = Vec::with_capacity((columns * rows) as usize);
    let mut edges = Vec::new();
    for c in 0..columns {
        for r in 0..rows {
            let (x, y) = (c as i64 * config.column_width, r as i64 * config.min_row_gap());
            nodes.push(node(id(c, r), x, y));
            if c + 1 < columns {
                edges.push(Edge::new(NodeId::new(id(c, r)), NodeId::new(id(c + 1, r))));
                if r + 1 < rows {
                    edges.push(Edge::new(NodeId::new(id(c, r)), NodeId::new(id(c + 1, r + 1))));
                }
            }
        }
    }
    seed(nodes, edges)
}

/// A chain `0 -> 1 -> ... -> len-1` whose nodes all still sit in the first column.
pub fn unlaid_chain(len: u64) -> GraphEditor {
    let gap = LayoutConfig::default().min_row_gap();
    let nodes = (0..len).map(|raw| node(raw, 0, raw as i64 * gap)).collect();
    let edges = (1..len).map(|raw| Edge::new(NodeId::new(raw - 1), NodeId::new(raw))).collect();
    seed(nodes, edges)
}

/// `len` unconnected nodes packed into one column, all touching.
pub fn crowded_column(len: u64) -> GraphEditor {
    let nodes = (0..len).map(|raw| node(raw, 0, raw as i64 * 10)).collect();
    seed(nodes, Vec::new())
}

/// One root with `fanout` children, each leading a chain of `depth` nodes.
pub fn fan_out(fanout: u64, depth: u64) -> GraphEditor {
    let config = LayoutConfig::default();
    let mut nodes = vec![node(0, 0, 0)];
    let mut edges = Vec::new();
    let mut next = 1;
    for branch in 0..fanout {
        let mut prev = 0;
        for level in 0..depth {
            let y = branch as i64 * config.min_row_gap();
            nodes.push(node(next, (level as i64 + 1) * config.column_width, y));
            edges.push(Edge::new(NodeId::new(prev), NodeId::new(next)));
            prev = next;
            next += 1;
        }
    }
    seed(nodes, edges)
}
