// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dagsketch-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dagsketch and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Vertical spacing within one column.
//!
//! The pass is local and greedy: starting at the anchor node it walks outward through the
//! column in `y` order and pushes each neighbour just far enough to clear the row gap, stopping
//! in each direction at the first neighbour that is already clear. Gaps between nodes the walk
//! never reached are not re-verified.

use std::collections::BTreeSet;

use tracing::{debug, trace};

use super::config::LayoutConfig;
use crate::model::{Graph, NodeId};

/// Re-spaces the column of `node_id` around that node. The anchor itself never moves.
///
/// Every node whose `y` changes is added to `moved`. Unknown ids are ignored.
pub(crate) fn space_nodes(
    graph: &mut Graph,
    node_id: NodeId,
    config: &LayoutConfig,
    moved: &mut BTreeSet<NodeId>,
) {
    let Some(anchor) = graph.node(node_id).map(|n| n.position()) else {
        return;
    };

    let mut column = graph
        .column(anchor.x)
        .filter(|n| n.id() != node_id)
        .map(|n| (n.id(), n.y()))
        .collect::<Vec<_>>();
    if column.is_empty() {
        return;
    }
    // Stable: equal `y` keeps id order.
    column.sort_by_key(|&(_, y)| y);

    // Everything before `split` sits at or above the anchor, everything from `split` on below.
    let split = column.partition_point(|&(_, y)| y <= anchor.y);
    let gap = config.min_row_gap();
    let mut pushed = 0usize;

    let mut reference = anchor.y;
    for &(other, y) in column[..split].iter().rev() {
        let target = reference.saturating_sub(gap);
        if y <= target {
            break;
        }
        set_y(graph, other, target, moved);
        pushed += 1;
        reference = target;
    }

    let mut reference = anchor.y;
    for &(other, y) in &column[split..] {
        let target = reference.saturating_add(gap);
        if y >= target {
            break;
        }
        set_y(graph, other, target, moved);
        pushed += 1;
        reference = target;
    }

    if pushed > 0 {
        debug!(anchor = %node_id, column = anchor.x, pushed, "re-spaced column");
    }
}

fn set_y(graph: &mut Graph, node_id: NodeId, y: i64, moved: &mut BTreeSet<NodeId>) {
    if let Some(node) = graph.node_mut(node_id) {
        trace!(node = %node_id, from = node.y(), to = y, "vertical push");
        node.set_y(y);
        moved.insert(node_id);
    }
}
