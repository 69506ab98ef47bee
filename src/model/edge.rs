// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dagsketch-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dagsketch and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ids::NodeId;

/// A directed connection between two nodes.
///
/// Edges hold node handles, never the nodes themselves; the graph store owns both.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Edge {
    source: NodeId,
    target: NodeId,
}

impl Edge {
    pub const fn new(source: NodeId, target: NodeId) -> Self {
        Self { source, target }
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn target(&self) -> NodeId {
        self.target
    }

    pub fn reversed(&self) -> Self {
        Self { source: self.target, target: self.source }
    }

    pub fn touches(&self, node_id: NodeId) -> bool {
        self.source == node_id || self.target == node_id
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.source, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::Edge;
    use crate::model::NodeId;

    #[test]
    fn edge_reports_endpoints_and_reverses() {
        let edge = Edge::new(NodeId::new(1), NodeId::new(2));
        assert_eq!(edge.source(), NodeId::new(1));
        assert_eq!(edge.target(), NodeId::new(2));
        assert_eq!(edge.reversed(), Edge::new(NodeId::new(2), NodeId::new(1)));
        assert!(edge.touches(NodeId::new(2)));
        assert!(!edge.touches(NodeId::new(3)));
        assert_eq!(edge.to_string(), "n:1->n:2");
    }
}
