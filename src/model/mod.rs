// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dagsketch-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dagsketch and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model: nodes, edges, ids and the graph store that owns them.

pub mod edge;
pub mod element_ref;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod graph;
pub mod ids;
pub mod node;

pub use edge::Edge;
pub use element_ref::ElementRef;
pub use graph::{Graph, RemovedNode};
pub use ids::{IdCounter, NodeId};
pub use node::{Node, Point};
