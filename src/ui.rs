// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dagsketch-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dagsketch and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Interaction state shared between the host UI and the editor.
//!
//! A drag on a node means one of two things depending on the current [`DragMode`]: draw an edge
//! from the pressed node to the node under the pointer, or reposition the pressed node. The mode
//! itself belongs to the host; this module only turns a finished drag into the matching edit.

use serde::{Deserialize, Serialize};

use crate::model::{NodeId, Point};
use crate::ops::{EditError, EditResult, GraphEditor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragMode {
    #[default]
    EdgeAdd,
    NodeMove,
}

impl DragMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::EdgeAdd => Self::NodeMove,
            Self::NodeMove => Self::EdgeAdd,
        }
    }

    pub fn toggle(&mut self) {
        *self = self.toggled();
    }
}

/// A drag that started on `origin` and was released with the pointer at `position`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragGesture {
    pub mode: DragMode,
    pub origin: NodeId,
    /// The node under the pointer on release, if any.
    pub released_on: Option<NodeId>,
    /// Where the dragged node box ended up, before snapping.
    pub position: Point,
}

/// Applies a finished drag.
///
/// In edge mode a release over another node adds `origin -> released_on`. Every other drag drops
/// `origin` at `position`; for an edge drag released back on its origin that is the node's current
/// position, so only snapping and re-spacing happen.
pub fn finish_drag(
    editor: &mut GraphEditor,
    gesture: &DragGesture,
) -> Result<EditResult, EditError> {
    match (gesture.mode, gesture.released_on) {
        (DragMode::EdgeAdd, Some(target)) if target != gesture.origin => {
            editor.add_edge(gesture.origin, target)
        }
        (DragMode::EdgeAdd, _) => {
            let current = editor
                .graph()
                .node(gesture.origin)
                .map(|n| n.position())
                .ok_or(EditError::UnknownNode { node: gesture.origin })?;
            editor.move_node(gesture.origin, current)
        }
        (DragMode::NodeMove, _) => editor.move_node(gesture.origin, gesture.position),
    }
}
