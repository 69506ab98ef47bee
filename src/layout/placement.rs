// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dagsketch-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dagsketch and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::config::LayoutConfig;
use crate::model::Point;

/// The visible window of the diagram, in diagram coordinates.
///
/// Hosts keep this current as the user pans and zooms; the editor uses it to place nodes that
/// were created without an explicit position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub left: i64,
    pub top: i64,
    pub width: i64,
    pub height: i64,
}

impl Viewport {
    pub fn new(left: i64, top: i64, width: i64, height: i64) -> Self {
        Self { left, top, width, height }
    }

    /// Top-left corner for a node box centred in the viewport (before column snapping).
    pub fn center_placement(&self, config: &LayoutConfig) -> Point {
        Point::new(
            self.left.saturating_add(self.width / 2).saturating_sub(config.node_width / 2),
            self.top.saturating_add(self.height / 2).saturating_sub(config.node_height / 2),
        )
    }
}
