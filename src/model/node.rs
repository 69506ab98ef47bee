// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dagsketch-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dagsketch and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use super::ids::NodeId;

/// A position in diagram units. `x` names the node's column once snapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
    title: SmolStr,
    description: String,
    url: Option<String>,
    position: Point,
}

impl Node {
    pub fn new(
        id: NodeId,
        title: impl Into<SmolStr>,
        description: impl Into<String>,
        position: Point,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            url: None,
            position,
        }
    }

    pub fn with_url<T: Into<String>>(mut self, url: Option<T>) -> Self {
        self.url = url.map(Into::into);
        self
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn x(&self) -> i64 {
        self.position.x
    }

    pub fn y(&self) -> i64 {
        self.position.y
    }

    pub(crate) fn set_title(&mut self, title: impl Into<SmolStr>) {
        self.title = title.into();
    }

    pub(crate) fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub(crate) fn set_url<T: Into<String>>(&mut self, url: Option<T>) {
        self.url = url.map(Into::into);
    }

    pub(crate) fn set_x(&mut self, x: i64) {
        self.position.x = x;
    }

    pub(crate) fn set_y(&mut self, y: i64) {
        self.position.y = y;
    }
}
