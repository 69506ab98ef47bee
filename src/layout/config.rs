// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dagsketch-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dagsketch and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Geometry the layout engine works against.
///
/// Units are whatever the renderer draws in; the defaults match a 200x100 node box with an
/// 80 unit gutter between columns and a 30 unit margin between rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Column pitch: node width plus the horizontal gap. Every snapped `x` is a multiple of it.
    pub column_width: i64,
    pub node_width: i64,
    pub node_height: i64,
    /// Free space kept between two nodes stacked in the same column.
    pub row_margin: i64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            column_width: 280,
            node_width: 200,
            node_height: 100,
            row_margin: 30,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("column_width must be positive (got {0})")]
    NonPositiveColumnWidth(i64),
    #[error("node_height must be positive (got {0})")]
    NonPositiveNodeHeight(i64),
    #[error("row_margin must not be negative (got {0})")]
    NegativeRowMargin(i64),
    #[error("cannot read layout config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid layout config {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl LayoutConfig {
    /// Reads a JSON config file; missing fields fall back to the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Json {
            path: path.display().to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.column_width <= 0 {
            return Err(ConfigError::NonPositiveColumnWidth(self.column_width));
        }
        if self.node_height <= 0 {
            return Err(ConfigError::NonPositiveNodeHeight(self.node_height));
        }
        if self.row_margin < 0 {
            return Err(ConfigError::NegativeRowMargin(self.row_margin));
        }
        Ok(())
    }

    /// Minimum `y` distance between two nodes sharing a column.
    pub fn min_row_gap(&self) -> i64 {
        self.node_height.saturating_add(self.row_margin)
    }

    /// Rounds `x` to the nearest column; exact halves round up.
    pub fn snap_column(&self, x: i64) -> i64 {
        let w = self.column_width;
        let rest = x.rem_euclid(w);
        let index = x.div_euclid(w);
        self.column_at(if rest >= w - rest { index.saturating_add(1) } else { index })
    }

    /// The smallest column strictly greater than `x`, or the last representable column.
    pub fn next_column_after(&self, x: i64) -> i64 {
        self.column_at(x.div_euclid(self.column_width).saturating_add(1))
    }

    /// `index * column_width`, clamped to the outermost column that fits in an `i64`.
    fn column_at(&self, index: i64) -> i64 {
        let w = self.column_width;
        let outermost = if index > 0 { i64::MAX / w * w } else { i64::MIN / w * w };
        index.checked_mul(w).unwrap_or(outermost)
    }
}
