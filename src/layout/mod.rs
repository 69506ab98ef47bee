// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dagsketch-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dagsketch and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Incremental layout: column snapping, rightward propagation along edges, and vertical spacing
//! within a column.
//!
//! Nothing here computes a whole-graph layout. Each pass starts from the node an edit touched and
//! only visits what that edit can affect.

pub mod config;
pub mod placement;
pub(crate) mod shove;
pub(crate) mod spacing;

pub use config::{ConfigError, LayoutConfig};
pub use placement::Viewport;
