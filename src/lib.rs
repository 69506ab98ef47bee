// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dagsketch-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dagsketch and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Dagsketch engine library.
//!
//! [`ops::GraphEditor`] owns a directed acyclic graph of positioned nodes and keeps it laid out
//! left to right as edits arrive. [`format`] loads and saves graphs; [`ui`] maps pointer drags to
//! edits.

pub mod format;
pub mod layout;
pub mod model;
pub mod ops;
pub mod query;
pub mod ui;
