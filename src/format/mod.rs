// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dagsketch-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dagsketch and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Reading and writing graphs.
//!
//! [`document`] is the snapshot format the CLI loads and saves; [`issues`] seeds a fresh graph
//! from an issue tracker export.

pub mod document;
pub mod issues;

pub use document::{DocumentError, EdgeRecord, GraphDocument, NodeRecord};
pub use issues::{editor_from_issues, issue_nodes, load_issues, parse_issues, Issue};
