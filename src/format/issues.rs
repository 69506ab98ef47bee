// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dagsketch-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dagsketch and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Seeding a graph from a list of tracker issues.
//!
//! Each issue becomes one node stacked in the first column, in the order the list gives them.
//! Both the trimmed `{ number, title, url }` shape and raw GitHub API records are accepted. A raw
//! record carries its API endpoint in `url` and the browser link in `html_url`; the browser link
//! wins. Records with a `pull_request` key are skipped.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::DocumentError;
use crate::layout::LayoutConfig;
use crate::model::{Edge, Node, NodeId, Point};
use crate::ops::{GraphEditor, SeedError};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    html_url: Option<String>,
    #[serde(default)]
    pull_request: Option<serde_json::Value>,
}

impl Issue {
    pub fn new(number: u64, title: impl Into<String>, url: Option<String>) -> Self {
        Self {
            number,
            title: title.into(),
            url,
            html_url: None,
            pull_request: None,
        }
    }

    /// The link a node should carry: `html_url` when present, `url` otherwise.
    pub fn link(&self) -> Option<&str> {
        self.html_url.as_deref().or(self.url.as_deref())
    }

    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IssueList {
    Wrapped { issues: Vec<Issue> },
    Bare(Vec<Issue>),
}

pub fn parse_issues(raw: &str) -> Result<Vec<Issue>, DocumentError> {
    let list: IssueList = serde_json::from_str(raw)?;
    let issues = match list {
        IssueList::Wrapped { issues } | IssueList::Bare(issues) => issues,
    };
    Ok(issues.into_iter().filter(|i| !i.is_pull_request()).collect())
}

pub fn load_issues(path: impl AsRef<Path>) -> Result<Vec<Issue>, DocumentError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| DocumentError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_issues(&raw)
}

/// Node `i` is titled `#<number>`, carries the issue title as its description and sits at
/// `(0, i * min_row_gap)`. No edges are created; the id counter continues at `issues.len()`.
pub fn issue_nodes(issues: &[Issue], config: &LayoutConfig) -> Vec<Node> {
    let gap = config.min_row_gap();
    (0u64..)
        .zip(issues)
        .map(|(i, issue)| {
            Node::new(
                NodeId::new(i),
                format!("#{}", issue.number),
                issue.title.clone(),
                Point::new(0, i as i64 * gap),
            )
            .with_url(issue.link())
        })
        .collect()
}

pub fn editor_from_issues(
    issues: &[Issue],
    config: LayoutConfig,
) -> Result<GraphEditor, SeedError> {
    let nodes = issue_nodes(issues, &config);
    let mut editor = GraphEditor::from_parts(config, nodes, Vec::<Edge>::new())?;
    editor.set_id_counter(issues.len() as u64);
    Ok(editor)
}
