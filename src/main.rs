// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dagsketch-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dagsketch and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Dagsketch CLI entrypoint.
//!
//! Loads a graph (a saved document, an issue list, or nothing), replays an op script against it
//! and prints the resulting document.

use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use dagsketch::format::{editor_from_issues, load_issues, DocumentError, GraphDocument};
use dagsketch::layout::LayoutConfig;
use dagsketch::ops::{EditStatus, GraphEditor, Op};

#[derive(Parser, Debug)]
#[command(name = "dagsketch", version, about = "Replay edits against a left-to-right DAG layout")]
struct Cli {
    /// Layout config JSON (column_width, node_width, node_height, row_margin)
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Graph document to start from
    #[arg(short = 'g', long = "graph", conflicts_with = "issues")]
    graph: Option<PathBuf>,

    /// Issue list to seed the graph from
    #[arg(short = 'i', long = "issues")]
    issues: Option<PathBuf>,

    /// JSON array of ops to apply, in order
    #[arg(long = "ops")]
    ops: Option<PathBuf>,

    /// Where to write the resulting graph document. Defaults to stdout.
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Write the per-op results as JSON to this file
    #[arg(long = "report")]
    report: Option<PathBuf>,
}

fn read_file(path: &Path) -> Result<String, DocumentError> {
    fs::read_to_string(path).map_err(|source| DocumentError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn write_file(path: &Path, contents: &str) -> Result<(), DocumentError> {
    fs::write(path, contents).map_err(|source| DocumentError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn load_editor(cli: &Cli, config: LayoutConfig) -> Result<GraphEditor, Box<dyn Error>> {
    if let Some(path) = &cli.graph {
        let editor = GraphDocument::load(path)?.into_editor(config)?;
        info!(path = %path.display(), nodes = editor.graph().node_count(), "loaded graph");
        return Ok(editor);
    }
    if let Some(path) = &cli.issues {
        let issues = load_issues(path)?;
        let editor = editor_from_issues(&issues, config)?;
        info!(path = %path.display(), issues = issues.len(), "seeded graph from issues");
        return Ok(editor);
    }
    Ok(GraphEditor::new(config)?)
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = match &cli.config {
        Some(path) => LayoutConfig::load(path)?,
        None => LayoutConfig::default(),
    };
    let mut editor = load_editor(&cli, config)?;

    let ops: Vec<Op> = match &cli.ops {
        Some(path) => serde_json::from_str(&read_file(path)?).map_err(DocumentError::from)?,
        None => Vec::new(),
    };
    let results = editor.apply_ops(&ops)?;
    for (index, (op, result)) in ops.iter().zip(&results).enumerate() {
        match result.status {
            EditStatus::Rejected(reason) => {
                warn!(index, ?op, ?reason, "op rejected");
            }
            status => info!(
                index,
                ?op,
                ?status,
                rev = result.rev,
                added = result.delta.added.len(),
                removed = result.delta.removed.len(),
                updated = result.delta.updated.len(),
                "op applied"
            ),
        }
    }

    if let Some(path) = &cli.report {
        let mut report = serde_json::to_string_pretty(&results).map_err(DocumentError::from)?;
        report.push('\n');
        write_file(path, &report)?;
    }

    let document = GraphDocument::from_graph(editor.graph());
    match &cli.output {
        Some(path) => document.save(path)?,
        None => {
            let mut out = io::stdout().lock();
            writeln!(out, "{}", document.to_json_string_pretty()?)?;
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run(cli) {
        eprintln!("dagsketch: {err}");
        std::process::exit(1);
    }
}
