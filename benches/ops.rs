// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dagsketch-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dagsketch and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::measurement::WallTime;
use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkGroup, Criterion, Throughput,
};

use dagsketch::model::{NodeId, Point};
use dagsketch::ops::{EditResult, GraphEditor, Op};

mod fixtures;
mod profiler;

// Group `ops.apply`; case ids after the `/` stay stable so runs remain comparable.
fn checksum(results: &[EditResult]) -> u64 {
    results.iter().fold(0u64, |acc, result| {
        acc.wrapping_mul(131)
            .wrapping_add(result.rev)
            .wrapping_add(result.delta.added.len() as u64)
            .wrapping_add(result.delta.removed.len() as u64)
            .wrapping_add(result.delta.updated.len() as u64)
    })
}

/// Edges between existing nodes. They always point from a lower to a higher id, which the layered
/// fixture also does, so none of them close a cycle.
fn add_edge_ops(node_count: u64, count: usize) -> Vec<Op> {
    (0..count as u64)
        .map(|idx| {
            let a = idx.wrapping_mul(7) % node_count;
            let mut b = idx.wrapping_mul(7).wrapping_add(3) % node_count;
            if a == b {
                b = (b + 1) % node_count;
            }
            Op::AddEdge {
                source: NodeId::new(a.min(b)),
                target: NodeId::new(a.max(b)),
            }
        })
        .collect()
}

fn add_node_ops(count: usize) -> Vec<Op> {
    (0..count as i64)
        .map(|idx| Op::AddNode {
            title: format!("bench_{idx:04}"),
            description: String::new(),
            url: None,
            at: Some(Point::new((idx % 5) * 280 + 40, idx * 37)),
        })
        .collect()
}

fn bench_batch(
    group: &mut BenchmarkGroup<'_, WallTime>,
    id: &str,
    template: &GraphEditor,
    ops: Vec<Op>,
) {
    group.throughput(Throughput::Elements(ops.len() as u64));
    let template = template.clone();
    group.bench_function(id, move |b| {
        b.iter_batched(
            || template.clone(),
            |mut editor| {
                let results = editor.apply_ops(black_box(&ops)).expect("apply_ops");
                black_box(checksum(&results))
            },
            BatchSize::SmallInput,
        )
    });
}

fn benches_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("ops.apply");

    let layered = fixtures::layered(8, 16);
    let layered_nodes = layered.graph().node_count() as u64;
    bench_batch(&mut group, "add_edge_single", &layered, add_edge_ops(layered_nodes, 1));
    bench_batch(&mut group, "add_edge_batch_10", &layered, add_edge_ops(layered_nodes, 10));
    bench_batch(&mut group, "add_edge_batch_200", &layered, add_edge_ops(layered_nodes, 200));

    bench_batch(&mut group, "add_node_batch_200", &layered, add_node_ops(200));

    let hubs: Vec<Op> = (0..16).map(|raw| Op::RemoveNode { node: NodeId::new(raw * 8) }).collect();
    bench_batch(&mut group, "remove_node_batch_16", &layered, hubs);

    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_ops
}
criterion_main!(benches);
