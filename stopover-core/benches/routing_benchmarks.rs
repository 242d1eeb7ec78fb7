//! Criterion benchmarks for shortest-path and multi-stop queries.
//!
//! Measures both search strategies on square grid networks of increasing
//! size, plus greedy and exhaustive sequencing of a fixed destination set.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package stopover-core
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use stopover_core::{
    Connection, ExhaustivePlanner, Graph, MultiStopRouter, Point, RouterConfig, SearchConfig,
    SearchStrategy, ShortestPathEngine,
};

/// Grid side lengths: 100, 400 and 1600 points.
const GRID_SIDES: &[u32] = &[10, 20, 40];

fn cell(row: u32, col: u32) -> String {
    format!("r{row}c{col}")
}

/// Square grid with cheaper horizontal than vertical links.
fn grid(side: u32) -> Graph {
    let mut graph = Graph::new();
    for row in 0..side {
        for col in 0..side {
            graph.insert_point(Point::unnamed(cell(row, col), f64::from(row), f64::from(col)));
            if col > 0 {
                graph.connect(Connection::new(cell(row, col - 1), cell(row, col), 1.0, 2.0));
            }
            if row > 0 {
                graph.connect(Connection::new(cell(row - 1, col), cell(row, col), 1.5, 2.0));
            }
        }
    }
    graph
}

/// Corner-to-corner queries with each strategy.
fn bench_shortest_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_path");

    for &side in GRID_SIDES {
        let graph = grid(side);
        let start = cell(0, 0);
        let end = cell(side - 1, side - 1);
        group.throughput(Throughput::Elements(u64::from(side * side)));

        for strategy in [SearchStrategy::LinearScan, SearchStrategy::BinaryHeap] {
            let Ok(engine) = ShortestPathEngine::with_config(&graph, SearchConfig { strategy })
            else {
                continue;
            };
            group.bench_with_input(
                BenchmarkId::new(format!("{strategy:?}"), side * side),
                &(start.as_str(), end.as_str()),
                |b, &(from, to)| b.iter(|| engine.shortest_path(black_box(from), black_box(to))),
            );
        }
    }

    group.finish();
}

/// Six scattered destinations sequenced greedily and exhaustively.
fn bench_tour(c: &mut Criterion) {
    let mut group = c.benchmark_group("tour");
    let graph = grid(20);
    let destinations = [
        cell(19, 0),
        cell(3, 17),
        cell(10, 10),
        cell(0, 19),
        cell(15, 4),
        cell(7, 12),
    ];
    let config = RouterConfig {
        search: SearchConfig {
            strategy: SearchStrategy::BinaryHeap,
        },
        ..RouterConfig::default()
    };
    let Ok(engine) = ShortestPathEngine::with_config(&graph, config.search) else {
        return;
    };

    let greedy = MultiStopRouter::new();
    group.bench_function("greedy", |b| {
        b.iter(|| greedy.plan_with(&engine, black_box("r0c0"), &destinations));
    });

    let exhaustive = MultiStopRouter::with_planner(ExhaustivePlanner::default(), config);
    group.bench_function("exhaustive", |b| {
        b.iter(|| exhaustive.plan_with(&engine, black_box("r0c0"), &destinations));
    });

    group.finish();
}

criterion_group!(benches, bench_shortest_path, bench_tour);
criterion_main!(benches);
