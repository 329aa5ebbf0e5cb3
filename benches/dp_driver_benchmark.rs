// benches/dp_driver_benchmark.rs
//
// The full DP driver processes ~10^8 (board, piece) rows and isn't a good
// fit for criterion's repeated-sampling model (a single run already takes
// minutes). Instead this benchmarks the per-state update kernel -- the
// "35% of the core" piece the spec calls the heart of the DP -- on
// synthetic boards at a few representative population levels, the same
// way the chess engine's `move_generation_benchmark` isolates move
// generation from a full search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::sync::Mutex;

use tessera_solver::board::{Board, CELLS};
use tessera_solver::dp::kernel;
use tessera_solver::dp::table::DpTable;

fn boards_at_population(population: u32, count: usize) -> Vec<Board> {
    let mut boards = Vec::with_capacity(count);
    let mut bits: u32 = (1u32 << population) - 1;
    while boards.len() < count && bits <= tessera_solver::board::TERMINAL {
        if bits.count_ones() == population {
            boards.push(Board::new(bits));
        }
        if bits == 0 {
            break;
        }
        // Gosper's hack: next bit pattern with the same popcount.
        let c = bits & bits.wrapping_neg();
        let r = bits + c;
        bits = (((r ^ bits) >> 2) / c) | r;
    }
    boards
}

fn kernel_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("dp kernel::process");

    for &population in &[4u32, 12, 20] {
        let boards = boards_at_population(population, 64);
        let table = DpTable::new();
        let stacks: Vec<Mutex<Vec<u32>>> = (0..=CELLS).map(|_| Mutex::new(Vec::new())).collect();

        group.bench_with_input(
            BenchmarkId::new("population", population),
            &boards,
            |b, boards| {
                b.iter(|| {
                    for &board in boards {
                        kernel::process(black_box(&table), board, population, &stacks);
                    }
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, kernel_benchmark);
criterion_main!(benches);
