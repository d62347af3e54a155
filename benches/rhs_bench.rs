//! Benchmarks for the advection right-hand side.
//!
//! Run with: `cargo bench --bench rhs_bench`
//!
//! Compares constant and limited linear reconstruction at several grid sizes.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use fv_rs::{
    AdvectionOperator, DtPolicy, Field1D, Grid1D, InitialCondition, Reconstruction, SlopeLimiter,
};

fn schemes() -> [(&'static str, Reconstruction); 4] {
    [
        ("constant", Reconstruction::Constant),
        ("mc", Reconstruction::Linear(SlopeLimiter::Mc)),
        ("superbee", Reconstruction::Linear(SlopeLimiter::SuperBee)),
        ("tvd", Reconstruction::Linear(SlopeLimiter::Tvd)),
    ]
}

fn bench_rhs(c: &mut Criterion) {
    let mut group = c.benchmark_group("advection_rhs");

    for n_cells in [256, 4096, 65536] {
        let grid = Grid1D::uniform(0.0, 1.0, n_cells, 1).unwrap();

        for (name, scheme) in schemes() {
            let mut op = AdvectionOperator::new(&grid, 1.0, 0.8, scheme).unwrap();
            let mut u = InitialCondition::WavePacket.sample(&grid);
            op.apply_boundary(&mut u);
            let mut k = Field1D::zeros(&grid);
            let dt = op.stable_dt();

            group.bench_with_input(BenchmarkId::new(name, n_cells), &n_cells, |b, _| {
                b.iter(|| op.rhs(black_box(&u), DtPolicy::Reuse(dt), &mut k));
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_rhs);
criterion_main!(benches);
