//! Benchmarks for recovering keys from offsets.
//!
//! # Benchmarks
//!
//! - **`rev`**: brute-force scan for the last `xpos` column.
//! - **`xpos_inverse`**: direct row walk for the same column.
//! - **`columns`**: enumeration of a full `ypos` block.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench lookup
//! ```

use std::hint;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pairmap_core::{Encoding, rev, xpos_inverse};

const SIZES: [usize; 3] = [16, 64, 256];

fn bench_rev(c: &mut Criterion) {
    for nnodes in SIZES {
        let target = Encoding::X.block_len(nnodes) - 1;
        c.bench_with_input(BenchmarkId::new("rev", nnodes), &nnodes, |b, &nnodes| {
            b.iter(|| rev(hint::black_box(nnodes), Encoding::X, hint::black_box(target)));
        });
    }
}

fn bench_xpos_inverse(c: &mut Criterion) {
    for nnodes in SIZES {
        let target = Encoding::X.block_len(nnodes) - 1;
        c.bench_with_input(
            BenchmarkId::new("xpos_inverse", nnodes),
            &nnodes,
            |b, &nnodes| {
                b.iter(|| xpos_inverse(hint::black_box(target), hint::black_box(nnodes)));
            },
        );
    }
}

fn bench_columns(c: &mut Criterion) {
    for nnodes in SIZES {
        c.bench_with_input(BenchmarkId::new("columns", nnodes), &nnodes, |b, &nnodes| {
            b.iter(|| Encoding::Y.columns(hint::black_box(nnodes)).count());
        });
    }
}

criterion_group!(benches, bench_rev, bench_xpos_inverse, bench_columns);
criterion_main!(benches);
