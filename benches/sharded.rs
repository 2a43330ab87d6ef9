//! Contention: one lock vs fingerprint-prefix shards.
//!
//! Run with: `cargo bench --bench sharded`

use std::sync::{Arc, Barrier};
use std::thread;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use witnesskit::fingerprint::Fingerprint;
use witnesskit::memory::WitnessMemory;
use witnesskit::sharded::ShardedWitnessMemory;
use witnesskit::traits::Witness;

const OPS_PER_THREAD: u64 = 10_000;
const CAPACITY: usize = 16_384;

fn run_threads<W: Witness + 'static>(memory: Arc<W>, threads: usize) {
    let barrier = Arc::new(Barrier::new(threads));
    let handles: Vec<_> = (0..threads as u64)
        .map(|t| {
            let memory = Arc::clone(&memory);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for i in 0..OPS_PER_THREAD {
                    let key = (i * 7 + t) % (CAPACITY as u64 * 2);
                    memory.witness_fingerprint(Fingerprint::of(&key.to_le_bytes()));
                }
            })
        })
        .collect();
    for handle in handles {
        let _ = handle.join();
    }
}

fn bench_contention(c: &mut Criterion) {
    let mut group = c.benchmark_group("contention");
    group.sample_size(20);

    for threads in [1usize, 4, 8] {
        group.bench_with_input(BenchmarkId::new("single_lock", threads), &threads, |b, &n| {
            b.iter(|| run_threads(Arc::new(WitnessMemory::try_new(CAPACITY).unwrap()), n))
        });
        group.bench_with_input(BenchmarkId::new("sharded_16", threads), &threads, |b, &n| {
            b.iter(|| {
                run_threads(
                    Arc::new(ShardedWitnessMemory::try_new(16, CAPACITY / 16).unwrap()),
                    n,
                )
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_contention);
criterion_main!(benches);
