use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::Rng;
use witnesskit::ds::WitnessRing;
use witnesskit::fingerprint::Fingerprint;
use witnesskit::memory::WitnessMemory;
use witnesskit::traits::Witness;

fn fingerprints(count: usize) -> Vec<Fingerprint> {
    (0..count as u64)
        .map(|i| Fingerprint::of(&i.to_le_bytes()))
        .collect()
}

fn bench_ring_witness(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring_witness");
    for capacity in [256usize, 4096, 65_536] {
        let input = fingerprints(capacity * 2);
        group.throughput(Throughput::Elements(input.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(capacity), &input, |b, input| {
            b.iter(|| {
                let mut ring = WitnessRing::try_new(capacity).unwrap();
                for &fp in input {
                    black_box(ring.witness(fp));
                }
            })
        });
    }
    group.finish();
}

fn bench_memory_fingerprint_vs_bytes(c: &mut Criterion) {
    let mut group = c.benchmark_group("memory_entry_point");
    let payloads: Vec<Vec<u8>> = (0..4096u32).map(|i| vec![i as u8; 256]).collect();
    let digests: Vec<Fingerprint> = payloads.iter().map(|p| Fingerprint::of(p)).collect();
    group.throughput(Throughput::Elements(payloads.len() as u64));

    group.bench_function("bytes", |b| {
        let memory = WitnessMemory::try_new(1024).unwrap();
        b.iter(|| {
            for payload in &payloads {
                black_box(memory.witness(payload));
            }
        })
    });

    group.bench_function("fingerprint", |b| {
        let memory = WitnessMemory::try_new(1024).unwrap();
        b.iter(|| {
            for &fp in &digests {
                black_box(memory.witness_fingerprint(fp));
            }
        })
    });
    group.finish();
}

/// Random draws from a universe twice the window: roughly half familiar.
fn bench_random_repeats(c: &mut Criterion) {
    let capacity = 4096;
    let mut rng = rand::rng();
    let universe = fingerprints(capacity * 2);
    let draws: Vec<Fingerprint> = (0..capacity * 4)
        .map(|_| universe[rng.random_range(0..universe.len())])
        .collect();

    c.bench_function("ring_random_repeats", |b| {
        b.iter(|| {
            let mut ring = WitnessRing::try_new(capacity).unwrap();
            let mut familiar = 0usize;
            for &fp in &draws {
                familiar += ring.witness(fp) as usize;
            }
            black_box(familiar)
        })
    });
}

criterion_group!(
    benches,
    bench_ring_witness,
    bench_memory_fingerprint_vs_bytes,
    bench_random_repeats
);
criterion_main!(benches);
