//! DHAT heap profiler for witnesskit.
//!
//! Run with: cargo run --bin dhat_profile --release --features dhat-heap
//! View results: Open dhat-heap.json in <https://nnethercote.github.io/dh_view/dh_view.html>

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use witnesskit::fingerprint::Fingerprint;
use witnesskit::prelude::{ShardedWitnessMemory, Witness, WitnessMemory};

/// Simple XorShift64 RNG for deterministic workloads.
struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    fn next_f64(&mut self) -> f64 {
        const SCALE: f64 = 1.0 / (u64::MAX as f64);
        (self.next_u64() as f64) * SCALE
    }
}

/// Hotset workload: 90% of witnesses repeat 10% of the content universe.
fn hotset_workload<W: Witness>(memory: &W, operations: usize, universe: u64, seed: u64) -> usize {
    let mut rng = XorShift64::new(seed);
    let hot_size = (universe as f64 * 0.1) as u64;
    let mut familiar = 0;

    for _ in 0..operations {
        let key = if rng.next_f64() < 0.9 {
            rng.next_u64() % hot_size
        } else {
            hot_size + (rng.next_u64() % (universe - hot_size))
        };
        if memory.witness(&key.to_le_bytes()) {
            familiar += 1;
        }
    }
    familiar
}

/// Churn: every witness is new content, so every write evicts once full.
fn churn_workload<W: Witness>(memory: &W, operations: usize) {
    for i in 0..operations as u64 {
        memory.witness_fingerprint(Fingerprint::of(&(u64::MAX - i).to_le_bytes()));
    }
}

fn profile_single() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Profiling WitnessMemory ===");
    let memory = WitnessMemory::try_new(4096)?;

    let stats = dhat::HeapStats::get();
    println!("  After construction: {} bytes live", stats.curr_bytes);

    let familiar = hotset_workload(&memory, 100_000, 16_384, 42);
    churn_workload(&memory, 25_000);

    let stats = dhat::HeapStats::get();
    println!("  After workload: {} bytes live", stats.curr_bytes);
    println!("  Familiar: {}  Final size: {}", familiar, memory.len());
    Ok(())
}

fn profile_sharded() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Profiling ShardedWitnessMemory ===");
    let memory = ShardedWitnessMemory::try_new(8, 512)?;

    let familiar = hotset_workload(&memory, 100_000, 16_384, 7);
    churn_workload(&memory, 25_000);

    println!("  Familiar: {}  Final size: {}", familiar, memory.len());
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _profiler = dhat::Profiler::new_heap();

    println!("witnesskit DHAT Heap Profiling");
    println!("==============================\n");

    profile_single()?;
    profile_sharded()?;

    println!("\n==============================");
    println!("Profiling complete!");
    println!(
        "View results: Open dhat-heap.json in <https://nnethercote.github.io/dh_view/dh_view.html>"
    );
    Ok(())
}
