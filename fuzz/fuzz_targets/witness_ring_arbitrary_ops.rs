#![no_main]

use libfuzzer_sys::fuzz_target;
use witnesskit::ds::WitnessRing;
use witnesskit::fingerprint::Fingerprint;

// Fuzz arbitrary operation sequences on WitnessRing
//
// Mixes witness, record, contains and iter over a small key universe so
// repeats, self-overwrites and retained evictions all occur, then checks
// ring/index consistency after every step.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    // First byte picks capacity (1-32)
    let capacity = (data[0] as usize % 32).max(1);
    let Ok(mut ring) = WitnessRing::try_new(capacity) else {
        return;
    };

    let mut idx = 1;
    while idx + 1 < data.len() {
        let op = data[idx] % 4;
        let fp = Fingerprint::of(&[data[idx + 1] % 48]);

        match op {
            0 => {
                let before = ring.contains(&fp);
                assert_eq!(ring.witness(fp), before);
                assert!(ring.contains(&fp));
            },
            1 => {
                let was_full = ring.is_full();
                let outcome = ring.record(fp);
                assert_eq!(outcome.evicted.is_some(), was_full);
            },
            2 => {
                let _ = ring.contains(&fp);
            },
            _ => {
                assert_eq!(ring.iter().count(), ring.len());
            },
        }

        assert!(ring.len() <= ring.capacity());
        assert!(ring.distinct_len() <= ring.len());
        if let Err(err) = ring.check_invariants() {
            panic!("invariant violated: {}", err);
        }

        idx += 2;
    }
});
