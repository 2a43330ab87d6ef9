#![no_main]

use std::collections::VecDeque;

use libfuzzer_sys::fuzz_target;
use witnesskit::ds::WitnessRing;
use witnesskit::fingerprint::Fingerprint;

// Differential fuzz against a naive "last N writes" window
//
// The ring must report familiar exactly when the fingerprint is among the
// previous `capacity` writes, and must hold them in the same order.
fuzz_target!(|data: &[u8]| {
    let Some((&first, rest)) = data.split_first() else {
        return;
    };

    let capacity = (first as usize % 16).max(1);
    let Ok(mut ring) = WitnessRing::try_new(capacity) else {
        return;
    };
    let mut window: VecDeque<Fingerprint> = VecDeque::with_capacity(capacity);

    for &byte in rest {
        let fp = Fingerprint::of(&[byte % 24]);
        let expected = window.contains(&fp);
        assert_eq!(ring.witness(fp), expected);

        window.push_back(fp);
        if window.len() > capacity {
            window.pop_front();
        }
        assert!(ring.iter().eq(window.iter()));
    }
});
