use std::sync::Arc;
use std::thread;

use witnesskit::prelude::{Witness, WitnessBuilder};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let seen = match WitnessBuilder::new(4096).shards(8).try_build_sharded() {
        Ok(memory) => Arc::new(memory),
        Err(err) => {
            eprintln!("bad configuration: {}", err);
            return;
        },
    };

    // Four workers receive overlapping copies of the same 1000 messages.
    let handles: Vec<_> = (0..4u32)
        .map(|worker| {
            let seen = Arc::clone(&seen);
            thread::spawn(move || {
                let mut forwarded = 0;
                for i in 0..1000u32 {
                    let msg = format!("msg-{}", (i + worker * 250) % 1000);
                    if !seen.witness(msg.as_bytes()) {
                        forwarded += 1;
                    }
                }
                forwarded
            })
        })
        .collect();

    let forwarded: u32 = handles.into_iter().filter_map(|h| h.join().ok()).sum();
    println!("forwarded {} of 4000 deliveries (1000 unique)", forwarded);
}
