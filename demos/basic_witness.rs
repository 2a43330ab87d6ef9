use witnesskit::prelude::{Fingerprint, Witness, WitnessMemory};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Remember the last 3 messages
    let seen = match WitnessMemory::try_new(3) {
        Ok(memory) => memory,
        Err(err) => {
            eprintln!("bad configuration: {}", err);
            return;
        },
    };

    for msg in ["alpha", "beta", "alpha", "gamma", "delta", "alpha", "beta"] {
        if seen.witness(msg.as_bytes()) {
            println!("{:>6}: duplicate, dropped", msg);
        } else {
            println!("{:>6}: new, forwarded", msg);
        }
    }

    // Callers that already hold the digest skip hashing.
    let digest = Fingerprint::of(b"beta");
    println!("beta by digest familiar: {}", seen.witness_fingerprint(digest));
}
