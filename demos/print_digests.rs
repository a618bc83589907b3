//! Print every variant's digest of a fixed message with wall-clock timing.
//!
//! Run with `cargo run --example print_digests --release`.

use std::time::Instant;

use sha2kit::Algorithm;

const MESSAGE: &[u8] = b"The quick brown fox jumps over the lazy dog";

fn main() {
    println!("input: {} bytes", MESSAGE.len());
    println!("-----------------------------------------------------------------");

    for algorithm in Algorithm::ALL {
        let start = Instant::now();
        let digest = algorithm.digest(MESSAGE);
        let elapsed = start.elapsed();
        println!(
            "{:<12} {digest}  ({} ns)",
            algorithm.name(),
            elapsed.as_nanos()
        );
    }
}
