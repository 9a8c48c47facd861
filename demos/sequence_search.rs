//! Sequence Containment Example
//!
//! Runs the same queries through both matchers.
//!
//! ```bash
//! RUST_LOG=trace cargo run --example sequence_search
//! ```

use alice_sequence::{contains_sequence, Algorithm, SequenceSearch};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== ALICE-Sequence Demo ===\n");

    let haystack = [1, 2, 1, 3, 1, 2, 1, 1];
    println!("Haystack: {haystack:?}\n");

    let patterns: [&[i32]; 5] = [&[1, 2, 1, 1], &[1, 2, 1, 2], &[3, 3, 3], &[3], &[]];

    for pattern in patterns {
        let ac = contains_sequence(&haystack, pattern, Algorithm::ApostolicoCrochemore);
        let bf = contains_sequence(&haystack, pattern, Algorithm::BruteForce);
        println!("  {pattern:?} -> ac={ac} bf={bf}");
    }

    println!("\n--- Words ---\n");
    let log: Vec<&str> = "open read read seek read close".split(' ').collect();
    for query in [&["read", "seek"][..], &["read", "close"], &["seek", "seek"]] {
        println!("  {query:?} -> {}", log.contains_sequence(query));
    }

    println!("\n--- Selector from configuration ---\n");
    let selector = std::env::var("ALICE_SEQUENCE_ALGORITHM").unwrap_or_default();
    let algorithm = Algorithm::from_name_or_default(&selector);
    println!("  ALICE_SEQUENCE_ALGORITHM={selector:?} -> {algorithm}");
    println!(
        "  contains [1, 1]: {}",
        contains_sequence(&haystack, &[1, 1], algorithm)
    );
}
