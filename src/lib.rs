//! # ALICE-Sequence
//!
//! **Exact sequence containment over any `PartialEq` element type**
//!
//! > "Never compare the same element twice for the same reason."
//!
//! ## Architecture
//!
//! - **Dispatch**: trivial patterns short-circuit, the rest go to a matcher
//! - **Brute Force**: every alignment, abandon on first mismatch
//! - **Apostolico-Crochemore**: strong failure function + split suffix/prefix compare
//!
//! ## Performance
//!
//! | Matcher | Preprocess | Search | Space |
//! |---------|------------|--------|-------|
//! | Brute Force | - | O(N × M) | **O(1)** |
//! | Apostolico-Crochemore | O(M) | **O(N)** | O(M) |
//!
//! `Algorithm::Default` runs brute force. Ask for the linear scan explicitly
//! when patterns are long or highly periodic.
//!
//! ## Example
//!
//! ```
//! use alice_sequence::{contains_sequence, Algorithm, SequenceSearch};
//!
//! let haystack = [1, 2, 1, 3, 1, 2, 1, 1];
//!
//! assert!(contains_sequence(&haystack, &[1, 2, 1, 1], Algorithm::ApostolicoCrochemore));
//! assert!(!contains_sequence(&haystack, &[1, 2, 1, 2], Algorithm::BruteForce));
//!
//! // Method syntax, default algorithm
//! assert!(haystack.contains_sequence(&[3, 1]));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod algorithm;
pub mod brute;
pub mod error;
pub mod scanner;
pub mod search;
mod table;

pub use algorithm::{Algorithm, Matcher};
pub use brute::brute_force_search;
pub use error::ParseAlgorithmError;
pub use scanner::apostolico_crochemore_search;
pub use search::{
    contains, contains_sequence, ends_with_sequence, starts_with_sequence, SequenceSearch,
};

/// Version
pub const VERSION: &str = "0.1.0";
