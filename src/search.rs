//! Sequence Containment (Dispatch)
//!
//! **Entry point**: [`contains_sequence`]
//! - Trivial patterns (empty, too long, one element) short-circuit
//! - Everything else goes to the matcher the [`Algorithm`] resolves to
//!
//! Anchored predicates ([`starts_with_sequence`], [`ends_with_sequence`])
//! live here too; they never need a table.

use crate::algorithm::{Algorithm, Matcher};
use crate::brute::brute_force_search;
use crate::scanner::apostolico_crochemore_search;

/// Does `pattern` occur as a contiguous run inside `haystack`?
///
/// Every [`Algorithm`] returns the same answer; the selector only changes
/// the cost.
///
/// # Example
/// ```
/// use alice_sequence::{contains_sequence, Algorithm};
///
/// let haystack = [1, 2, 1, 2, 1, 2, 3];
/// assert!(contains_sequence(&haystack, &[1, 2, 3], Algorithm::ApostolicoCrochemore));
/// assert!(!contains_sequence(&haystack, &[2, 1, 1], Algorithm::BruteForce));
/// assert!(contains_sequence(&haystack, &[], Algorithm::Default));
/// ```
pub fn contains_sequence<T: PartialEq>(haystack: &[T], pattern: &[T], algorithm: Algorithm) -> bool {
    if haystack.len() < pattern.len() {
        tracing::trace!(
            haystack_len = haystack.len(),
            pattern_len = pattern.len(),
            "pattern longer than haystack"
        );
        return false;
    }

    match pattern {
        [] => true,
        [element] => contains(haystack, element),
        _ => {
            let matcher = algorithm.resolve();
            tracing::trace!(
                ?algorithm,
                ?matcher,
                haystack_len = haystack.len(),
                pattern_len = pattern.len(),
                "sequence search"
            );
            match matcher {
                Matcher::ApostolicoCrochemore => apostolico_crochemore_search(haystack, pattern),
                Matcher::BruteForce => brute_force_search(haystack, pattern),
            }
        }
    }
}

/// Does `haystack` contain `element` anywhere?
#[inline]
pub fn contains<T: PartialEq>(haystack: &[T], element: &T) -> bool {
    haystack.iter().any(|candidate| candidate == element)
}

/// Does `haystack` begin with `pattern`?
///
/// ```
/// use alice_sequence::starts_with_sequence;
///
/// assert!(starts_with_sequence(b"abracadabra", b"abra"));
/// assert!(!starts_with_sequence(b"abracadabra", b"cad"));
/// ```
pub fn starts_with_sequence<T: PartialEq>(haystack: &[T], pattern: &[T]) -> bool {
    if haystack.len() < pattern.len() {
        return false;
    }
    haystack.iter().zip(pattern).all(|(h, p)| h == p)
}

/// Does `haystack` end with `pattern`?
///
/// Compares back to front, so a mismatch near the end exits early.
pub fn ends_with_sequence<T: PartialEq>(haystack: &[T], pattern: &[T]) -> bool {
    let Some(offset) = haystack.len().checked_sub(pattern.len()) else {
        return false;
    };
    haystack[offset..]
        .iter()
        .rev()
        .zip(pattern.iter().rev())
        .all(|(h, p)| h == p)
}

/// Method syntax for the containment predicates.
///
/// Implemented for slices, so `Vec<T>` and arrays get it through deref.
///
/// ```
/// use alice_sequence::{Algorithm, SequenceSearch};
///
/// let log = vec!["open", "read", "read", "close"];
/// assert!(log.contains_sequence(&["read", "close"]));
/// assert!(log.contains_sequence_with(&["read", "read"], Algorithm::ApostolicoCrochemore));
/// assert!(log.starts_with_sequence(&["open"]));
/// assert!(log.ends_with_sequence(&["close"]));
/// ```
pub trait SequenceSearch<T: PartialEq> {
    /// [`contains_sequence`] with [`Algorithm::Default`].
    fn contains_sequence(&self, pattern: &[T]) -> bool;

    /// [`contains_sequence`] with an explicit selector.
    fn contains_sequence_with(&self, pattern: &[T], algorithm: Algorithm) -> bool;

    /// [`starts_with_sequence`]
    fn starts_with_sequence(&self, pattern: &[T]) -> bool;

    /// [`ends_with_sequence`]
    fn ends_with_sequence(&self, pattern: &[T]) -> bool;
}

impl<T: PartialEq> SequenceSearch<T> for [T] {
    #[inline]
    fn contains_sequence(&self, pattern: &[T]) -> bool {
        contains_sequence(self, pattern, Algorithm::Default)
    }

    #[inline]
    fn contains_sequence_with(&self, pattern: &[T], algorithm: Algorithm) -> bool {
        contains_sequence(self, pattern, algorithm)
    }

    #[inline]
    fn starts_with_sequence(&self, pattern: &[T]) -> bool {
        starts_with_sequence(self, pattern)
    }

    #[inline]
    fn ends_with_sequence(&self, pattern: &[T]) -> bool {
        ends_with_sequence(self, pattern)
    }
}
