//! Brute-Force Matcher
//!
//! Tries every alignment left to right and abandons it on the first
//! mismatch. O(N × M) worst case, no auxiliary storage.

/// Naive scan: does `pattern` occur contiguously in `haystack`?
///
/// An empty pattern matches at offset 0 of any haystack.
#[inline]
pub fn brute_force_search<T: PartialEq>(haystack: &[T], pattern: &[T]) -> bool {
    if pattern.len() > haystack.len() {
        return false;
    }

    let mut idx = 0;
    while haystack.len() - idx >= pattern.len() {
        if pattern
            .iter()
            .zip(&haystack[idx..])
            .all(|(p, h)| p == h)
        {
            return true;
        }
        idx += 1;
    }

    false
}
