//! Failure-Table Builder
//!
//! Preprocessing for the Apostolico-Crochemore scan:
//! - `next`: the strong KMP failure function, `len(pattern) + 1` entries
//! - `ell`: length of the pattern's leading run of equal elements
//!
//! "Strong" means a fallback position never holds the same element as the
//! position that just failed, so the scanner does not retry a comparison
//! that is already known to fail.

extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;

/// Precomputed shift table for one pattern.
///
/// Built and consumed inside a single search; never handed to callers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct FailureTable {
    /// `next[0] == -1`, `next[i] < i`
    next: Vec<isize>,
    /// Period prefix length, `0 <= ell < len(pattern)`
    ell: usize,
}

impl FailureTable {
    /// Build the table for `pattern`.
    ///
    /// Intended for patterns of length >= 2; shorter patterns never reach
    /// the scanner but still produce a well-formed table.
    pub(crate) fn build<T: PartialEq>(pattern: &[T]) -> Self {
        Self {
            next: strong_failure_function(pattern),
            ell: period_prefix(pattern),
        }
    }

    #[inline(always)]
    pub(crate) fn ell(&self) -> usize {
        self.ell
    }

    /// Raw fallback value for prefix length `i`.
    #[inline(always)]
    pub(crate) fn next(&self, i: usize) -> isize {
        self.next[i]
    }

    /// Alignment shift after matching `i` elements: `i - next[i]`.
    ///
    /// Always >= 1, which is what makes the scan terminate.
    #[inline(always)]
    pub(crate) fn shift(&self, i: usize) -> usize {
        (i as isize - self.next[i]) as usize
    }

    /// Number of entries, `len(pattern) + 1`.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.next.len()
    }
}

/// Strong failure function.
///
/// `x` walks the pattern, `y` is the length of the current border. When the
/// element after the border equals the element after the prefix, the entry
/// collapses to the border's own entry.
fn strong_failure_function<T: PartialEq>(pattern: &[T]) -> Vec<isize> {
    let m = pattern.len();
    let mut next = vec![0isize; m + 1];
    next[0] = -1;

    let mut x = 0usize;
    let mut y: isize = -1;
    while x < m {
        while y > -1 && (x == m || pattern[x] != pattern[y as usize]) {
            y = next[y as usize];
        }
        x += 1;
        y += 1;
        next[x] = if x != m && pattern[x] == pattern[y as usize] {
            next[y as usize]
        } else {
            y
        };
    }

    next
}

/// Length of the leading run `pattern[0] == pattern[1] == ...`.
///
/// A pattern made of a single repeated element yields 0: the suffix phase
/// then covers the whole pattern.
pub(crate) fn period_prefix<T: PartialEq>(pattern: &[T]) -> usize {
    let mut ell = 1;
    while ell < pattern.len() && pattern[ell - 1] == pattern[ell] {
        ell += 1;
    }
    if ell >= pattern.len() {
        0
    } else {
        ell
    }
}
