//! Apostolico-Crochemore Scanner
//!
//! **Core Algorithm**: KMP with a split comparison
//! - The pattern is cut at `ell`, the end of its leading run of equal elements
//! - Each alignment first compares the suffix `pattern[ell..]`, left to right
//! - Only a fully matched suffix triggers a compare of the prefix `pattern[..ell]`
//! - Shifts come from the strong failure function
//!
//! Complexity: O(N + M) time, O(M) extra space for the table.
//! At most 1.5 × N element comparisons during the scan.

use crate::table::FailureTable;

/// Position of one scan, `(i, j, k)` in the usual presentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Cursor {
    /// `i`: elements of the pattern matched so far, counted from 0 and
    /// never below `ell` while the suffix phase runs
    pub(crate) suffix_match_len: usize,
    /// `j`: haystack offset the pattern is aligned to
    pub(crate) alignment: usize,
    /// `k`: elements of the period prefix known to match at `alignment`
    pub(crate) period_match_len: usize,
}

impl Cursor {
    /// Start of a scan: suffix phase at `ell`, alignment 0, nothing matched.
    #[inline]
    pub(crate) fn new(ell: usize) -> Self {
        Self {
            suffix_match_len: ell,
            alignment: 0,
            period_match_len: 0,
        }
    }

    /// Extend the suffix match as far as it goes.
    ///
    /// Returns true once the whole suffix `pattern[ell..]` matches.
    #[inline(always)]
    pub(crate) fn match_suffix<T: PartialEq>(&mut self, haystack: &[T], pattern: &[T]) -> bool {
        let window = &haystack[self.alignment..];
        while self.suffix_match_len < pattern.len()
            && pattern[self.suffix_match_len] == window[self.suffix_match_len]
        {
            self.suffix_match_len += 1;
        }
        self.suffix_match_len >= pattern.len()
    }

    /// Extend the period prefix match. Returns true on a full match.
    #[inline(always)]
    pub(crate) fn match_prefix<T: PartialEq>(
        &mut self,
        haystack: &[T],
        pattern: &[T],
        ell: usize,
    ) -> bool {
        let window = &haystack[self.alignment..];
        while self.period_match_len < ell
            && pattern[self.period_match_len] == window[self.period_match_len]
        {
            self.period_match_len += 1;
        }
        self.period_match_len >= ell
    }

    /// Shift to the next alignment and carry over what is already known.
    #[inline(always)]
    pub(crate) fn advance(&mut self, table: &FailureTable) {
        let i = self.suffix_match_len;
        let ell = table.ell();
        let fallback = table.next(i);

        self.alignment += table.shift(i);

        if i == ell {
            // Nothing past the run matched; the run itself slides by one.
            self.period_match_len = self.period_match_len.saturating_sub(1);
        } else if fallback <= ell as isize {
            self.period_match_len = fallback.max(0) as usize;
            self.suffix_match_len = ell;
        } else {
            self.period_match_len = ell;
            self.suffix_match_len = fallback as usize;
        }
    }
}

/// Run the scan with a table built from the same `pattern`.
///
/// Requires `haystack.len() >= pattern.len() >= 1`.
fn scan<T: PartialEq>(haystack: &[T], pattern: &[T], table: &FailureTable) -> bool {
    let last_alignment = haystack.len() - pattern.len();
    let ell = table.ell();
    let mut cursor = Cursor::new(ell);

    while cursor.alignment <= last_alignment {
        if cursor.match_suffix(haystack, pattern) && cursor.match_prefix(haystack, pattern, ell) {
            return true;
        }
        cursor.advance(table);
    }

    false
}

/// Linear-time containment check.
///
/// The failure table lives only for the duration of this call.
///
/// # Complexity
/// - Preprocessing: O(M)
/// - Scan: O(N)
pub fn apostolico_crochemore_search<T: PartialEq>(haystack: &[T], pattern: &[T]) -> bool {
    if pattern.len() > haystack.len() {
        return false;
    }
    if pattern.is_empty() {
        return true;
    }

    let table = FailureTable::build(pattern);
    scan(haystack, pattern, &table)
}
