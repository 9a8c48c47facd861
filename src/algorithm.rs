//! Search algorithm selection
//!
//! The caller picks a matcher with an [`Algorithm`] value. `Default` keeps
//! the library policy (brute force), the other two force a concrete matcher.
//!
//! Selectors can also come from configuration text:
//! - [`str::parse`] is strict and reports unknown names
//! - [`Algorithm::from_name_or_default`] falls back to `Default`

use core::fmt;
use core::str::FromStr;

use crate::error::ParseAlgorithmError;

/// Which matcher `contains_sequence` should run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Algorithm {
    /// Library default. Currently resolves to brute force.
    #[default]
    Default,
    /// Linear-time Apostolico-Crochemore scan.
    ApostolicoCrochemore,
    /// Naive scan of every alignment.
    BruteForce,
}

/// Concrete matcher an [`Algorithm`] resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Matcher {
    BruteForce,
    ApostolicoCrochemore,
}

impl Algorithm {
    /// Every recognized selector.
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Default,
        Algorithm::ApostolicoCrochemore,
        Algorithm::BruteForce,
    ];

    /// Resolve the selector to the matcher that will actually run.
    ///
    /// No length-based heuristic: only an explicit `ApostolicoCrochemore`
    /// selects the linear scan.
    #[inline]
    pub fn resolve(self) -> Matcher {
        match self {
            Algorithm::ApostolicoCrochemore => Matcher::ApostolicoCrochemore,
            Algorithm::BruteForce | Algorithm::Default => Matcher::BruteForce,
        }
    }

    /// Canonical kebab-case name.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Default => "default",
            Algorithm::ApostolicoCrochemore => "apostolico-crochemore",
            Algorithm::BruteForce => "brute-force",
        }
    }

    /// Lenient parse: unknown names become `Default`.
    ///
    /// ```
    /// use alice_sequence::Algorithm;
    ///
    /// assert_eq!(Algorithm::from_name_or_default("ac"), Algorithm::ApostolicoCrochemore);
    /// assert_eq!(Algorithm::from_name_or_default("boyer-moore"), Algorithm::Default);
    /// ```
    pub fn from_name_or_default(name: &str) -> Self {
        match name.parse::<Algorithm>() {
            Ok(algorithm) => algorithm,
            Err(err) => {
                tracing::warn!(%err, "falling back to default search algorithm");
                Algorithm::Default
            }
        }
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let eq = |candidate: &str| name.eq_ignore_ascii_case(candidate);

        if name.is_empty() || eq("default") {
            Ok(Algorithm::Default)
        } else if eq("apostolico-crochemore") || eq("apostolicocrochemore") || eq("ac") {
            Ok(Algorithm::ApostolicoCrochemore)
        } else if eq("brute-force") || eq("bruteforce") || eq("bf") {
            Ok(Algorithm::BruteForce)
        } else {
            Err(ParseAlgorithmError::new(name))
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
