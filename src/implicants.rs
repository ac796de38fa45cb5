//! Implicants: product terms together with the minterms they cover.

use crate::*;

use bit_set::BitSet;
use std::cmp::Ordering;
use std::fmt;

/// A product term of a Boolean function, with the set of minterms it covers.
///
/// The set of minterms is exactly the set of rows of the truth table matching the pattern.
/// Implicants are never modified: merging two implicants creates a new one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Implicant {
    minterms: BitSet,
    pattern: Pattern,
}

impl Implicant {
    /// Create the implicant covering a single minterm
    pub fn from_minterm(index: usize, width: usize) -> Self {
        let mut minterms = BitSet::default();
        minterms.insert(index);
        Self {
            minterms,
            pattern: Pattern::from_minterm(index, width),
        }
    }

    /// Create an implicant from a pattern, covering all its rows
    pub fn from_pattern(pattern: Pattern) -> Self {
        Self {
            minterms: pattern.minterms(),
            pattern,
        }
    }

    pub fn minterms(&self) -> &BitSet {
        &self.minterms
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Test if a row of the truth table is covered by this implicant
    pub fn covers(&self, index: usize) -> bool {
        self.minterms.contains(index)
    }

    /// Merge two implicants with adjacent patterns (see [Pattern::merge]).
    ///
    /// The merged implicant covers the union of the minterms of both implicants.
    pub fn merge(&self, other: &Self) -> Option<Self> {
        let pattern = self.pattern.merge(&other.pattern)?;
        let mut minterms = self.minterms.clone();
        minterms.union_with(&other.minterms);
        Some(Self { minterms, pattern })
    }
}

/// One implicant per minterm
pub fn seed_implicants(minterms: &BitSet, width: usize) -> Vec<Implicant> {
    minterms
        .iter()
        .map(|m| Implicant::from_minterm(m, width))
        .collect()
}

// Implicants of the same function are identified by their pattern
impl Ord for Implicant {
    fn cmp(&self, other: &Self) -> Ordering {
        self.pattern.cmp(&other.pattern)
    }
}

impl PartialOrd for Implicant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Implicant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} (", self.pattern)?;
        let mut first = true;
        for m in &self.minterms {
            match first {
                true => first = false,
                false => write!(f, ",")?,
            }
            write!(f, "{}", m)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use crate::*;
    use bit_set::BitSet;

    #[test]
    fn merging() -> Result<(), QmcError> {
        let i1 = Implicant::from_minterm(0b010, 3);
        let i2 = Implicant::from_minterm(0b011, 3);
        let i3 = Implicant::from_minterm(0b101, 3);

        let merged = i1.merge(&i2).unwrap();
        assert_eq!(format!("{}", merged), "-10 (2,3)");
        assert_eq!(merged, Implicant::from_pattern("-10".parse()?));
        assert!(merged.covers(3));
        assert!(!merged.covers(1));

        assert_eq!(i1.merge(&i3), None);
        assert_eq!(merged.merge(&i3), None);

        // The inputs are unchanged
        assert_eq!(format!("{}", i1), "010 (2)");
        Ok(())
    }

    #[test]
    fn seeds() {
        let minterms: BitSet = [1usize, 4, 6].iter().copied().collect();
        let seeds = seed_implicants(&minterms, 3);
        let patterns: Vec<String> = seeds.iter().map(|i| format!("{}", i.pattern())).collect();
        assert_eq!(patterns, vec!["100", "001", "011"]);
    }
}
