//! Selection of a minimal set of prime implicants

use crate::*;

use bit_set::BitSet;
use itertools::Itertools;
use log::trace;
use std::fmt;
use std::slice::Iter;

/// A set of prime implicants covering all minterms of a function.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cover {
    implicants: Vec<Implicant>,
}

impl Cover {
    /// Find a cover with the smallest number of prime implicants.
    ///
    /// Subsets of the primes are tried by increasing size, and for each size in the order of
    /// [Itertools::combinations] over the list of primes. The first subset whose minterms include
    /// all the target minterms is selected: the result has a minimal number of product terms
    /// (but not necessarily a minimal number of literals) and is deterministic for a given list of primes.
    ///
    /// The search is exponential in the number of primes: at most
    /// [cover_candidates(primes.len())](tools::cover_candidates) subsets are tested.
    pub fn minimal(primes: &Primes, minterms: &BitSet) -> Self {
        if minterms.is_empty() {
            return Self::default();
        }

        for size in 1..=primes.len() {
            trace!("searching covers of size {}", size);
            for candidate in primes.iter().combinations(size) {
                let mut covered = BitSet::default();
                for implicant in &candidate {
                    covered.union_with(implicant.minterms());
                }
                if covered.is_superset(minterms) {
                    return Self {
                        implicants: candidate.into_iter().cloned().collect(),
                    };
                }
            }
        }

        // All prime implicants together always cover the function
        Self {
            implicants: primes.iter().cloned().collect(),
        }
    }

    /// Get the number of product terms
    pub fn len(&self) -> usize {
        self.implicants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.implicants.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Implicant> {
        self.implicants.iter()
    }

    /// Test if a row of the truth table is covered by at least one implicant
    pub fn covers(&self, index: usize) -> bool {
        self.implicants.iter().any(|i| i.covers(index))
    }

    /// Number of literals over all product terms
    pub fn literal_count(&self) -> usize {
        self.implicants.iter().map(|i| i.pattern().fixed_count()).sum()
    }
}

impl<'a> IntoIterator for &'a Cover {
    type Item = &'a Implicant;
    type IntoIter = Iter<'a, Implicant>;

    fn into_iter(self) -> Self::IntoIter {
        self.implicants.iter()
    }
}

impl fmt::Display for Cover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for p in &self.implicants {
            writeln!(f, "{}", p)?;
        }
        Ok(())
    }
}
