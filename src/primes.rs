use crate::*;

use bit_set::BitSet;
use itertools::Itertools;
use log::trace;
use std::fmt;
use std::slice::Iter;
use std::vec::IntoIter;

/// The prime implicants of a Boolean function.
///
/// A prime implicant can not be merged with another implicant of the function into a more
/// general implicant. Primes are obtained by merging implicants round after round,
/// starting from one implicant per minterm: in each round, all pairs of adjacent implicants
/// are merged and the implicants which were not part of any merge are prime.
///
/// The list is sorted by pattern (see [Pattern]), which makes the result independent of the
/// order in which merges were discovered.
///
/// The number of rounds is bounded by the number of variables, each round compares all pairs
/// of the implicants produced by the previous round.
#[derive(Clone, Debug, Default)]
pub struct Primes {
    implicants: Vec<Implicant>,
}

impl Primes {
    /// Compute the prime implicants of the function defined by a set of minterms
    pub fn from_minterms(minterms: &BitSet, width: usize) -> Self {
        Self::from(seed_implicants(minterms, width))
    }

    /// Get the number of prime implicants
    pub fn len(&self) -> usize {
        self.implicants.len()
    }

    /// Return whether there are no prime implicant (the function is always false)
    pub fn is_empty(&self) -> bool {
        self.implicants.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Implicant> {
        self.implicants.iter()
    }

    pub fn as_slice(&self) -> &[Implicant] {
        &self.implicants
    }
}

impl From<Vec<Implicant>> for Primes {
    fn from(implicants: Vec<Implicant>) -> Self {
        let mut primes = vec![];
        let mut current = implicants;
        let mut round = 0;

        loop {
            let mut used = vec![false; current.len()];
            let mut created = vec![];
            for ((i, a), (j, b)) in current.iter().enumerate().tuple_combinations() {
                if let Some(merged) = a.merge(b) {
                    created.push(merged);
                    used[i] = true;
                    used[j] = true;
                }
            }

            let before = primes.len();
            primes.extend(
                current
                    .into_iter()
                    .zip(used)
                    .filter(|(_, used)| !used)
                    .map(|(implicant, _)| implicant),
            );
            trace!(
                "round {}: {} merges, {} new primes",
                round,
                created.len(),
                primes.len() - before
            );

            if created.is_empty() {
                break;
            }

            // The same implicant is usually produced by several pairs
            created.sort();
            created.dedup();
            current = created;
            round += 1;
        }

        primes.sort();
        Self { implicants: primes }
    }
}

impl<'a> IntoIterator for &'a Primes {
    type Item = &'a Implicant;
    type IntoIter = Iter<'a, Implicant>;

    fn into_iter(self) -> Self::IntoIter {
        self.implicants.iter()
    }
}

impl IntoIterator for Primes {
    type Item = Implicant;
    type IntoIter = IntoIter<Implicant>;

    fn into_iter(self) -> Self::IntoIter {
        self.implicants.into_iter()
    }
}

impl fmt::Display for Primes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for p in &self.implicants {
            writeln!(f, "{}", p)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::*;
    use bit_set::BitSet;

    fn primes_of(minterms: &[usize], width: usize) -> Vec<String> {
        let minterms: BitSet = minterms.iter().copied().collect();
        Primes::from_minterms(&minterms, width)
            .iter()
            .map(|i| format!("{}", i.pattern()))
            .collect()
    }

    #[test]
    fn count_primes() {
        // A | B, with A as bit 0
        assert_eq!(primes_of(&[1, 2, 3], 2), vec!["-1", "1-"]);

        // A single minterm is its own prime
        assert_eq!(primes_of(&[5], 3), vec!["101"]);

        // Full cube
        assert_eq!(primes_of(&[0, 1, 2, 3], 2), vec!["--"]);

        // XOR: no merge at all
        assert_eq!(primes_of(&[1, 2], 2), vec!["01", "10"]);

        assert!(primes_of(&[], 3).is_empty());
    }

    #[test]
    fn classic_example() {
        // f = sum m(0, 1, 2, 5, 6, 7) has six primes, forming a cycle
        let primes = primes_of(&[0, 1, 2, 5, 6, 7], 3);
        assert_eq!(primes.len(), 6);
        assert_eq!(primes, vec!["-00", "-11", "0-0", "01-", "1-1", "10-"]);
    }

    #[test]
    fn primes_are_not_duplicated() {
        // The 4-minterm cube is produced by two different pairs
        let primes = primes_of(&[0, 1, 2, 3, 4], 3);
        assert_eq!(primes, vec!["--0", "00-"]);
    }

    #[test]
    fn minterms_follow_patterns() {
        let minterms: BitSet = [0usize, 2, 3, 5, 7, 8, 10, 13, 15].iter().copied().collect();
        let primes = Primes::from_minterms(&minterms, 4);
        for p in &primes {
            assert_eq!(p.minterms(), &p.pattern().minterms());
            assert!(p.minterms().is_subset(&minterms));
        }
    }
}
