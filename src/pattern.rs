use crate::*;

use bit_set::BitSet;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A product term over a fixed number of ordered variables.
///
/// Each position of the pattern gives the value of the corresponding variable:
/// fixed at ```1```, fixed at ```0```, or free (```-```, "don't care").
/// The pattern represents all rows of the truth table which agree with its fixed positions.
///
/// It is stored as two bit-sets of fixed positions (positive and negative), which makes
/// the comparisons needed by the merging rounds of the Quine-McCluskey method bitwise operations.
///
/// A Pattern can be parsed from strings where the position in the string defines the
/// variable index and the character defines its value: - for free, 0 for inactive, 1 for active.
/// To make the strings easier to read, spaces and single quotes are ignored.
/// For example "0-10-1", "  0-10-1", and "0-1 0-1" are equivalent.
///
/// Patterns are ordered position by position, with ```- < 0 < 1```, i.e. as their string representation.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct Pattern {
    positive: BitSet,
    negative: BitSet,
    width: usize,
}

impl Pattern {
    /// Create a pattern where all variables are free
    pub fn free(width: usize) -> Self {
        Self {
            positive: BitSet::with_capacity(width),
            negative: BitSet::with_capacity(width),
            width,
        }
    }

    /// Create the pattern matching a single row of the truth table.
    ///
    /// Position j takes the value of the j-th bit of the index (bit 0 being the least significant),
    /// the pattern string thus lists the bits starting from the least significant one.
    pub fn from_minterm(index: usize, width: usize) -> Self {
        let mut p = Self::free(width);
        for j in 0..width {
            p.set(j, bit(index, j));
        }
        p
    }

    /// Number of variables covered by this pattern
    pub fn width(&self) -> usize {
        self.width
    }

    /// Fix a variable to a specific value.
    pub fn set(&mut self, idx: usize, value: bool) {
        if idx >= self.width {
            self.width = idx + 1;
        }
        if value {
            self.negative.remove(idx);
            self.positive.insert(idx);
        } else {
            self.positive.remove(idx);
            self.negative.insert(idx);
        }
    }

    /// Remove all constraints on a given variable.
    pub fn free_variable(&mut self, idx: usize) {
        self.positive.remove(idx);
        self.negative.remove(idx);
    }

    /// Value of the variable at the given position, None if it is free
    pub fn value(&self, idx: usize) -> Option<bool> {
        match (self.positive.contains(idx), self.negative.contains(idx)) {
            (true, _) => Some(true),
            (false, true) => Some(false),
            (false, false) => None,
        }
    }

    /// Iterate over the fixed positions and their values, in increasing order of position
    pub fn iter_fixed_values(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        (0..self.width).filter_map(move |idx| self.value(idx).map(|v| (idx, v)))
    }

    /// Number of fixed positions (literals of the product term)
    pub fn fixed_count(&self) -> usize {
        self.positive.len() + self.negative.len()
    }

    /// Return true if no variable is fixed
    pub fn is_free_pattern(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }

    /// Check if a row of the truth table is contained in this pattern
    pub fn contains_index(&self, index: usize) -> bool {
        self.iter_fixed_values().all(|(j, v)| bit(index, j) == v)
    }

    /// Check if this pattern contains all rows of another pattern
    pub fn contains(&self, other: &Pattern) -> bool {
        other.positive.is_superset(&self.positive) && other.negative.is_superset(&self.negative)
    }

    /// All rows of the truth table contained in this pattern.
    pub fn minterms(&self) -> BitSet {
        let free: Vec<usize> = (0..self.width)
            .filter(|idx| self.value(*idx).is_none())
            .collect();
        let base: usize = self.positive.iter().map(|j| 1usize << j).sum();
        let mut result = BitSet::default();
        for filter in 0..(1usize << free.len()) {
            let extra: usize = free
                .iter()
                .enumerate()
                .filter(|(n, _)| bit(filter, *n))
                .map(|(_, j)| 1usize << j)
                .sum();
            result.insert(base | extra);
        }
        result
    }

    /// Merge two adjacent patterns.
    ///
    /// Two patterns are adjacent if they fix the same positions, with the same values except at
    /// a single position where one is ```0``` and the other ```1```. The merged pattern frees this position
    /// and covers exactly the rows of both patterns. A free position never matches a fixed one.
    pub fn merge(&self, other: &Self) -> Option<Self> {
        if self.width != other.width {
            return None;
        }
        let mut fixed = self.positive.clone();
        fixed.union_with(&self.negative);
        let mut other_fixed = other.positive.clone();
        other_fixed.union_with(&other.negative);
        if fixed != other_fixed {
            return None;
        }

        let mut conflicts = self.positive.clone();
        conflicts.symmetric_difference_with(&other.positive);
        let mut conflicts = conflicts.iter();
        match (conflicts.next(), conflicts.next()) {
            (Some(idx), None) => {
                let mut merged = self.clone();
                merged.free_variable(idx);
                Some(merged)
            }
            _ => None,
        }
    }

    fn rank(&self, idx: usize) -> u8 {
        match self.value(idx) {
            None => 0,
            Some(false) => 1,
            Some(true) => 2,
        }
    }
}

fn bit(index: usize, j: usize) -> bool {
    index.checked_shr(j as u32).unwrap_or(0) & 1 == 1
}

impl Ord for Pattern {
    fn cmp(&self, other: &Self) -> Ordering {
        let r1 = (0..self.width).map(|idx| self.rank(idx));
        let r2 = (0..other.width).map(|idx| other.rank(idx));
        r1.cmp(r2)
    }
}

impl PartialOrd for Pattern {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Pattern {
    type Err = QmcError;

    fn from_str(descr: &str) -> Result<Pattern, QmcError> {
        let mut p = Pattern::default();
        let mut idx = 0;
        for c in descr.chars() {
            match c {
                ' ' | '\t' | '\'' => continue, // skip spacing and ' for formatting
                '-' => p.width = idx + 1,
                '0' => p.set(idx, false),
                '1' => p.set(idx, true),
                _ => return Err(QmcError::InvalidPattern(descr.to_string())),
            };
            idx += 1;
        }
        Ok(p)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for idx in 0..self.width {
            let c = match self.value(idx) {
                None => '-',
                Some(false) => '0',
                Some(true) => '1',
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn construct_and_display() -> Result<(), QmcError> {
        let p: Pattern = "-0--01-11--0-1---".parse()?;
        assert_eq!(format!("{}", p), "-0--01-11--0-1---");
        assert_eq!(p.width(), 17);
        assert_eq!(p.fixed_count(), 7);

        let p: Pattern = "0-1 0'-1".parse()?;
        assert_eq!(format!("{}", p), "0-10-1");

        assert!("01x".parse::<Pattern>().is_err());
        Ok(())
    }

    #[test]
    fn from_minterm() {
        // bit 0 first
        assert_eq!(format!("{}", Pattern::from_minterm(0b0110, 4)), "0110");
        assert_eq!(format!("{}", Pattern::from_minterm(0b0001, 4)), "1000");
        assert_eq!(format!("{}", Pattern::from_minterm(5, 3)), "101");
        assert_eq!(format!("{}", Pattern::from_minterm(0, 0)), "");
    }

    #[test]
    fn merge() -> Result<(), QmcError> {
        let p1: Pattern = "10-1".parse()?;
        let p2: Pattern = "11-1".parse()?;
        let merged = p1.merge(&p2).unwrap();
        assert_eq!(format!("{}", merged), "1--1");
        assert_eq!(p2.merge(&p1), Some(merged));

        // free positions must match
        let p3: Pattern = "1-01".parse()?;
        assert_eq!(p1.merge(&p3), None);

        // two differences
        let p4: Pattern = "01-1".parse()?;
        assert_eq!(p1.merge(&p4), None);

        // identical patterns
        assert_eq!(p1.merge(&p1), None);

        // a free position never matches a fixed one
        let p5: Pattern = "10-0".parse()?;
        let p6: Pattern = "10--".parse()?;
        assert_eq!(p5.merge(&p6), None);
        Ok(())
    }

    #[test]
    fn minterms_match_the_pattern() -> Result<(), QmcError> {
        let p: Pattern = "1-0-".parse()?;
        let minterms: Vec<usize> = p.minterms().iter().collect();
        assert_eq!(minterms, vec![1, 3, 9, 11]);
        for i in 0..16 {
            assert_eq!(p.contains_index(i), minterms.contains(&i));
        }
        let free = Pattern::free(2);
        assert_eq!(free.minterms().len(), 4);
        assert!(free.is_free_pattern());
        Ok(())
    }

    #[test]
    fn ordering() -> Result<(), QmcError> {
        let mut patterns: Vec<Pattern> = ["1-0", "0-1", "-10", "--1", "10-"]
            .iter()
            .map(|s| s.parse())
            .collect::<Result<_, _>>()?;
        patterns.sort();
        let sorted: Vec<String> = patterns.iter().map(|p| format!("{}", p)).collect();
        assert_eq!(sorted, vec!["--1", "-10", "0-1", "1-0", "10-"]);
        Ok(())
    }

    #[test]
    fn contained() -> Result<(), QmcError> {
        let p: Pattern = "1--".parse()?;
        let t: Pattern = "1-0".parse()?;
        assert!(p.contains(&t));
        assert!(!t.contains(&p));
        Ok(())
    }
}
