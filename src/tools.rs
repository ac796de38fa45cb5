//! Some helper functions to estimate the cost of a minimization.
//!
//! Minimizing a function of ```k``` variables evaluates the expression on ```2^k``` rows,
//! runs at most ```k``` merging rounds comparing all pairs of implicants, then searches covers
//! among the ```p``` prime implicants, trying up to ```C(p, 1) + C(p, 2) + ... + C(p, p)``` subsets.
//! These helpers return ```None``` when the bound does not fit in a ```usize```.

/// Number of rows in the truth table of a function of ```k``` variables.
///
/// ```
/// # use qmkit::tools::truth_table_size;
/// assert_eq!(truth_table_size(4), Some(16));
/// assert_eq!(truth_table_size(usize::BITS as usize), None);
/// ```
pub fn truth_table_size(k: usize) -> Option<usize> {
    u32::try_from(k).ok().and_then(|k| 1usize.checked_shl(k))
}

/// Binomial coefficient ```C(n, k)```.
///
/// ```
/// # use qmkit::tools::binomial;
/// assert_eq!(binomial(5, 2), Some(10));
/// assert_eq!(binomial(3, 4), Some(0));
/// ```
pub fn binomial(n: usize, k: usize) -> Option<usize> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut result: usize = 1;
    for i in 0..k {
        // result * (n - i) is always divisible by (i + 1)
        result = result.checked_mul(n - i)? / (i + 1);
    }
    Some(result)
}

/// Maximal number of subsets tested by the cover search among ```p``` prime implicants.
pub fn cover_candidates(p: usize) -> Option<usize> {
    (1..=p).try_fold(0usize, |acc, i| acc.checked_add(binomial(p, i)?))
}
