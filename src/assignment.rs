use crate::*;

use delegate::delegate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::iter::FromIterator;
use std::str::FromStr;

static RE_PAIR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-zA-Z2-9][a-zA-Z0-9]*)\s*=\s*([a-zA-Z0-9]+)").unwrap());

static PAIR_SEPARATORS: [char; 2] = [',', ';'];

/// Values given to a set of named variables.
///
/// An assignment maps variable names to Boolean values, each name appears at most once.
/// It can be constructed explicitly, collected from ```(name, value)``` pairs,
/// derived from the index of a row of a truth table, or parsed from strings like
/// ```"A=1, B=0; C = true"```: pairs are separated by spaces, commas or semicolons and
/// values are written as ```0```, ```1```, ```true``` or ```false```.
///
/// ```
/// use qmkit::Assignment;
/// # use qmkit::QmcError;
/// # fn main() -> Result<(), QmcError> {
///
/// let mut assignment: Assignment = "A=1, B = false".parse()?;
/// assignment.set("C", true);
///
/// assert_eq!(assignment.get("A"), Some(true));
/// assert_eq!(assignment.get("B"), Some(false));
/// assert_eq!(assignment.get("D"), None);
/// assert_eq!(assignment.len(), 3);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Assignment {
    values: BTreeMap<String, bool>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the assignment corresponding to a row of the truth table.
    ///
    /// The j-th variable takes the value of the j-th bit of the index (bit 0 being the least significant).
    pub fn from_index(variables: &[String], index: usize) -> Self {
        variables
            .iter()
            .enumerate()
            .map(|(j, name)| (name.as_str(), index.checked_shr(j as u32).unwrap_or(0) & 1 == 1))
            .collect()
    }

    /// Give a value to a variable, replacing the previous one if any
    pub fn set(&mut self, name: impl Into<String>, value: bool) {
        self.values.insert(name.into(), value);
    }

    /// Retrieve the value of a variable
    pub fn get(&self, name: &str) -> Option<bool> {
        self.values.get(name).copied()
    }

    /// Test if a variable has a value in this assignment
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Iterate over the variables and their values, sorted by name
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.values.iter().map(|(n, v)| (n.as_str(), *v))
    }

    delegate! {
        to self.values {
            pub fn len(&self) -> usize;
            pub fn is_empty(&self) -> bool;
            pub fn clear(&mut self);
        }
    }
}

fn parse_value(name: &str, value: &str, pair: &str) -> Result<(String, bool), QmcError> {
    let b = match value.to_ascii_lowercase().as_str() {
        "1" | "true" => true,
        "0" | "false" => false,
        _ => return Err(QmcError::InvalidAssignment(pair.to_string())),
    };
    Ok((name.to_string(), b))
}

fn check_separator(gap: &str) -> Result<(), QmcError> {
    match gap
        .chars()
        .all(|c| c.is_whitespace() || PAIR_SEPARATORS.contains(&c))
    {
        true => Ok(()),
        false => Err(QmcError::InvalidAssignment(gap.trim().to_string())),
    }
}

impl FromStr for Assignment {
    type Err = QmcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut result = Assignment::default();
        let mut last = 0;
        for cap in RE_PAIR.captures_iter(s) {
            let (pair, name, value) = match (cap.get(0), cap.get(1), cap.get(2)) {
                (Some(p), Some(n), Some(v)) => (p, n.as_str(), v.as_str()),
                _ => continue,
            };
            check_separator(&s[last..pair.start()])?;
            last = pair.end();
            let (name, value) = parse_value(name, value, pair.as_str())?;
            result.set(name, value);
        }
        check_separator(&s[last..])?;
        Ok(result)
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        let mut result = Self::default();
        result.extend(iter);
        result
    }
}

impl<S: Into<String>> Extend<(S, bool)> for Assignment {
    fn extend<T: IntoIterator<Item = (S, bool)>>(&mut self, iter: T) {
        for (name, value) in iter {
            self.set(name, value);
        }
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for (name, value) in self.iter() {
            match first {
                true => first = false,
                false => write!(f, " ")?,
            }
            write!(f, "{}={}", name, value as u8)?;
        }
        Ok(())
    }
}
