//! Simplification of expressions with the Quine-McCluskey method

use crate::*;

use bit_set::BitSet;
use log::debug;
use std::fmt;

/// Largest number of variables for which the truth table can be enumerated
pub const MAX_VARIABLES: usize = (usize::BITS - 1) as usize;

/// Configuration of the minimization pipeline.
///
/// The minimizer enumerates the truth table of the expression, so its cost grows exponentially
/// with the number of variables (see [tools]). An optional limit rejects expressions with too
/// many variables before any evaluation.
///
/// ```
/// use qmkit::{tokenize, Minimizer, QmcError};
///
/// let minimizer = Minimizer::default().with_max_variables(2);
/// let result = minimizer.simplify(&tokenize("A & B | C"));
/// assert_eq!(result, Err(QmcError::TooManyVariables { count: 3, limit: 2 }));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Minimizer {
    max_variables: Option<usize>,
}

/// Result of the minimization of an expression.
///
/// Carries the sorted variables, the minterms (rows of the truth table where the expression is true),
/// the prime implicants and the selected minimal cover. Constant functions are detected before
/// the computation of primes: both lists are then empty.
#[derive(Clone, Debug)]
pub struct Minimization {
    variables: Vec<String>,
    minterms: BitSet,
    primes: Primes,
    cover: Cover,
    constant: Option<bool>,
}

impl Minimizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject expressions with more than ```limit``` variables
    pub fn with_max_variables(mut self, limit: usize) -> Self {
        self.max_variables = Some(limit);
        self
    }

    pub fn max_variables(&self) -> Option<usize> {
        self.max_variables
    }

    fn limit(&self) -> usize {
        self.max_variables
            .map(|l| l.min(MAX_VARIABLES))
            .unwrap_or(MAX_VARIABLES)
    }

    /// Run the full minimization pipeline on an infix expression.
    pub fn minimize(&self, infix: &[Token]) -> Result<Minimization, QmcError> {
        check_syntax(infix)?;
        let postfix = to_postfix(infix)?;
        let variables = variables(&postfix);

        let limit = self.limit();
        if variables.len() > limit {
            return Err(QmcError::TooManyVariables {
                count: variables.len(),
                limit,
            });
        }

        if variables.is_empty() {
            let value = evaluate(&postfix, &Assignment::default())?;
            return Ok(Minimization::constant(variables, BitSet::default(), value));
        }

        let minterms = minterms(&postfix, &variables)?;
        debug!(
            "{} variables, {} minterms",
            variables.len(),
            minterms.len()
        );
        if minterms.is_empty() {
            return Ok(Minimization::constant(variables, minterms, false));
        }
        if Some(minterms.len()) == tools::truth_table_size(variables.len()) {
            return Ok(Minimization::constant(variables, minterms, true));
        }

        let primes = Primes::from_minterms(&minterms, variables.len());
        debug!("{} prime implicants", primes.len());
        let cover = Cover::minimal(&primes, &minterms);
        debug!("selected {} prime implicants", cover.len());

        Ok(Minimization {
            variables,
            minterms,
            primes,
            cover,
            constant: None,
        })
    }

    /// Simplify an infix expression into a minimal sum of products.
    pub fn simplify(&self, infix: &[Token]) -> Result<Vec<Token>, QmcError> {
        Ok(self.minimize(infix)?.to_expression())
    }
}

impl Minimization {
    fn constant(variables: Vec<String>, minterms: BitSet, value: bool) -> Self {
        Self {
            variables,
            minterms,
            primes: Primes::default(),
            cover: Cover::default(),
            constant: Some(value),
        }
    }

    /// The variables of the expression, sorted and without duplicates
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Rows of the truth table (see [Assignment::from_index]) where the expression is true
    pub fn minterms(&self) -> &BitSet {
        &self.minterms
    }

    pub fn prime_implicants(&self) -> &Primes {
        &self.primes
    }

    pub fn cover(&self) -> &Cover {
        &self.cover
    }

    /// The fixed value of the expression, if it does not depend on its variables
    pub fn is_constant(&self) -> Option<bool> {
        self.constant
    }

    /// Evaluate the simplified function.
    ///
    /// Only the variables of the original expression are needed.
    pub fn eval(&self, assignment: &Assignment) -> Result<bool, QmcError> {
        let mut index = 0;
        for (j, name) in self.variables.iter().enumerate() {
            let value = assignment
                .get(name)
                .ok_or_else(|| QmcError::MissingVariable(name.clone()))?;
            if value {
                index |= 1 << j;
            }
        }
        Ok(match self.constant {
            Some(value) => value,
            None => self.cover.covers(index),
        })
    }

    /// Build the infix expression of the minimal sum of products.
    ///
    /// Each implicant of the cover gives a conjunction of literals (```A```, or ```~A``` for a negated
    /// variable) joined by explicit ```&``` operators, and the conjunctions are joined by ```|```.
    /// Constant functions give a single constant token.
    /// Token positions are those of the compact rendering of the expression, so that
    /// [tokenize] on the [rendered](render) result gives back the same tokens.
    pub fn to_expression(&self) -> Vec<Token> {
        let mut writer = TokenWriter::default();
        if let Some(value) = self.constant {
            writer.push(Token::constant(value, writer.position));
            return writer.tokens;
        }

        for (n, implicant) in self.cover.iter().enumerate() {
            if n > 0 {
                writer.operator(Operator::Or);
            }
            for (m, (idx, value)) in implicant.pattern().iter_fixed_values().enumerate() {
                if m > 0 {
                    writer.operator(Operator::And);
                }
                if !value {
                    writer.operator(Operator::Not);
                }
                writer.push(Token::identifier(&self.variables[idx], writer.position));
            }
        }
        writer.tokens
    }
}

impl fmt::Display for Minimization {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", render(&self.to_expression()))
    }
}

/// Accumulate tokens, assigning their positions in the compact rendering
#[derive(Default)]
struct TokenWriter {
    tokens: Vec<Token>,
    position: usize,
}

impl TokenWriter {
    fn push(&mut self, token: Token) {
        self.position = token.end();
        self.tokens.push(token);
    }

    fn operator(&mut self, op: Operator) {
        self.push(Token::operator(op, self.position));
    }
}

/// Rows of the truth table where a postfix expression is true.
///
/// Row ```i``` gives to the j-th variable the j-th bit of ```i``` (see [Assignment::from_index]).
pub fn minterms(postfix: &[Token], variables: &[String]) -> Result<BitSet, QmcError> {
    let rows = tools::truth_table_size(variables.len()).ok_or(QmcError::TooManyVariables {
        count: variables.len(),
        limit: MAX_VARIABLES,
    })?;
    let mut result = BitSet::with_capacity(rows);
    for i in 0..rows {
        if evaluate(postfix, &Assignment::from_index(variables, i))? {
            result.insert(i);
        }
    }
    Ok(result)
}

/// Simplify an infix expression into an equivalent minimal sum of products.
///
/// This validates the expression, enumerates its truth table over its sorted variables,
/// computes its prime implicants, selects a cover with the fewest product terms and
/// rebuilds an infix expression from it. See [Minimizer] to configure the process.
///
/// ```
/// use qmkit::{render, simplify, tokenize};
/// # use qmkit::QmcError;
/// # fn main() -> Result<(), QmcError> {
///
/// let simplified = simplify(&tokenize("(A & B) | (A & ~B)"))?;
/// assert_eq!(render(&simplified), "A");
///
/// let simplified = simplify(&tokenize("A > B"))?;
/// assert_eq!(render(&simplified), "B|~A");
/// # Ok(())
/// # }
/// ```
pub fn simplify(infix: &[Token]) -> Result<Vec<Token>, QmcError> {
    Minimizer::default().simplify(infix)
}

/// Parse, simplify and render an expression
///
/// ```
/// # use qmkit::QmcError;
/// # fn main() -> Result<(), QmcError> {
/// assert_eq!(qmkit::simplify_str("A & ~A")?, "0");
/// assert_eq!(qmkit::simplify_str("b & a | b & ~a")?, "b");
/// # Ok(())
/// # }
/// ```
pub fn simplify_str(source: &str) -> Result<String, QmcError> {
    Ok(render(&simplify(&tokenize(source))?))
}
