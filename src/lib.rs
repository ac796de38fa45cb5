//! Parse, evaluate and simplify Boolean expressions.
//!
//! Expressions are written in infix notation over named variables, the constants ```0``` and ```1```,
//! brackets and the operators ```~``` (NOT), ```^``` (XOR), ```&``` (AND), ```|``` (OR),
//! ```>``` (IMPLIES) and ```=``` (XNOR), listed by decreasing precedence. Binary operators are left-associative.
//!
//! The source text is first split into [tokens](Token) by the [lexer](tokenize). The tokens can then be
//! [validated](check_syntax), [converted into postfix notation](to_postfix) and [evaluated](evaluate)
//! for a given [assignment of the variables](Assignment).
//!
//! ```
//! use qmkit::{check_syntax, evaluate, to_postfix, tokenize, Assignment};
//! # use qmkit::QmcError;
//! # fn main() -> Result<(), QmcError> {
//!
//! let tokens = tokenize("A & ~(B | C)");
//! check_syntax(&tokens)?;
//!
//! let postfix = to_postfix(&tokens)?;
//! let assignment: Assignment = "A=1 B=0 C=0".parse()?;
//! assert!(evaluate(&postfix, &assignment)?);
//! # Ok(())
//! # }
//! ```
//!
//! # Simplification
//!
//! An expression can be simplified into an equivalent minimal *sum of products* (a disjunction of
//! conjunctions of possibly negated variables) with the Quine-McCluskey method. The truth table of the
//! expression is enumerated to collect its minterms, represented as [patterns](Pattern) over the variables.
//! Adjacent [implicants](Implicant) are merged until only [prime implicants](Primes) remain, then a
//! [cover](Cover) with the fewest prime implicants is selected and turned back into tokens.
//!
//! ```
//! use qmkit::{render, simplify, tokenize};
//! # use qmkit::QmcError;
//! # fn main() -> Result<(), QmcError> {
//!
//! let simplified = simplify(&tokenize("A & B | A & ~B | ~A & B"))?;
//! assert_eq!(render(&simplified), "B|A");
//! # Ok(())
//! # }
//! ```
//!
//! The [Minimizer] gives access to the intermediate results and limits the number of variables.
//! The cost of the simplification is exponential in the number of variables, see [tools] for some bounds.

mod assignment;
mod cover;
pub mod efmt;
mod error;
mod eval;
mod implicants;
mod lexer;
mod parse;
mod pattern;
mod postfix;
mod primes;
mod qmc;
mod syntax;
mod token;
pub mod tools;

#[macro_use]
extern crate pest_derive;

// Export public structures and API
pub use assignment::Assignment;
pub use cover::Cover;
pub use efmt::render;
pub use error::{QmcError, SyntaxError, SyntaxErrorKind};
pub use eval::{evaluate, variables};
pub use implicants::{seed_implicants, Implicant};
pub use lexer::tokenize;
pub use parse::parse_postfix;
pub use pattern::Pattern;
pub use postfix::to_postfix;
pub use primes::Primes;
pub use qmc::{minterms, simplify, simplify_str, Minimization, Minimizer, MAX_VARIABLES};
pub use syntax::check_syntax;
pub use token::{Operator, Token, TokenKind};
