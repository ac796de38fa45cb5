//! Evaluation of postfix expressions

use crate::*;

use std::collections::BTreeSet;

/// Evaluate a postfix expression for the given values of its variables.
///
/// Constants push their value, identifiers push the value found in the assignment, and operators
/// replace their operands with the result. The expression should come from [to_postfix]:
/// sequences which do not leave exactly one value are reported as
/// [malformed expressions](SyntaxErrorKind::MalformedExpression).
///
/// ```
/// use qmkit::{evaluate, to_postfix, tokenize, Assignment, QmcError};
/// # fn main() -> Result<(), QmcError> {
///
/// let postfix = to_postfix(&tokenize("A > (B ^ C)"))?;
/// let assignment: Assignment = "A=1 B=1 C=0".parse()?;
/// assert!(evaluate(&postfix, &assignment)?);
///
/// let partial: Assignment = "A=1".parse()?;
/// assert_eq!(
///     evaluate(&postfix, &partial),
///     Err(QmcError::MissingVariable("B".to_string()))
/// );
/// # Ok(())
/// # }
/// ```
pub fn evaluate(postfix: &[Token], assignment: &Assignment) -> Result<bool, QmcError> {
    let mut stack: Vec<bool> = Vec::with_capacity(postfix.len());

    for tok in postfix {
        match tok.kind() {
            TokenKind::Whitespace => (),
            TokenKind::Constant => stack.push(tok.text() == "1"),
            TokenKind::Identifier => {
                let value = assignment
                    .get(tok.text())
                    .ok_or_else(|| QmcError::MissingVariable(tok.text().to_string()))?;
                stack.push(value);
            }
            _ => {
                let op = tok
                    .as_operator()
                    .ok_or_else(|| malformed(tok.position(), "unexpected token in postfix expression"))?;
                let b = pop_operand(&mut stack, tok)?;
                let value = match op.arity() {
                    1 => op.apply(b, false),
                    _ => op.apply(pop_operand(&mut stack, tok)?, b),
                };
                stack.push(value);
            }
        }
    }

    match (stack.pop(), stack.is_empty()) {
        (Some(value), true) => Ok(value),
        _ => {
            let end = postfix.last().map(|t| t.end()).unwrap_or(0);
            Err(malformed(end, "the expression does not reduce to a single value").into())
        }
    }
}

fn pop_operand(stack: &mut Vec<bool>, tok: &Token) -> Result<bool, SyntaxError> {
    stack
        .pop()
        .ok_or_else(|| malformed(tok.position(), "missing operand"))
}

fn malformed(position: usize, msg: &'static str) -> SyntaxError {
    SyntaxError::new(position, SyntaxErrorKind::MalformedExpression(msg))
}

/// Names of the variables used in an expression, sorted and without duplicates.
///
/// ```
/// use qmkit::{tokenize, variables};
///
/// assert_eq!(variables(&tokenize("b & a | (b > c1)")), vec!["a", "b", "c1"]);
/// ```
pub fn variables(tokens: &[Token]) -> Vec<String> {
    tokens
        .iter()
        .filter(|t| t.kind() == TokenKind::Identifier)
        .map(|t| t.text())
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(String::from)
        .collect()
}
