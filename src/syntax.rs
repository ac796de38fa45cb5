//! Validate the structure of infix token sequences

use crate::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum State {
    ExpectOperand,
    ExpectOperator,
}

/// Check that a sequence of infix tokens is a well-formed expression.
///
/// The check is a two-state automaton tracking the bracket depth: operands (identifiers,
/// constants, bracketed sub-expressions, optionally preceded by NOT) must alternate with
/// binary operators. Whitespace tokens are skipped.
///
/// ```
/// use qmkit::{check_syntax, tokenize, SyntaxErrorKind};
///
/// assert!(check_syntax(&tokenize("~(A & B) | C")).is_ok());
///
/// let err = check_syntax(&tokenize("(A & B")).unwrap_err();
/// assert_eq!(err.kind, SyntaxErrorKind::MissingClosingBracket);
/// assert_eq!(err.position, 6);
/// ```
pub fn check_syntax(tokens: &[Token]) -> Result<(), SyntaxError> {
    let mut depth = 0usize;
    let mut state = State::ExpectOperand;
    let mut end = 0;

    for tok in tokens {
        if tok.kind() == TokenKind::Whitespace {
            continue;
        }
        end = tok.end();

        state = match (state, tok.kind()) {
            (State::ExpectOperand, TokenKind::Identifier | TokenKind::Constant) => {
                State::ExpectOperator
            }
            (State::ExpectOperand, TokenKind::OpeningBracket) => {
                depth += 1;
                State::ExpectOperand
            }
            (State::ExpectOperand, TokenKind::SingleOperator) => State::ExpectOperand,
            (State::ExpectOperator, TokenKind::ClosingBracket) => {
                depth = depth.checked_sub(1).ok_or_else(|| {
                    SyntaxError::new(tok.position(), SyntaxErrorKind::UnexpectedClosingBracket)
                })?;
                State::ExpectOperator
            }
            (State::ExpectOperator, TokenKind::DoubleOperator) => State::ExpectOperand,
            // A stray closing bracket where an operand is expected
            (State::ExpectOperand, TokenKind::ClosingBracket) if depth == 0 => {
                return Err(SyntaxError::new(
                    tok.position(),
                    SyntaxErrorKind::UnexpectedClosingBracket,
                ));
            }
            _ => {
                return Err(SyntaxError::new(
                    tok.position(),
                    SyntaxErrorKind::UnexpectedToken(tok.text().to_string()),
                ))
            }
        };
    }

    if depth != 0 {
        return Err(SyntaxError::new(end, SyntaxErrorKind::MissingClosingBracket));
    }
    if state != State::ExpectOperator {
        return Err(SyntaxError::new(end, SyntaxErrorKind::UnexpectedEnd));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::*;

    fn check(source: &str) -> Result<(), SyntaxError> {
        check_syntax(&tokenize(source))
    }

    #[test]
    fn accepted() {
        for source in [
            "A",
            "0",
            "~~A",
            "(A)",
            "((A & B))",
            "A & B | C ^ D > E = F",
            "~(A | ~B) & ~1",
            "x1 > (y2 = ~z3)",
        ] {
            assert!(check(source).is_ok(), "'{}' should be accepted", source);
        }
    }

    #[test]
    fn missing_closing_bracket() {
        let err = check("(A&B").unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::MissingClosingBracket);
        assert_eq!(err.position, 4);
    }

    #[test]
    fn unexpected_end() {
        let err = check("A&").unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::UnexpectedEnd);
        assert_eq!(err.position, 2);

        let err = check("").unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::UnexpectedEnd);
        assert_eq!(err.position, 0);

        let err = check("~").unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::UnexpectedEnd);
    }

    #[test]
    fn unexpected_closing_bracket() {
        let err = check(")A").unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::UnexpectedClosingBracket);
        assert_eq!(err.position, 0);

        let err = check("(A))").unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::UnexpectedClosingBracket);
        assert_eq!(err.position, 3);
    }

    #[test]
    fn unexpected_tokens() {
        let err = check("A B").unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::UnexpectedToken("B".to_string()));
        assert_eq!(err.position, 2);

        let err = check("A & & B").unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::UnexpectedToken("&".to_string()));
        assert_eq!(err.position, 4);

        let err = check("A ! B").unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::UnexpectedToken("!".to_string()));

        // Empty brackets
        let err = check("A & ()").unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::UnexpectedToken(")".to_string()));
        assert_eq!(err.position, 5);

        let err = check("A~").unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::UnexpectedToken("~".to_string()));
    }

    #[test]
    fn whitespace_tokens_are_skipped() {
        let tokens = vec![
            Token::new(" ", 0, TokenKind::Whitespace),
            Token::identifier("A", 1),
            Token::new(" ", 2, TokenKind::Whitespace),
        ];
        assert!(check_syntax(&tokens).is_ok());
    }
}
