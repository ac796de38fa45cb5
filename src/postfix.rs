//! Conversion of infix token sequences to postfix (reverse polish) order

use crate::*;

/// Reorder a validated infix token sequence into postfix order (shunting-yard).
///
/// Binary operators are left-associative and bind according to [Operator::precedence];
/// NOT is a prefix operator. Brackets are consumed and do not appear in the result.
/// Whitespace tokens are skipped.
///
/// The input must have passed [check_syntax]: unbalanced closing brackets and unknown
/// tokens are reported as [malformed expressions](SyntaxErrorKind::MalformedExpression),
/// other defects are not detected here.
///
/// ```
/// use qmkit::{to_postfix, tokenize};
/// # use qmkit::QmcError;
/// # fn main() -> Result<(), QmcError> {
///
/// let postfix = to_postfix(&tokenize("A | ~B & (C > D)"))?;
/// let texts: Vec<&str> = postfix.iter().map(|t| t.text()).collect();
/// assert_eq!(texts, vec!["A", "B", "~", "C", "D", ">", "&", "|"]);
/// # Ok(())
/// # }
/// ```
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>, SyntaxError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<&Token> = vec![];

    for tok in tokens {
        match tok.kind() {
            TokenKind::Whitespace => (),
            TokenKind::Identifier | TokenKind::Constant => output.push(tok.clone()),
            TokenKind::OpeningBracket => stack.push(tok),
            TokenKind::ClosingBracket => loop {
                match stack.pop() {
                    None => {
                        return Err(SyntaxError::new(
                            tok.position(),
                            SyntaxErrorKind::MalformedExpression("unbalanced closing bracket"),
                        ))
                    }
                    Some(top) if top.kind() == TokenKind::OpeningBracket => break,
                    Some(top) => output.push(top.clone()),
                }
            },
            TokenKind::SingleOperator | TokenKind::DoubleOperator => {
                let op = tok.as_operator().ok_or_else(|| unknown_operator(tok))?;
                // A prefix operator has no left operand yet: it never pops the stack.
                if op.arity() > 1 {
                    while let Some(top) = stack.last() {
                        match top.as_operator() {
                            Some(top_op) if top_op.precedence() >= op.precedence() => {
                                output.push((*top).clone());
                                stack.pop();
                            }
                            _ => break,
                        }
                    }
                }
                stack.push(tok);
            }
            TokenKind::Unknown => return Err(unknown_operator(tok)),
        }
    }

    while let Some(top) = stack.pop() {
        if top.kind() == TokenKind::OpeningBracket {
            return Err(SyntaxError::new(
                top.position(),
                SyntaxErrorKind::MalformedExpression("unbalanced opening bracket"),
            ));
        }
        output.push(top.clone());
    }
    Ok(output)
}

fn unknown_operator(tok: &Token) -> SyntaxError {
    SyntaxError::new(
        tok.position(),
        SyntaxErrorKind::MalformedExpression("unknown token in infix expression"),
    )
}

#[cfg(test)]
mod tests {
    use crate::*;

    fn rpn(source: &str) -> Result<String, QmcError> {
        let postfix = to_postfix(&tokenize(source))?;
        Ok(postfix
            .iter()
            .map(|t| t.text())
            .collect::<Vec<&str>>()
            .join(" "))
    }

    #[test]
    fn precedence() -> Result<(), QmcError> {
        assert_eq!(rpn("A & B | C")?, "A B & C |");
        assert_eq!(rpn("A | B & C")?, "A B C & |");
        assert_eq!(rpn("A & B ^ C")?, "A B C ^ &");
        assert_eq!(rpn("A > B | C")?, "A B C | >");
        assert_eq!(rpn("A = B > C")?, "A B C > =");
        assert_eq!(rpn("~A & B")?, "A ~ B &");
        assert_eq!(rpn("A & ~B")?, "A B ~ &");
        Ok(())
    }

    #[test]
    fn associativity() -> Result<(), QmcError> {
        assert_eq!(rpn("A > B > C")?, "A B > C >");
        assert_eq!(rpn("A & B & C")?, "A B & C &");
        assert_eq!(rpn("~~A")?, "A ~ ~");
        assert_eq!(rpn("~~A | ~B")?, "A ~ ~ B ~ |");
        Ok(())
    }

    #[test]
    fn brackets() -> Result<(), QmcError> {
        assert_eq!(rpn("(A | B) & C")?, "A B | C &");
        assert_eq!(rpn("~(A | B)")?, "A B | ~");
        assert_eq!(rpn("((A))")?, "A");
        assert_eq!(rpn("A > (B > C)")?, "A B C > >");
        Ok(())
    }

    #[test]
    fn positions_are_kept() -> Result<(), QmcError> {
        let postfix = to_postfix(&tokenize("a & b"))?;
        let positions: Vec<usize> = postfix.iter().map(|t| t.position()).collect();
        assert_eq!(positions, vec![0, 4, 2]);
        Ok(())
    }

    #[test]
    fn malformed() {
        let err = to_postfix(&tokenize("A)")).unwrap_err();
        assert_eq!(
            err.kind,
            SyntaxErrorKind::MalformedExpression("unbalanced closing bracket")
        );
        assert_eq!(err.position, 1);

        assert!(to_postfix(&tokenize("(A")).is_err());
        assert!(to_postfix(&tokenize("A $ B")).is_err());
    }
}
