use thiserror::Error;

/// Reason of a [SyntaxError].
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// A token that can not appear at this place
    #[error("Unexpected token '{0}'")]
    UnexpectedToken(String),

    /// A closing bracket without matching opening bracket
    #[error("Unexpected closing bracket")]
    UnexpectedClosingBracket,

    /// At least one opening bracket is still open at the end of the input
    #[error("Missing closing bracket")]
    MissingClosingBracket,

    /// The expression stops while an operand is expected
    #[error("Unexpected end of statement")]
    UnexpectedEnd,

    /// A token sequence which was not validated reached the converter or the evaluator
    #[error("Malformed expression: {0}")]
    MalformedExpression(&'static str),
}

/// Error in the structure of an expression, located by a byte offset in the source.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("Syntax error at {position}: {kind}")]
pub struct SyntaxError {
    pub position: usize,
    pub kind: SyntaxErrorKind,
}

impl SyntaxError {
    pub fn new(position: usize, kind: SyntaxErrorKind) -> Self {
        Self { position, kind }
    }
}

/// Errors raised while parsing, evaluating or simplifying expressions.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum QmcError {
    /// The expression is not well formed
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// The assignment has no value for a variable used in the expression
    #[error("Missing variable '{0}'")]
    MissingVariable(String),

    /// The expression uses more variables than the minimizer accepts
    #[error("Too many variables: {count} (the limit is {limit})")]
    TooManyVariables { count: usize, limit: usize },

    /// A pattern description contains other characters than 0, 1 and -
    #[error("Invalid pattern '{0}'")]
    InvalidPattern(String),

    /// A fragment of an assignment description could not be parsed
    #[error("Invalid assignment '{0}'")]
    InvalidAssignment(String),
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn messages() {
        let err = SyntaxError::new(3, SyntaxErrorKind::UnexpectedToken("&".to_string()));
        assert_eq!(format!("{}", err), "Syntax error at 3: Unexpected token '&'");

        let err: QmcError = SyntaxError::new(4, SyntaxErrorKind::MissingClosingBracket).into();
        assert_eq!(format!("{}", err), "Syntax error at 4: Missing closing bracket");

        let err = QmcError::MissingVariable("B".to_string());
        assert_eq!(format!("{}", err), "Missing variable 'B'");
    }
}
