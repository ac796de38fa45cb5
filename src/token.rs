//! Tokens produced by the lexer and consumed by the rest of the pipeline.

use std::fmt;

/// Lexical class of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A variable name: a run of letters and digits
    Identifier,
    /// One of the fixed values ```0``` and ```1```
    Constant,
    /// A prefix operator (NOT)
    SingleOperator,
    /// An infix operator (AND, OR, XOR, IMPLIES, XNOR)
    DoubleOperator,
    OpeningBracket,
    ClosingBracket,
    /// Spacing, never produced by [crate::tokenize] but tolerated by the later stages
    Whitespace,
    /// Any other character
    Unknown,
}

/// A single lexical unit with its location in the source text.
///
/// Tokens are immutable values created by the lexer (or by the minimizer when it
/// reconstructs an expression). The position is the byte offset of the first character
/// of the token in the source.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    text: String,
    position: usize,
    kind: TokenKind,
}

/// The Boolean operators and their textual symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    /// ```~a```
    Not,
    /// ```a ^ b```: exactly one of the operands is true
    Xor,
    /// ```a & b```
    And,
    /// ```a | b```
    Or,
    /// ```a > b```: a implies b
    Implies,
    /// ```a = b```: both operands have the same value
    Xnor,
}

impl Token {
    pub fn new(text: impl Into<String>, position: usize, kind: TokenKind) -> Self {
        Self {
            text: text.into(),
            position,
            kind,
        }
    }

    /// Create a token for an operator
    pub fn operator(op: Operator, position: usize) -> Self {
        let kind = match op.arity() {
            1 => TokenKind::SingleOperator,
            _ => TokenKind::DoubleOperator,
        };
        Self::new(op.symbol(), position, kind)
    }

    /// Create a token for a fixed Boolean value
    pub fn constant(value: bool, position: usize) -> Self {
        Self::new(if value { "1" } else { "0" }, position, TokenKind::Constant)
    }

    pub fn identifier(name: impl Into<String>, position: usize) -> Self {
        Self::new(name, position, TokenKind::Identifier)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Byte offset just after the last character of this token
    pub fn end(&self) -> usize {
        self.position + self.text.len()
    }

    /// The operator denoted by this token, if it is an operator token.
    pub fn as_operator(&self) -> Option<Operator> {
        match self.kind {
            TokenKind::SingleOperator | TokenKind::DoubleOperator => {
                let mut chars = self.text.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Operator::from_char(c),
                    _ => None,
                }
            }
            _ => None,
        }
    }

    pub fn is_operator(&self) -> bool {
        self.as_operator().is_some()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl Operator {
    /// All operators, by decreasing precedence
    pub const ALL: [Operator; 6] = [
        Operator::Not,
        Operator::Xor,
        Operator::And,
        Operator::Or,
        Operator::Implies,
        Operator::Xnor,
    ];

    /// Find the operator denoted by a character.
    ///
    /// The mapping is total on the operator symbols: any other character is not an operator.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '~' => Some(Operator::Not),
            '^' => Some(Operator::Xor),
            '&' => Some(Operator::And),
            '|' => Some(Operator::Or),
            '>' => Some(Operator::Implies),
            '=' => Some(Operator::Xnor),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Not => '~',
            Operator::Xor => '^',
            Operator::And => '&',
            Operator::Or => '|',
            Operator::Implies => '>',
            Operator::Xnor => '=',
        }
    }

    /// Binding strength of the operator: higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Not => 6,
            Operator::Xor => 5,
            Operator::And => 4,
            Operator::Or => 3,
            Operator::Implies => 2,
            Operator::Xnor => 1,
        }
    }

    /// Number of operands
    pub fn arity(self) -> usize {
        match self {
            Operator::Not => 1,
            _ => 2,
        }
    }

    /// Apply the operator to its operands, in the order in which they appear in the source.
    ///
    /// The second operand is ignored by the unary NOT.
    pub fn apply(self, a: bool, b: bool) -> bool {
        match self {
            Operator::Not => !a,
            Operator::Xor => a != b,
            Operator::And => a && b,
            Operator::Or => a || b,
            Operator::Implies => !a || b,
            Operator::Xnor => a == b,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
