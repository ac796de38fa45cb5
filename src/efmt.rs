//! Formatting API for token sequences

use crate::{Operator, Token, TokenKind};
use delegate::delegate;

use std::fmt;

pub struct FormatterConfig<'a> {
    s_not: &'a str,
    s_xor: &'a str,
    s_and: &'a str,
    s_or: &'a str,
    s_implies: &'a str,
    s_xnor: &'a str,
}

/// Compact rendering, using the symbols accepted by the lexer
pub static DEFAULT_FMT_CFG: FormatterConfig = FormatterConfig {
    s_not: "~",
    s_xor: "^",
    s_and: "&",
    s_or: "|",
    s_implies: ">",
    s_xnor: "=",
};

pub static SPACED_FMT_CFG: FormatterConfig = FormatterConfig {
    s_not: "~",
    s_xor: " ^ ",
    s_and: " & ",
    s_or: " | ",
    s_implies: " > ",
    s_xnor: " = ",
};

pub static LOWERCASE_FMT_CFG: FormatterConfig = FormatterConfig {
    s_not: "not ",
    s_xor: " xor ",
    s_and: " and ",
    s_or: " or ",
    s_implies: " implies ",
    s_xnor: " xnor ",
};

pub struct InfixFormatted<'a> {
    tokens: &'a [Token],
    cfg: &'a FormatterConfig<'a>,
}

/// Define hooks to display separate parts of token sequences.
///
/// Each token is dispatched to a hook according to its [kind](TokenKind).
/// A default formatter is implemented on top of [fmt::Formatter], additional formatters are used through
/// wrappers overriding the Display trait.
pub trait TokenFormatter {
    /// Pass-through function calling an internal [fmt::Formatter].
    ///
    /// This function enables the use of the ```write!``` macro in other functions.
    fn write_fmt(&mut self, args: fmt::Arguments) -> fmt::Result;

    fn write_constant(&mut self, value: bool) -> fmt::Result;

    fn write_identifier(&mut self, name: &str) -> fmt::Result;

    fn write_operator(&mut self, op: Operator) -> fmt::Result;

    fn write_bracket(&mut self, opening: bool) -> fmt::Result;

    /// Separate two consecutive tokens
    fn separate(&mut self) -> fmt::Result;

    fn write_token(&mut self, token: &Token) -> fmt::Result {
        match token.kind() {
            TokenKind::Constant => self.write_constant(token.text() == "1"),
            TokenKind::Identifier => self.write_identifier(token.text()),
            TokenKind::OpeningBracket => self.write_bracket(true),
            TokenKind::ClosingBracket => self.write_bracket(false),
            TokenKind::Whitespace => Ok(()),
            TokenKind::SingleOperator | TokenKind::DoubleOperator | TokenKind::Unknown => {
                match token.as_operator() {
                    Some(op) => self.write_operator(op),
                    None => write!(self, "{}", token.text()),
                }
            }
        }
    }

    /// Write a full sequence, skipping whitespace tokens
    fn write_tokens(&mut self, tokens: &[Token]) -> fmt::Result {
        let mut first = true;
        for token in tokens.iter().filter(|t| t.kind() != TokenKind::Whitespace) {
            match first {
                true => first = false,
                false => self.separate()?,
            }
            self.write_token(token)?;
        }
        Ok(())
    }
}

impl FormatterConfig<'_> {
    pub fn operator(&self, op: Operator) -> &str {
        match op {
            Operator::Not => self.s_not,
            Operator::Xor => self.s_xor,
            Operator::And => self.s_and,
            Operator::Or => self.s_or,
            Operator::Implies => self.s_implies,
            Operator::Xnor => self.s_xnor,
        }
    }

    pub fn infix<'a>(&'a self, tokens: &'a [Token]) -> InfixFormatted<'a> {
        InfixFormatted { tokens, cfg: self }
    }
}

pub struct InfixFormatter<'a, 'b>(&'a mut fmt::Formatter<'b>, &'a FormatterConfig<'a>);

/// Space-separated tokens, without custom operator symbols
pub struct PostfixFormatter<'a, 'b>(InfixFormatter<'a, 'b>);

impl<'a, 'b> InfixFormatter<'a, 'b> {
    pub fn new(f: &'a mut fmt::Formatter<'b>) -> Self {
        Self(f, &DEFAULT_FMT_CFG)
    }
    pub fn with(f: &'a mut fmt::Formatter<'b>, cfg: &'a FormatterConfig) -> Self {
        Self(f, cfg)
    }
}

impl<'a, 'b> PostfixFormatter<'a, 'b> {
    pub fn new(f: &'a mut fmt::Formatter<'b>) -> Self {
        Self(InfixFormatter::new(f))
    }
}

impl TokenFormatter for InfixFormatter<'_, '_> {
    fn write_fmt(&mut self, args: fmt::Arguments) -> fmt::Result {
        fmt::Formatter::write_fmt(self.0, args)
    }

    fn write_constant(&mut self, value: bool) -> fmt::Result {
        match value {
            false => write!(self, "0"),
            true => write!(self, "1"),
        }
    }

    fn write_identifier(&mut self, name: &str) -> fmt::Result {
        write!(self, "{}", name)
    }

    fn write_operator(&mut self, op: Operator) -> fmt::Result {
        let cfg = self.1;
        write!(self, "{}", cfg.operator(op))
    }

    fn write_bracket(&mut self, opening: bool) -> fmt::Result {
        match opening {
            true => write!(self, "("),
            false => write!(self, ")"),
        }
    }

    fn separate(&mut self) -> fmt::Result {
        Ok(())
    }
}

impl TokenFormatter for PostfixFormatter<'_, '_> {
    delegate! {
        to self.0 {
            fn write_fmt(&mut self, args: fmt::Arguments) -> fmt::Result;
            fn write_constant(&mut self, value: bool) -> fmt::Result;
            fn write_identifier(&mut self, name: &str) -> fmt::Result;
            fn write_bracket(&mut self, opening: bool) -> fmt::Result;
        }
    }

    fn write_operator(&mut self, op: Operator) -> fmt::Result {
        write!(self, "{}", op.symbol())
    }

    fn separate(&mut self) -> fmt::Result {
        write!(self, " ")
    }
}

pub struct PostfixFormatted<'a>(pub &'a [Token]);

impl fmt::Display for PostfixFormatted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut ef = PostfixFormatter::new(f);
        ef.write_tokens(self.0)
    }
}

impl fmt::Display for InfixFormatted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut ef = InfixFormatter::with(f, self.cfg);
        ef.write_tokens(self.tokens)
    }
}

/// Compact text of a token sequence.
///
/// Tokens are concatenated without spacing, which gives back the source of
/// an expression rebuilt by the minimizer.
///
/// ```
/// use qmkit::{render, tokenize};
/// assert_eq!(render(&tokenize("A & ~( B|C )")), "A&~(B|C)");
/// ```
pub fn render(tokens: &[Token]) -> String {
    DEFAULT_FMT_CFG.infix(tokens).to_string()
}

#[cfg(test)]
mod tests {
    use crate::efmt::*;
    use crate::*;

    #[test]
    fn infix_configurations() {
        let tokens = tokenize("A&~B | (C>1)");
        assert_eq!(render(&tokens), "A&~B|(C>1)");
        assert_eq!(
            format!("{}", SPACED_FMT_CFG.infix(&tokens)),
            "A & ~B | (C > 1)"
        );
        assert_eq!(
            format!("{}", LOWERCASE_FMT_CFG.infix(&tokens)),
            "A and not B or (C implies 1)"
        );
    }

    #[test]
    fn postfix() -> Result<(), SyntaxError> {
        let postfix = to_postfix(&tokenize("A & (B | ~C) = 0"))?;
        assert_eq!(format!("{}", PostfixFormatted(&postfix)), "A B C ~ | & 0 =");
        Ok(())
    }

    #[test]
    fn whitespace_and_unknown_tokens() {
        let tokens = vec![
            Token::identifier("A", 0),
            Token::new(" ", 1, TokenKind::Whitespace),
            Token::new("$", 2, TokenKind::Unknown),
        ];
        assert_eq!(render(&tokens), "A$");
        assert_eq!(format!("{}", PostfixFormatted(&tokens)), "A $");
    }
}
