//! Split source text into classified tokens

use crate::*;

/// Characters allowed in identifiers
pub(crate) fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Split an expression into tokens.
///
/// This never fails: characters which do not belong to any class become single-character
/// [Unknown](TokenKind::Unknown) tokens, which will be rejected by [check_syntax].
/// Whitespace separates tokens but does not produce any.
/// Identifiers are maximal runs of letters and digits, however a run can not start
/// with a constant: ```10``` is read as two constants and ```1A``` as a constant followed
/// by an identifier.
///
/// ```
/// use qmkit::{tokenize, TokenKind};
///
/// let tokens = tokenize("A1 & ~(b | 0)");
/// assert_eq!(tokens.len(), 8);
/// assert_eq!(tokens[0].text(), "A1");
/// assert_eq!(tokens[2].kind(), TokenKind::SingleOperator);
/// assert_eq!(tokens[4].position(), 7);
/// ```
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = vec![];
    let mut chars = source.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        let kind = match c {
            _ if c.is_whitespace() => continue,
            '0' | '1' => TokenKind::Constant,
            '(' => TokenKind::OpeningBracket,
            ')' => TokenKind::ClosingBracket,
            _ => match Operator::from_char(c) {
                Some(op) if op.arity() == 1 => TokenKind::SingleOperator,
                Some(_) => TokenKind::DoubleOperator,
                None if is_identifier_char(c) => {
                    let mut end = pos + c.len_utf8();
                    while let Some((next, n)) = chars.peek() {
                        if !is_identifier_char(*n) {
                            break;
                        }
                        end = *next + n.len_utf8();
                        chars.next();
                    }
                    tokens.push(Token::identifier(&source[pos..end], pos));
                    continue;
                }
                None => TokenKind::Unknown,
            },
        };
        tokens.push(Token::new(c.to_string(), pos, kind));
    }
    tokens
}
