use crate::*;
use pest::error::InputLocation;
use pest::{iterators, Parser};

#[derive(Parser)]
#[grammar_inline = r####"
expr        = _{ SOI ~ equivalence ~ EOI }
equivalence =  { implication ~ ( op_xnor ~ implication )* }
implication =  { disjunction ~ ( op_implies ~ disjunction )* }
disjunction =  { conjunction ~ ( op_or ~ conjunction )* }
conjunction =  { exclusion ~ ( op_and ~ exclusion )* }
exclusion   =  { negation ~ ( op_xor ~ negation )* }
negation    =  { op_not* ~ primary }
primary     = _{ constant | identifier | "(" ~ equivalence ~ ")" }

op_xnor     =  { "=" }
op_implies  =  { ">" }
op_or       =  { "|" }
op_and      =  { "&" }
op_xor      =  { "^" }
op_not      =  { "~" }

constant    = @{ "0" | "1" }
identifier  = @{ (ASCII_ALPHA | '2'..'9') ~ ASCII_ALPHANUMERIC* }

WHITESPACE  = _{ WHITE_SPACE }
"####]
struct ExpressionParser;

/// Parse an infix expression directly into postfix tokens.
///
/// This is an alternative to the [tokenize], [check_syntax] and [to_postfix] pipeline,
/// based on a grammar of the expressions. Both accept the same expressions and produce the
/// same postfix sequences (including token positions). Errors are reported with the same kinds
/// in the common cases, but the first error found may differ on some inputs.
///
/// ```
/// use qmkit::{parse_postfix, tokenize, to_postfix};
/// # use qmkit::QmcError;
/// # fn main() -> Result<(), QmcError> {
///
/// let source = "A > ~B & (C | D)";
/// assert_eq!(parse_postfix(source)?, to_postfix(&tokenize(source))?);
/// # Ok(())
/// # }
/// ```
pub fn parse_postfix(source: &str) -> Result<Vec<Token>, QmcError> {
    let parsed = ExpressionParser::parse(Rule::expr, source)
        .map_err(|err| syntax_error(source, err.location))?;

    let mut result = vec![];
    for pair in parsed {
        if pair.as_rule() != Rule::EOI {
            load_postfix(pair, &mut result)?;
        }
    }
    Ok(result)
}

fn load_postfix(pair: iterators::Pair<Rule>, result: &mut Vec<Token>) -> Result<(), QmcError> {
    let position = pair.as_span().start();
    match pair.as_rule() {
        Rule::constant => result.push(Token::new(pair.as_str(), position, TokenKind::Constant)),
        Rule::identifier => result.push(Token::identifier(pair.as_str(), position)),
        Rule::negation => {
            let mut negations = vec![];
            for inner in pair.into_inner() {
                match inner.as_rule() {
                    Rule::op_not => negations.push(operator_token(&inner)?),
                    _ => load_postfix(inner, result)?,
                }
            }
            // The innermost negation applies first
            result.extend(negations.into_iter().rev());
        }
        _ => {
            let mut inner = pair.into_inner();
            if let Some(first) = inner.next() {
                load_postfix(first, result)?;
            }
            while let (Some(op), Some(operand)) = (inner.next(), inner.next()) {
                load_postfix(operand, result)?;
                result.push(operator_token(&op)?);
            }
        }
    }
    Ok(())
}

fn operator_token(pair: &iterators::Pair<Rule>) -> Result<Token, QmcError> {
    let position = pair.as_span().start();
    pair.as_str()
        .chars()
        .next()
        .and_then(Operator::from_char)
        .map(|op| Token::operator(op, position))
        .ok_or_else(|| {
            SyntaxError::new(
                position,
                SyntaxErrorKind::MalformedExpression("unknown operator"),
            )
            .into()
        })
}

fn syntax_error(source: &str, location: InputLocation) -> QmcError {
    let position = match location {
        InputLocation::Pos(p) => p,
        InputLocation::Span((p, _)) => p,
    };

    let end = source.trim_end().len();
    let depth = source[..position.min(end)]
        .chars()
        .fold(0isize, |depth, c| match c {
            '(' => depth + 1,
            ')' => depth - 1,
            _ => depth,
        });

    let kind = match tokenize(&source[position.min(end)..]).into_iter().next() {
        None if depth > 0 => SyntaxErrorKind::MissingClosingBracket,
        None => SyntaxErrorKind::UnexpectedEnd,
        Some(tok) if tok.kind() == TokenKind::ClosingBracket && depth <= 0 => {
            SyntaxErrorKind::UnexpectedClosingBracket
        }
        Some(tok) => SyntaxErrorKind::UnexpectedToken(tok.text().to_string()),
    };
    SyntaxError::new(position.min(end), kind).into()
}
