use chumsky::prelude::*;
use stickercube_core::{Direction, Layer, MAX_REPEAT, Turn};

use crate::{ParseError, Span};

type ParseExtra<'src> = extra::Err<Rich<'src, char, Span>>;

/// Trait alias for parser.
trait NotationParser<'src, O>: Clone + Parser<'src, &'src str, O, ParseExtra<'src>> {}
impl<'src, O, T> NotationParser<'src, O> for T where
    T: Clone + Parser<'src, &'src str, O, ParseExtra<'src>>
{
}

/// Parses a single move token such as `R`, `m'`, or `F2`.
pub fn parse_token(token: &str) -> Result<Turn, ParseError> {
    parse_token_at(token, Span::from(0..token.len()))
}

/// Parses a whitespace-separated sequence of move tokens.
///
/// The whole string is parsed before anything is returned, so an invalid token
/// anywhere in the input produces an error and no turns.
pub fn parse_notation(s: &str) -> Result<Vec<Turn>, ParseError> {
    let tokens = token_list()
        .parse(s)
        .into_result()
        .map_err(|errors| {
            let span = errors
                .first()
                .map_or(Span::from(0..s.len()), |error| *error.span());
            ParseError::InvalidMoveToken {
                token: s.get(span.into_range()).unwrap_or(s).to_owned(),
                span,
            }
        })?;
    tokens
        .into_iter()
        .map(|(token, span)| parse_token_at(token, span))
        .collect()
}

fn parse_token_at(token: &str, span: Span) -> Result<Turn, ParseError> {
    let result = turn().parse(token).into_result();
    result.map_err(|_| ParseError::InvalidMoveToken {
        token: token.to_owned(),
        span,
    })
}

/// Maximal runs of non-whitespace characters, with their spans.
fn token_list<'src>() -> impl NotationParser<'src, Vec<(&'src str, Span)>> {
    any()
        .filter(|c: &char| !c.is_whitespace())
        .repeated()
        .at_least(1)
        .to_slice()
        .map_with(|token, e| (token, e.span()))
        .separated_by(text::whitespace().at_least(1))
        .collect()
        .padded()
}

/// Layer letter followed by at most one modifier.
fn turn<'src>() -> impl NotationParser<'src, Turn> {
    layer()
        .then(modifier().or_not())
        .try_map(|(layer, modifier), span| {
            let (direction, repeat) = modifier.unwrap_or((Direction::Clockwise, 1));
            Turn::new(layer, direction)
                .with_repeat(repeat)
                .map_err(|err| Rich::custom(span, err))
        })
}

fn layer<'src>() -> impl NotationParser<'src, Layer> {
    any().try_map(|c: char, span| {
        Layer::from_symbol(c)
            .ok_or_else(|| Rich::custom(span, format!("unknown layer: {c}")))
    })
}

fn modifier<'src>() -> impl NotationParser<'src, (Direction, u32)> {
    choice((
        just('\'').to((Direction::CounterClockwise, 1)),
        any().try_map(|c: char, span| match c.to_digit(10) {
            Some(repeat @ 2..=MAX_REPEAT) => Ok((Direction::Clockwise, repeat)),
            _ => Err(Rich::custom(span, format!("invalid modifier: {c}"))),
        }),
    ))
}
