//! Date-math expression parser implementation using pest

use crate::datemath::ast::{DateMathExpr, Operation, Unit};
use crate::datemath::error::ParseError;
use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "datemath/grammar.pest"]
struct DateMathParser;

/// Parse an expression string into a [`DateMathExpr`].
pub fn parse_expression(input: &str) -> Result<DateMathExpr, ParseError> {
    let pairs = DateMathParser::parse(Rule::expression, input).map_err(|e| {
        let column = match e.line_col {
            pest::error::LineColLocation::Pos((_, col)) => col,
            pest::error::LineColLocation::Span((_, col), _) => col,
        };
        ParseError::Syntax {
            expression: input.to_string(),
            column,
            message: format!("{}", e.variant),
        }
    })?;

    let root = pairs
        .into_iter()
        .next()
        .ok_or_else(|| ParseError::Internal {
            message: "no expression parsed".to_string(),
        })?
        .into_inner()
        .next()
        .ok_or_else(|| ParseError::Internal {
            message: "empty expression".to_string(),
        })?;

    match root.as_rule() {
        Rule::now_expression => {
            let operations = parse_operations(root, input)?;
            Ok(DateMathExpr::now(operations))
        }
        Rule::anchored_expression => {
            let mut inner = root.into_inner();
            let date = inner
                .next()
                .ok_or_else(|| ParseError::Internal {
                    message: "missing anchor date".to_string(),
                })?
                .as_str()
                .to_string();
            let operations = inner
                .map(|pair| parse_operation(pair, input))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(DateMathExpr::anchored(date, operations))
        }
        Rule::date_only => {
            let date = root
                .into_inner()
                .next()
                .ok_or_else(|| ParseError::Internal {
                    message: "missing date literal".to_string(),
                })?
                .as_str()
                .to_string();
            Ok(DateMathExpr::anchored(date, Vec::new()))
        }
        other => Err(ParseError::Internal {
            message: format!("unexpected expression rule: {other:?}"),
        }),
    }
}

fn parse_operations(pair: Pair<Rule>, input: &str) -> Result<Vec<Operation>, ParseError> {
    pair.into_inner()
        .map(|inner| parse_operation(inner, input))
        .collect()
}

fn parse_operation(pair: Pair<Rule>, input: &str) -> Result<Operation, ParseError> {
    match pair.as_rule() {
        Rule::shift => {
            let mut inner = pair.into_inner();
            let sign = inner.next().ok_or_else(|| ParseError::Internal {
                message: "missing shift sign".to_string(),
            })?;
            let negative = sign.as_str() == "-";

            let next = inner.next().ok_or_else(|| ParseError::Internal {
                message: "missing shift unit".to_string(),
            })?;
            let (amount, unit_pair) = if next.as_rule() == Rule::amount {
                let amount =
                    next.as_str()
                        .parse::<u32>()
                        .map_err(|_| ParseError::InvalidAmount {
                            value: next.as_str().to_string(),
                            expression: input.to_string(),
                        })?;
                let unit_pair = inner.next().ok_or_else(|| ParseError::Internal {
                    message: "missing shift unit".to_string(),
                })?;
                (amount, unit_pair)
            } else {
                // Bare unit, e.g. `now-y`: the amount defaults to 1.
                (1, next)
            };

            Ok(Operation::Shift {
                negative,
                amount,
                unit: parse_unit(unit_pair)?,
            })
        }
        Rule::round => {
            let unit_pair = pair.into_inner().next().ok_or_else(|| ParseError::Internal {
                message: "missing rounding unit".to_string(),
            })?;
            Ok(Operation::Round {
                unit: parse_unit(unit_pair)?,
            })
        }
        other => Err(ParseError::Internal {
            message: format!("unexpected operation rule: {other:?}"),
        }),
    }
}

fn parse_unit(pair: Pair<Rule>) -> Result<Unit, ParseError> {
    Unit::from_symbol(pair.as_str()).ok_or_else(|| ParseError::Internal {
        message: format!("unknown unit: {}", pair.as_str()),
    })
}
