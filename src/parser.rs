use std::collections::BTreeMap;

use pest::iterators::Pair;

use crate::{EquationError, EquationParser, Rule};

/// One textual term as matched by the grammar. Lives only long enough to
/// be folded into the coefficient mapping.
#[derive(Debug, Clone, Copy)]
struct Term {
  coefficient: f64,
  exponent: u32,
}

/// Scan one whitespace-stripped side for terms and sum the signed
/// coefficients per exponent.
///
/// The side rule skips characters that do not begin a term, so a side
/// without any matching term yields an empty mapping rather than an
/// error; missing exponents mean coefficient 0.
pub fn parse_side(input: &str) -> Result<BTreeMap<u32, f64>, EquationError> {
  let pairs = EquationParser::parse_equation_side(input)?;

  let mut coefficients = BTreeMap::new();
  for pair in pairs.flatten() {
    if pair.as_rule() == Rule::term {
      let term = to_term(pair);
      *coefficients.entry(term.exponent).or_insert(0.0) += term.coefficient;
    }
  }
  Ok(coefficients)
}

fn to_term(pair: Pair<Rule>) -> Term {
  let mut sign = 1.0;
  let mut magnitude = 1.0;
  let mut exponent = 0;

  for part in pair.into_inner() {
    match part.as_rule() {
      Rule::sign => {
        if part.as_str() == "-" {
          sign = -1.0;
        }
      }
      // The grammar guarantees digits here; an omitted coefficient keeps
      // the default magnitude of 1.
      Rule::coefficient => {
        magnitude = part.as_str().parse().unwrap_or(1.0);
      }
      // An exponent too large for u32 saturates, which lands the term in
      // the unsolvable degree > 2 branch like any other high power.
      Rule::exponent => {
        exponent = part.as_str().parse().unwrap_or(u32::MAX);
      }
      _ => {}
    }
  }

  Term { coefficient: sign * magnitude, exponent }
}
