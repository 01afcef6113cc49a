use pest::Parser;
use pest_derive::Parser;
use thiserror::Error;

pub mod parser;
pub mod polynomial;
pub mod solver;

pub use polynomial::Polynomial;
pub use solver::{Outcome, Root, Solution};

#[derive(Parser)]
#[grammar = "equation.pest"]
pub struct EquationParser;

impl EquationParser {
  /// Run the side rule over one whitespace-stripped side of an equation.
  pub fn parse_equation_side(
    input: &str,
  ) -> Result<pest::iterators::Pairs<'_, Rule>, Box<pest::error::Error<Rule>>>
  {
    Self::parse(Rule::side, input).map_err(Box::new)
  }
}

#[derive(Error, Debug)]
pub enum EquationError {
  #[error("the equation has no '=' separator")]
  MissingSeparator,
  #[error("the equation has more than one '=' separator")]
  RepeatedSeparator,
  #[error("the left-hand side of the equation is empty")]
  EmptyLeftSide,
  #[error("the right-hand side of the equation is empty")]
  EmptyRightSide,
  #[error("term syntax error: {0}")]
  Syntax(#[from] Box<pest::error::Error<Rule>>),
}

/// Everything derived from one equation: the canonical polynomial, its
/// reduced form and nominal degree, and the computed solution.
#[derive(Debug, Clone)]
pub struct Analysis {
  pub polynomial: Polynomial,
  pub reduced_form: String,
  pub degree: u32,
  pub solution: Solution,
}

/// Parse, reduce and solve a single polynomial equation.
///
/// The input is stripped of whitespace, split on a single `=`, and each
/// side is scanned for `[sign][coefficient][*]X^<exponent>` terms. The two
/// sides are then combined into `LHS - RHS = 0` and handed to the solver.
pub fn solve_equation(input: &str) -> Result<Analysis, EquationError> {
  let stripped: String =
    input.chars().filter(|c| !c.is_whitespace()).collect();

  let (lhs, rhs) = stripped
    .split_once('=')
    .ok_or(EquationError::MissingSeparator)?;
  if rhs.contains('=') {
    return Err(EquationError::RepeatedSeparator);
  }
  if lhs.is_empty() {
    return Err(EquationError::EmptyLeftSide);
  }
  if rhs.is_empty() {
    return Err(EquationError::EmptyRightSide);
  }

  let left = parser::parse_side(lhs)?;
  let right = parser::parse_side(rhs)?;
  let polynomial = Polynomial::combine(&left, &right);
  let solution = solver::solve(&polynomial);

  Ok(Analysis {
    reduced_form: polynomial.to_string(),
    degree: polynomial.degree(),
    polynomial,
    solution,
  })
}
