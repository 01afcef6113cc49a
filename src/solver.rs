use std::fmt;

use crate::polynomial::Polynomial;

/// A single root of the reduced polynomial. Complex roots keep their
/// signed imaginary part; formatting to 2 decimals happens on display
/// only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Root {
  Real(f64),
  Complex { re: f64, im: f64 },
}

impl fmt::Display for Root {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Root::Real(value) => write!(f, "{value}"),
      Root::Complex { re, im } => {
        let op = if *im < 0.0 { '-' } else { '+' };
        write!(f, "{re:.2} {op} {:.2}i", im.abs())
      }
    }
  }
}

/// How the equation resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
  /// One or two roots, listed positionally.
  Roots(Vec<Root>),
  /// Identity equation: every real number satisfies it.
  AllReals,
  /// Contradictory constant equation.
  NoSolution,
  /// Degree above 2; roots are not computed.
  TooHighDegree,
}

/// Result of solving one canonical polynomial.
///
/// `effective_degree` is the degree the solver actually used, which drops
/// below the nominal degree when leading coefficients vanish. The
/// discriminant is recorded only when the quadratic formula ran.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
  pub effective_degree: u32,
  pub discriminant: Option<f64>,
  pub outcome: Outcome,
}

impl fmt::Display for Solution {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match &self.outcome {
      Outcome::TooHighDegree => write!(
        f,
        "The polynomial degree is strictly greater than 2, I can't solve."
      ),
      Outcome::AllReals => write!(f, "All real numbers are solutions."),
      Outcome::NoSolution => write!(f, "No solution."),
      Outcome::Roots(roots) => {
        match self.discriminant {
          Some(d) if d > 0.0 => writeln!(
            f,
            "Discriminant is strictly positive, the two solutions are:"
          )?,
          Some(d) if d < 0.0 => writeln!(
            f,
            "Discriminant is strictly negative, the two complex solutions are:"
          )?,
          Some(_) => writeln!(f, "Discriminant is zero, the solution is:")?,
          None => writeln!(f, "The solution is:")?,
        }
        for (i, root) in roots.iter().enumerate() {
          if i > 0 {
            writeln!(f)?;
          }
          write!(f, "{root}")?;
        }
        Ok(())
      }
    }
  }
}

/// Classify the canonical polynomial by degree and solve the matching
/// branch. Total over `f64`: every division is gated by a zero check.
pub fn solve(polynomial: &Polynomial) -> Solution {
  let degree = polynomial.degree();
  if degree > 2 {
    return Solution {
      effective_degree: degree,
      discriminant: None,
      outcome: Outcome::TooHighDegree,
    };
  }

  let a = polynomial.coefficient(2);
  let b = polynomial.coefficient(1);
  let c = polynomial.coefficient(0);

  // A vanished leading coefficient degrades a nominal quadratic to the
  // linear/constant branch.
  if degree == 2 && a != 0.0 {
    solve_quadratic(a, b, c)
  } else {
    solve_linear(b, c)
  }
}

// Keep -0.0 out of root values so they never display as "-0".
fn normal(value: f64) -> f64 {
  if value == 0.0 {
    0.0
  } else {
    value
  }
}

fn solve_quadratic(a: f64, b: f64, c: f64) -> Solution {
  let discriminant = b * b - 4.0 * a * c;

  let roots = if discriminant > 0.0 {
    let sqrt = discriminant.sqrt();
    vec![
      Root::Real(normal((-b - sqrt) / (2.0 * a))),
      Root::Real(normal((-b + sqrt) / (2.0 * a))),
    ]
  } else if discriminant == 0.0 {
    vec![Root::Real(normal(-b / (2.0 * a)))]
  } else {
    let re = normal(-b / (2.0 * a));
    let im = ((-discriminant).sqrt() / (2.0 * a)).abs();
    vec![Root::Complex { re, im }, Root::Complex { re, im: -im }]
  };

  Solution {
    effective_degree: 2,
    discriminant: Some(discriminant),
    outcome: Outcome::Roots(roots),
  }
}

fn solve_linear(b: f64, c: f64) -> Solution {
  if b == 0.0 {
    Solution {
      effective_degree: 0,
      discriminant: None,
      outcome: if c == 0.0 {
        Outcome::AllReals
      } else {
        Outcome::NoSolution
      },
    }
  } else {
    Solution {
      effective_degree: 1,
      discriminant: None,
      outcome: Outcome::Roots(vec![Root::Real(normal(-c / b))]),
    }
  }
}
