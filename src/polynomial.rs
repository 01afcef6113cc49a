use std::collections::BTreeMap;
use std::fmt;

/// A polynomial normalized to `P(x) = 0`, keyed by exponent.
///
/// Built once by [`Polynomial::combine`] and immutable afterwards; the
/// exponent-0 key is always present, even when both sides lacked a
/// constant term.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
  coefficients: BTreeMap<u32, f64>,
}

impl Polynomial {
  /// Merge the two sides of an equation into `lhs - rhs`, over the union
  /// of their exponents.
  pub fn combine(
    lhs: &BTreeMap<u32, f64>,
    rhs: &BTreeMap<u32, f64>,
  ) -> Self {
    let mut coefficients = BTreeMap::new();
    coefficients.insert(0, 0.0);
    for (&exponent, &value) in lhs {
      *coefficients.entry(exponent).or_insert(0.0) += value;
    }
    for (&exponent, &value) in rhs {
      *coefficients.entry(exponent).or_insert(0.0) -= value;
    }
    Self { coefficients }
  }

  /// Nominal degree: the highest exponent key, whether or not its
  /// coefficient is zero.
  pub fn degree(&self) -> u32 {
    self.coefficients.keys().next_back().copied().unwrap_or(0)
  }

  /// Coefficient for `exponent`, 0.0 when the key is absent.
  pub fn coefficient(&self, exponent: u32) -> f64 {
    self.coefficients.get(&exponent).copied().unwrap_or(0.0)
  }

  pub fn coefficients(&self) -> &BTreeMap<u32, f64> {
    &self.coefficients
  }
}

impl fmt::Display for Polynomial {
  /// Reduced form: terms in ascending exponent order, zero coefficients
  /// skipped, terminated by `= 0`. When no constant term gets printed a
  /// synthetic `+ 1 * X^0` is appended in its place — kept for output
  /// compatibility even though it misstates the equation (see DESIGN.md).
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut printed_any = false;
    let mut printed_constant = false;

    for (&exponent, &value) in &self.coefficients {
      if value == 0.0 {
        continue;
      }
      if printed_any {
        write!(f, " {} ", if value < 0.0 { "-" } else { "+" })?;
      } else if value < 0.0 {
        write!(f, "-")?;
      }
      write!(f, "{} * X^{}", value.abs(), exponent)?;
      printed_any = true;
      if exponent == 0 {
        printed_constant = true;
      }
    }

    if printed_any && !printed_constant {
      write!(f, " + 1 * X^0")?;
    }
    if !printed_any {
      write!(f, "0")?;
    }
    write!(f, " = 0")
  }
}
