use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};
use clap::Parser;
use polysolve::solve_equation;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// The equation to reduce and solve, e.g. "5 * X^0 + 4 * X^1 = 4 * X^0".
  /// Read from standard input when omitted.
  equation: Option<String>,
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  let equation = match cli.equation {
    Some(equation) => equation,
    None => read_equation()?,
  };

  let analysis = solve_equation(&equation)?;

  println!("Reduced form: {}", analysis.reduced_form);
  println!("Polynomial degree: {}", analysis.degree);
  if let Some(discriminant) = analysis.solution.discriminant {
    println!("Discriminant: {discriminant}");
  }
  println!("{}", analysis.solution);

  Ok(())
}

fn read_equation() -> Result<String> {
  print!("equation> ");
  io::stdout().flush().context("failed to flush prompt")?;

  let mut line = String::new();
  let read = io::stdin()
    .lock()
    .read_line(&mut line)
    .context("failed to read equation")?;
  if read == 0 || line.trim().is_empty() {
    bail!("no equation given");
  }
  Ok(line)
}
