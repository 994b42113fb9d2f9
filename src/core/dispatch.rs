//! Argument validation and invocation for each operation.
//!
//! `run` is the single entry point: it resolves the operation name, checks
//! the arguments, calls the matching pure function and returns the trace
//! lines and result for the output layer to render. Nothing here prints.

use std::fmt;

use serde::Serialize;

use crate::collections;
use crate::error::{Error, Result};
use crate::math::{self, FACTORIAL_MAX};
use crate::operation::Operation;
use crate::strings;
use crate::validation;

/// Minimum argv length: the operation name plus one argument.
pub const MIN_TOKENS: usize = 2;

/// Result of an operation, rendered as plain text or as a JSON scalar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    Bool(bool),
    Integer(u64),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Integer(n) => write!(f, "{}", n),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub trace: Vec<String>,
    pub result: Value,
}

impl Outcome {
    fn new(trace: Vec<String>, result: Value) -> Self {
        Self { trace, result }
    }
}

/// Resolve `argv` (program name excluded) and run the operation it names.
pub fn run(argv: &[String]) -> Result<(Operation, Outcome)> {
    let (name, args) = split_argv(argv)?;
    run_named(name, args)
}

/// Run an operation by name once argv has been split.
pub fn run_named(name: &str, args: &[String]) -> Result<(Operation, Outcome)> {
    let op: Operation = name.parse()?;
    crate::log_status!("dispatch", "{} with {} argument(s)", op, args.len());
    let outcome = execute(op, args)?;
    Ok((op, outcome))
}

/// Split argv into the operation name and its arguments.
pub fn split_argv(argv: &[String]) -> Result<(&str, &[String])> {
    match argv {
        [name, args @ ..] if argv.len() >= MIN_TOKENS => Ok((name.as_str(), args)),
        _ => Err(Error::usage_missing_arguments(argv.len(), MIN_TOKENS)),
    }
}

pub fn execute(op: Operation, args: &[String]) -> Result<Outcome> {
    match op {
        Operation::Reverse => reverse(args),
        Operation::Sort => sort(args),
        Operation::Unique => unique(args),
        Operation::Prime => prime(args),
        Operation::Factorial => factorial(args),
        Operation::Uppercase => uppercase(args),
        Operation::WordCount => word_count(args),
        Operation::Palindrome => palindrome(args),
    }
}

/// `[a, b, c]` rendering used by the trace lines.
pub fn bracketed(items: &[String]) -> String {
    format!("[{}]", items.join(", "))
}

fn reverse(args: &[String]) -> Result<Outcome> {
    let input = validation::require_single(Operation::Reverse, args)?;
    Ok(Outcome::new(
        vec![format!("Reversing string: \"{}\"", input)],
        Value::Text(strings::reverse(input)),
    ))
}

fn sort(args: &[String]) -> Result<Outcome> {
    let elements = validation::require_arity(Operation::Sort, args)?;
    let sorted = collections::sort(elements);
    Ok(Outcome::new(
        vec![format!("Sorting elements: {}", bracketed(elements))],
        Value::Text(sorted.join(",")),
    ))
}

fn unique(args: &[String]) -> Result<Outcome> {
    let elements = validation::require_arity(Operation::Unique, args)?;
    let deduped = collections::unique(elements);
    Ok(Outcome::new(
        vec![format!("Removing duplicates from: {}", bracketed(elements))],
        Value::Text(deduped.join(",")),
    ))
}

fn prime(args: &[String]) -> Result<Outcome> {
    let raw = validation::require_single(Operation::Prime, args)?;
    let n = validation::parse_integer(Operation::Prime, raw)?;
    Ok(Outcome::new(
        vec![format!("Checking if {} is prime", n)],
        Value::Bool(math::is_prime(i64::from(n))),
    ))
}

fn factorial(args: &[String]) -> Result<Outcome> {
    let raw = validation::require_single(Operation::Factorial, args)?;
    let n = validation::parse_integer(Operation::Factorial, raw)?;
    let n = validation::require_in_range(
        Operation::Factorial,
        i64::from(n),
        0,
        i64::from(FACTORIAL_MAX),
        "Factorial requires non-negative number",
        &format!("Factorial input too large (max {})", FACTORIAL_MAX),
    )?;
    // in 0..=FACTORIAL_MAX after the range check
    let n = n as u8;
    Ok(Outcome::new(
        vec![format!("Calculating factorial of {}", n)],
        Value::Integer(math::factorial(n)),
    ))
}

fn uppercase(args: &[String]) -> Result<Outcome> {
    let input = validation::require_single(Operation::Uppercase, args)?;
    Ok(Outcome::new(
        vec![format!("Converting to uppercase: \"{}\"", input)],
        Value::Text(strings::uppercase(input)),
    ))
}

fn word_count(args: &[String]) -> Result<Outcome> {
    let input = validation::require_single(Operation::WordCount, args)?;
    Ok(Outcome::new(
        vec![format!("Counting words in: \"{}\"", input)],
        Value::Integer(strings::word_count(input) as u64),
    ))
}

fn palindrome(args: &[String]) -> Result<Outcome> {
    let input = validation::require_single(Operation::Palindrome, args)?;
    let normalized = strings::normalize_palindrome(input);
    Ok(Outcome::new(
        vec![
            format!("Checking if \"{}\" is palindrome", input),
            format!("Normalized: \"{}\"", normalized),
        ],
        Value::Bool(strings::is_palindrome(input)),
    ))
}
