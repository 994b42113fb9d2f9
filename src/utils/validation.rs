//! Input validation primitives.
//!
//! Provides ergonomic helpers for the checks every operation repeats:
//! - Argument count against an operation's arity
//! - Parsing integer operands with a descriptive error
//! - Bounding an integer to an inclusive range

use crate::error::{Error, Result};
use crate::operation::Operation;

/// Require the argument list to satisfy the operation's arity.
///
/// Returns the arguments unchanged on success so calls can chain:
/// ```ignore
/// let args = validation::require_arity(Operation::Sort, args)?;
/// ```
pub fn require_arity(op: Operation, args: &[String]) -> Result<&[String]> {
    if op.arity().accepts(args.len()) {
        Ok(args)
    } else {
        Err(arity_error(op, args.len()))
    }
}

/// Require exactly one argument and return it.
pub fn require_single(op: Operation, args: &[String]) -> Result<&str> {
    match args {
        [only] => Ok(only.as_str()),
        _ => Err(arity_error(op, args.len())),
    }
}

fn arity_error(op: Operation, actual: usize) -> Error {
    Error::validation_invalid_arity(
        op.name(),
        op.arity_message(),
        op.arity().to_string(),
        actual,
    )
}

/// Parse a base-10 32-bit integer operand.
pub fn parse_integer(op: Operation, value: &str) -> Result<i32> {
    value
        .parse::<i32>()
        .map_err(|e| Error::validation_invalid_number(op.name(), value, e.to_string()))
}

/// Require `value` to fall within `min..=max`.
///
/// `below` and `above` are the messages reported on the respective side.
pub fn require_in_range(
    op: Operation,
    value: i64,
    min: i64,
    max: i64,
    below: &str,
    above: &str,
) -> Result<i64> {
    if value < min {
        Err(Error::validation_out_of_range(op.name(), below, value, min, max))
    } else if value > max {
        Err(Error::validation_out_of_range(op.name(), above, value, min, max))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn require_single_returns_value() {
        let args = strings(&["hello"]);
        assert_eq!(require_single(Operation::Reverse, &args).unwrap(), "hello");
    }

    #[test]
    fn require_single_rejects_two() {
        let args = strings(&["a", "b"]);
        let err = require_single(Operation::Reverse, &args).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationInvalidArity);
        assert_eq!(err.message, "Reverse operation requires exactly 1 string");
        assert_eq!(err.details["actual"], 2);
    }

    #[test]
    fn require_single_rejects_none() {
        let err = require_single(Operation::Uppercase, &[]).unwrap_err();
        assert_eq!(err.message, "Uppercase operation requires exactly 1 string");
        assert_eq!(err.details["expected"], "exactly 1");
        assert_eq!(err.details["actual"], 0);
    }

    #[test]
    fn require_arity_at_least_one() {
        assert!(require_arity(Operation::Sort, &strings(&["a", "b", "c"])).is_ok());
        let err = require_arity(Operation::Sort, &[]).unwrap_err();
        assert_eq!(err.message, "Sort operation requires at least 1 element");
    }

    #[test]
    fn parse_integer_accepts_signed_values() {
        assert_eq!(parse_integer(Operation::Prime, "17").unwrap(), 17);
        assert_eq!(parse_integer(Operation::Prime, "-4").unwrap(), -4);
        assert_eq!(parse_integer(Operation::Prime, "+8").unwrap(), 8);
    }

    #[test]
    fn parse_integer_rejects_text() {
        for bad in ["abc", "", "1.5", " 3", "12x"] {
            let err = parse_integer(Operation::Factorial, bad).unwrap_err();
            assert_eq!(err.code, ErrorCode::ValidationInvalidNumber, "input {:?}", bad);
        }
    }

    #[test]
    fn parse_integer_rejects_values_beyond_32_bits() {
        assert_eq!(parse_integer(Operation::Prime, "2147483647").unwrap(), i32::MAX);
        assert_eq!(parse_integer(Operation::Prime, "-2147483648").unwrap(), i32::MIN);
        for bad in ["2147483648", "-2147483649", "99999999999"] {
            let err = parse_integer(Operation::Prime, bad).unwrap_err();
            assert_eq!(err.code, ErrorCode::ValidationInvalidNumber, "input {:?}", bad);
        }
    }

    #[test]
    fn require_in_range_reports_side() {
        let below = require_in_range(Operation::Factorial, -1, 0, 20, "low", "high").unwrap_err();
        assert_eq!(below.message, "low");
        let above = require_in_range(Operation::Factorial, 21, 0, 20, "low", "high").unwrap_err();
        assert_eq!(above.message, "high");
        assert_eq!(
            require_in_range(Operation::Factorial, 20, 0, 20, "low", "high").unwrap(),
            20
        );
    }
}
