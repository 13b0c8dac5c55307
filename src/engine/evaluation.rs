//! Binary operator evaluation.
//!
//! Two paths produce identical observable results: [`evaluate`] reports
//! failures as [`EvalError`] values, while [`evaluate_raw`] (the turbo
//! path) folds them into NaN for the caller to map back to the same error
//! state.

use std::fmt;

use thiserror::Error;

/// Right operands below this magnitude count as division by zero,
/// guarding denormals as well as exact zero.
pub(crate) const DIVIDE_EPSILON: f64 = 1e-12;

/// A binary operator key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operator {
    /// Parse an operator from its key symbol.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            '^' => Some(Self::Power),
            _ => None,
        }
    }

    /// The key symbol, used in operation descriptions.
    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Power => '^',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Failure modes of a single calculation step.
///
/// These never escape the engine: every action method succeeds from the
/// caller's point of view, and all failures converge on the `"Error"`
/// display state.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("division by zero")]
    DivideByZero,
    #[error("result is not a finite number")]
    NonFinite,
    #[error("{0}")]
    Domain(&'static str),
}

/// Evaluate one binary operation on IEEE doubles.
pub fn evaluate(left: f64, operator: Operator, right: f64) -> Result<f64, EvalError> {
    let result = match operator {
        Operator::Add => left + right,
        Operator::Subtract => left - right,
        Operator::Multiply => left * right,
        Operator::Divide => {
            if right.abs() < DIVIDE_EPSILON {
                return Err(EvalError::DivideByZero);
            }
            left / right
        }
        Operator::Power => left.powf(right),
    };
    if result.is_finite() {
        Ok(result)
    } else {
        Err(EvalError::NonFinite)
    }
}

/// Turbo-mode evaluation: failures fold into NaN instead of early error
/// returns. Callers treat any non-finite result as the usual overflow
/// error, so observable behavior matches [`evaluate`].
pub(crate) fn evaluate_raw(left: f64, operator: Operator, right: f64) -> f64 {
    match operator {
        Operator::Add => left + right,
        Operator::Subtract => left - right,
        Operator::Multiply => left * right,
        Operator::Divide if right.abs() < DIVIDE_EPSILON => f64::NAN,
        Operator::Divide => left / right,
        Operator::Power => left.powf(right),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_arithmetic() {
        assert_eq!(evaluate(2.0, Operator::Add, 3.0), Ok(5.0));
        assert_eq!(evaluate(2.0, Operator::Subtract, 3.0), Ok(-1.0));
        assert_eq!(evaluate(2.0, Operator::Multiply, 3.0), Ok(6.0));
        assert_eq!(evaluate(6.0, Operator::Divide, 3.0), Ok(2.0));
        assert_eq!(evaluate(2.0, Operator::Power, 10.0), Ok(1024.0));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(evaluate(1.0, Operator::Divide, 0.0), Err(EvalError::DivideByZero));
        // Denormal-scale divisors are rejected too.
        assert_eq!(evaluate(1.0, Operator::Divide, 1e-13), Err(EvalError::DivideByZero));
    }

    #[test]
    fn test_overflow_is_an_error() {
        assert_eq!(
            evaluate(f64::MAX, Operator::Multiply, 2.0),
            Err(EvalError::NonFinite)
        );
        assert_eq!(
            evaluate(10.0, Operator::Power, 400.0),
            Err(EvalError::NonFinite)
        );
    }

    #[test]
    fn test_raw_path_matches_checked_path() {
        let cases = [
            (2.0, Operator::Add, 3.0),
            (5.0, Operator::Divide, 0.0),
            (f64::MAX, Operator::Multiply, 2.0),
            (2.0, Operator::Power, 0.5),
        ];
        for (left, operator, right) in cases {
            let raw = evaluate_raw(left, operator, right);
            match evaluate(left, operator, right) {
                Ok(value) => assert_eq!(raw, value),
                Err(_) => assert!(!raw.is_finite()),
            }
        }
    }

    #[test]
    fn test_operator_symbols_round_trip() {
        for symbol in ['+', '-', '*', '/', '^'] {
            let operator = Operator::from_symbol(symbol).unwrap();
            assert_eq!(operator.symbol(), symbol);
        }
        assert_eq!(Operator::from_symbol('?'), None);
    }
}
