//! Unary functions over the display value.
//!
//! Trigonometric functions take their argument in degrees. Factorial is a
//! table lookup covering every value that fits in an IEEE double.

use std::fmt;

use lazy_static::lazy_static;

use super::evaluation::EvalError;

/// Largest `n` for which `n!` is finite in an f64.
pub const MAX_FACTORIAL: usize = 170;

/// Tolerance when deciding whether a float is an integer.
const INTEGER_EPSILON: f64 = 1e-9;

/// Cosine magnitudes below this make the tangent undefined.
const TANGENT_EPSILON: f64 = 1e-12;

lazy_static! {
    /// Factorials `0..=170` for O(1) lookup.
    static ref FACTORIALS: Vec<f64> = {
        let mut table = Vec::with_capacity(MAX_FACTORIAL + 1);
        table.push(1.0);
        for n in 1..=MAX_FACTORIAL {
            let previous: f64 = table[n - 1];
            table.push(previous * n as f64);
        }
        table
    };
}

/// A unary function key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryFunction {
    Sin,
    Cos,
    Tan,
    Sqrt,
    Factorial,
}

impl UnaryFunction {
    /// Name used in operation descriptions.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Sqrt => "sqrt",
            Self::Factorial => "fact",
        }
    }
}

impl fmt::Display for UnaryFunction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Apply a unary function to a display value.
pub fn apply(function: UnaryFunction, value: f64) -> Result<f64, EvalError> {
    let result = match function {
        UnaryFunction::Sin => value.to_radians().sin(),
        UnaryFunction::Cos => value.to_radians().cos(),
        UnaryFunction::Tan => {
            let radians = value.to_radians();
            if radians.cos().abs() < TANGENT_EPSILON {
                return Err(EvalError::Domain("tangent is undefined here"));
            }
            radians.tan()
        }
        UnaryFunction::Sqrt => {
            if value < 0.0 {
                return Err(EvalError::Domain("square root of a negative number"));
            }
            value.sqrt()
        }
        UnaryFunction::Factorial => return factorial(value),
    };
    if result.is_finite() {
        Ok(result)
    } else {
        Err(EvalError::NonFinite)
    }
}

fn factorial(value: f64) -> Result<f64, EvalError> {
    let rounded = value.round();
    if (value - rounded).abs() > INTEGER_EPSILON || rounded < 0.0 {
        return Err(EvalError::Domain("factorial needs a non-negative integer"));
    }
    if rounded > MAX_FACTORIAL as f64 {
        return Err(EvalError::NonFinite);
    }
    Ok(FACTORIALS[rounded as usize])
}
