//! The closed set of user actions the engine accepts.

use super::evaluation::Operator;
use super::unary::UnaryFunction;

/// A discrete user gesture.
///
/// Input adapters produce these 1:1 from recognized gestures; the engine
/// dispatches them in [`CalculatorEngine::press`](super::CalculatorEngine::press).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// A numeral key, 0 through 9.
    Digit(u8),
    /// The decimal point key.
    Decimal,
    /// A binary operator key.
    Operator(Operator),
    Equals,
    /// Negate the display value.
    Sign,
    Percent,
    /// Backspace.
    Delete,
    /// Full reset, memory excluded.
    Clear,
    /// A unary function key.
    Unary(UnaryFunction),
    MemoryAdd,
    MemorySubtract,
    MemoryRecall,
    MemoryClear,
}
