//! Calculator evaluation engine.
//!
//! This module owns all arithmetic and display state:
//! - [`CalculatorEngine`]: the action state machine
//! - [`Action`]: the closed set of user gestures it accepts
//! - [`Operator`] / [`UnaryFunction`]: the key sets
//! - [`MemoryEntry`]: one recorded memory update

mod actions;
mod evaluation;
mod memory;
mod state;
mod unary;

pub use actions::Action;
pub use evaluation::{EvalError, Operator};
pub use memory::{DEFAULT_HISTORY_CAP, MemoryEntry};
pub use state::CalculatorEngine;
pub use unary::{MAX_FACTORIAL, UnaryFunction};
