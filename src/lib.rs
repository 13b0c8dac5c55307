//! # deskcalc
//!
//! A desktop calculator built around a single deferred-evaluation engine.
//!
//! The engine converts discrete user actions (digits, operators, equals,
//! unary functions, memory keys) into display text:
//! * binary operators evaluate left to right with a single pending operand
//!   and no precedence
//! * pressing equals again repeats the last completed operation against
//!   the current display value
//! * percent is context sensitive: with a pending `+` or `-` it takes
//!   a percentage of the left operand, otherwise it divides by 100
//! * trigonometric functions take degrees; factorial is table-driven up
//!   to 170
//! * every arithmetic failure converges on the `"Error"` display state,
//!   and any digit or clear recovers from it
//!
//! Input adapters (keyboard keys, voice transcripts) translate gestures
//! 1:1 into [`engine::Action`] values; display adapters render
//! [`CalculatorEngine::display`](engine::CalculatorEngine::display) and
//! the memory summary verbatim.

pub mod config;
pub mod engine;
pub mod format;
pub mod input;

pub use engine::{Action, CalculatorEngine, Operator, UnaryFunction};
pub use format::FormatConfig;
