//! Keyboard gesture mapping.
//!
//! Each key maps 1:1 onto one engine action; no calculator logic lives
//! here.

use crate::engine::{Action, Operator, UnaryFunction};

/// Map a single key to an engine action.
///
/// Returns `None` for keys the calculator does not handle.
pub fn action_for_key(key: char) -> Option<Action> {
    match key {
        '0'..='9' => Some(Action::Digit(key as u8 - b'0')),
        '.' => Some(Action::Decimal),
        '+' | '-' | '*' | '/' | '^' => Operator::from_symbol(key).map(Action::Operator),
        '=' | '\n' | '\r' => Some(Action::Equals),
        '%' => Some(Action::Percent),
        '!' => Some(Action::Unary(UnaryFunction::Factorial)),
        '~' => Some(Action::Sign),
        '\u{8}' | '\u{7f}' => Some(Action::Delete),
        'c' | 'C' => Some(Action::Clear),
        _ => None,
    }
}
