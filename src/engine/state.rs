//! The calculator state machine.

use tracing::debug;

use super::actions::Action;
use super::evaluation::{self, EvalError, Operator};
use super::memory::{DEFAULT_HISTORY_CAP, MemoryBank, MemoryEntry};
use super::unary::{self, UnaryFunction};
use crate::format::{ERROR_DISPLAY, FormatConfig, format_number};

/// Deferred-evaluation calculator engine.
///
/// Converts a stream of discrete user actions into display text. Binary
/// operators evaluate left to right with a single pending operand and no
/// precedence; pressing equals with no pending operator repeats the last
/// completed operation against the current display value.
///
/// Every action method always succeeds from the caller's point of view:
/// arithmetic failures converge on the `"Error"` display state with the
/// pending operation cleared, and any digit or clear recovers from it.
///
/// The engine performs no I/O and provides no internal synchronization;
/// concurrent producers (keyboard and voice input, say) must serialize
/// their calls.
#[derive(Clone, Debug)]
pub struct CalculatorEngine {
    display: String,
    /// Left operand and operator, captured together when an operator key
    /// is pressed.
    pending: Option<(f64, Operator)>,
    /// The next digit starts a fresh number instead of appending.
    reset_on_next_input: bool,
    memory: MemoryBank,
    /// Description of the most recently completed operation, consumed by
    /// the next memory add or subtract to label its history entry.
    last_operation: Option<String>,
    /// Operator and right operand of the last completed binary operation,
    /// for repeat-equals.
    repeat: Option<(Operator, f64)>,
    turbo: bool,
    format: FormatConfig,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            pending: None,
            reset_on_next_input: false,
            memory: MemoryBank::new(DEFAULT_HISTORY_CAP),
            last_operation: None,
            repeat: None,
            turbo: false,
            format: FormatConfig::default(),
        }
    }

    pub fn with_format(mut self, format: FormatConfig) -> Self {
        self.format = format;
        self
    }

    pub fn with_history_cap(mut self, cap: usize) -> Self {
        self.memory = MemoryBank::new(cap);
        self
    }

    /// Current display text. Never empty: a numeral, `"0"`, or `"Error"`.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Memory accumulator formatted for display.
    pub fn memory_display(&self) -> String {
        self.format_value(self.memory.value())
    }

    /// Bounded memory history, oldest first.
    pub fn memory_history(&self) -> impl Iterator<Item = &MemoryEntry> {
        self.memory.history()
    }

    /// Memory history rendered one entry per line.
    pub fn memory_history_text(&self) -> String {
        self.memory.history_text()
    }

    /// Whether an operator is waiting for its right operand.
    pub fn has_pending_operator(&self) -> bool {
        self.pending.is_some()
    }

    /// Switch evaluation to the raw NaN-folding path. Observable results
    /// are identical either way.
    pub fn set_turbo_mode(&mut self, turbo: bool) {
        self.turbo = turbo;
    }

    /// Dispatch a single user action.
    pub fn press(&mut self, action: Action) {
        debug!(?action, "dispatching");
        match action {
            Action::Digit(digit) => self.digit(digit),
            Action::Decimal => self.decimal(),
            Action::Operator(operator) => self.operator(operator),
            Action::Equals => self.equals(),
            Action::Sign => self.sign(),
            Action::Percent => self.percent(),
            Action::Delete => self.delete(),
            Action::Clear => self.clear(),
            Action::Unary(function) => self.unary(function),
            Action::MemoryAdd => self.memory_add(),
            Action::MemorySubtract => self.memory_subtract(),
            Action::MemoryRecall => self.memory_recall(),
            Action::MemoryClear => self.memory_clear(),
        }
    }

    /// Enter one digit, 0 through 9.
    pub fn digit(&mut self, digit: u8) {
        if digit > 9 {
            return;
        }
        let key = char::from(b'0' + digit);
        if self.reset_on_next_input || self.display == "0" || self.display == ERROR_DISPLAY {
            self.display.clear();
            self.display.push(key);
        } else if self.display.len() < self.format.max_length {
            self.display.push(key);
        }
        // Oversized appends drop the keystroke but the flags clear anyway.
        self.reset_on_next_input = false;
        self.last_operation = None;
    }

    /// Enter the decimal point.
    pub fn decimal(&mut self) {
        let separator = self.format.decimal_separator;
        if self.reset_on_next_input || self.display == ERROR_DISPLAY {
            self.display = format!("0{separator}");
            self.reset_on_next_input = false;
            self.last_operation = None;
        } else if !self.display.contains(separator) && self.display.len() < self.format.max_length
        {
            self.display.push(separator);
            self.last_operation = None;
        }
    }

    /// Press a binary operator key.
    ///
    /// With a pending operator and a freshly typed right operand, the
    /// pending operation evaluates immediately (chained, no precedence)
    /// and its result becomes the new left operand. Pressing two operators
    /// in a row just replaces the pending operator.
    pub fn operator(&mut self, operator: Operator) {
        let Some(value) = self.parse_display() else {
            return;
        };
        match self.pending {
            Some((left, pending_operator)) if !self.reset_on_next_input => {
                match self.eval(left, pending_operator, value) {
                    Ok(result) => {
                        self.display = self.format_value(result);
                        self.pending = Some((result, operator));
                    }
                    Err(error) => {
                        self.show_error(error);
                        return;
                    }
                }
            }
            _ => self.pending = Some((value, operator)),
        }
        self.reset_on_next_input = true;
    }

    /// Press equals: complete the pending operation, or repeat the last
    /// completed one against the current display value.
    pub fn equals(&mut self) {
        if let Some((left, operator)) = self.pending {
            let Some(right) = self.parse_display() else {
                return;
            };
            self.repeat = Some((operator, right));
            self.complete(left, operator, right);
        } else if let Some((operator, right)) = self.repeat {
            let Some(left) = self.parse_display() else {
                return;
            };
            self.complete(left, operator, right);
        }
    }

    /// Negate the display value. A fresh edit, not a recorded operation.
    pub fn sign(&mut self) {
        let Some(value) = self.parse_display() else {
            return;
        };
        self.display = self.format_value(-value);
        self.last_operation = None;
    }

    /// Percent is context sensitive: with a pending `+` or `-` it takes a
    /// percentage of the left operand; otherwise (`*`, `/`, `^`, or no
    /// pending operator) it divides the display value by 100.
    pub fn percent(&mut self) {
        let Some(value) = self.parse_display() else {
            return;
        };
        let result = match self.pending {
            Some((left, Operator::Add | Operator::Subtract)) => left * value / 100.0,
            _ => value / 100.0,
        };
        if !result.is_finite() {
            self.show_error(EvalError::NonFinite);
            return;
        }
        let formatted = self.format_value(result);
        self.last_operation = if self.pending.is_none() {
            // Standalone percent is a completed operation in its own right.
            Some(format!("{}%={}", self.format_value(value), formatted))
        } else {
            None
        };
        self.display = formatted;
        self.reset_on_next_input = true;
    }

    /// Backspace: drop the last character, or start over from `"0"`.
    pub fn delete(&mut self) {
        if self.reset_on_next_input || self.display == ERROR_DISPLAY {
            self.display = "0".to_string();
            self.reset_on_next_input = false;
        } else if self.display.len() <= 1 {
            self.display = "0".to_string();
        } else {
            self.display.pop();
        }
        self.last_operation = None;
    }

    /// Full reset. Memory is only cleared by [`Self::memory_clear`].
    pub fn clear(&mut self) {
        self.display = "0".to_string();
        self.pending = None;
        self.reset_on_next_input = false;
        self.last_operation = None;
        self.repeat = None;
    }

    /// Apply a unary function to the display value.
    pub fn unary(&mut self, function: UnaryFunction) {
        let Some(value) = self.parse_display() else {
            return;
        };
        match unary::apply(function, value) {
            Ok(result) => {
                let formatted = self.format_value(result);
                self.last_operation = Some(format!(
                    "{}({})={}",
                    function,
                    self.format_value(value),
                    formatted
                ));
                self.display = formatted;
                self.reset_on_next_input = true;
            }
            Err(error) => self.show_error(error),
        }
    }

    /// Add the display value to memory.
    pub fn memory_add(&mut self) {
        self.memory_update(true);
    }

    /// Subtract the display value from memory.
    pub fn memory_subtract(&mut self) {
        self.memory_update(false);
    }

    /// Recall memory into the display.
    pub fn memory_recall(&mut self) {
        let formatted = self.memory_display();
        if formatted == ERROR_DISPLAY {
            // Memory is kept finite, so this is a defensive reset.
            self.memory.reset_value();
            self.display = "0".to_string();
        } else {
            self.display = formatted;
        }
        self.reset_on_next_input = true;
        self.last_operation = None;
    }

    /// Clear the memory value and its history.
    pub fn memory_clear(&mut self) {
        self.memory.clear();
    }

    fn memory_update(&mut self, is_addition: bool) {
        let Some(value) = self.parse_display() else {
            return;
        };
        let next = if is_addition {
            self.memory.value() + value
        } else {
            self.memory.value() - value
        };
        if !next.is_finite() {
            self.memory.reset_value();
            self.show_error(EvalError::NonFinite);
            return;
        }
        let description = self
            .last_operation
            .take()
            .unwrap_or_else(|| self.format_value(value));
        self.memory.record(
            next,
            MemoryEntry {
                is_addition,
                description,
            },
        );
        self.reset_on_next_input = true;
    }

    fn complete(&mut self, left: f64, operator: Operator, right: f64) {
        match self.eval(left, operator, right) {
            Ok(result) => {
                let formatted = self.format_value(result);
                self.last_operation = Some(format!(
                    "{}{}{}={}",
                    self.format_value(left),
                    operator,
                    self.format_value(right),
                    formatted
                ));
                self.display = formatted;
                self.pending = None;
                self.reset_on_next_input = true;
            }
            Err(error) => self.show_error(error),
        }
    }

    fn eval(&self, left: f64, operator: Operator, right: f64) -> Result<f64, EvalError> {
        if self.turbo {
            let result = evaluation::evaluate_raw(left, operator, right);
            if result.is_finite() {
                Ok(result)
            } else {
                Err(EvalError::NonFinite)
            }
        } else {
            evaluation::evaluate(left, operator, right)
        }
    }

    fn parse_display(&self) -> Option<f64> {
        if self.display == ERROR_DISPLAY {
            return None;
        }
        let text = if self.format.decimal_separator == '.' {
            self.display.clone()
        } else {
            self.display.replace(self.format.decimal_separator, ".")
        };
        text.parse::<f64>().ok().filter(|value| value.is_finite())
    }

    fn format_value(&self, value: f64) -> String {
        format_number(value, &self.format)
    }

    /// The single convergence point for every failure path.
    fn show_error(&mut self, error: EvalError) {
        debug!(%error, "calculation failed");
        self.display = ERROR_DISPLAY.to_string();
        self.pending = None;
        self.repeat = None;
        self.reset_on_next_input = true;
        self.last_operation = None;
    }
}
