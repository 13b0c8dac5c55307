//! Numeric display formatting.
//!
//! Every path that writes the engine display goes through [`format_number`],
//! so numeric round-tripping through the engine stays consistent. The
//! formatting parameters are an explicit [`FormatConfig`] value rather than
//! ambient locale state.

use serde::{Deserialize, Serialize};

/// Display text shown for any non-finite or failed computation.
pub const ERROR_DISPLAY: &str = "Error";

/// Magnitudes below this format as plain zero.
pub const ZERO_EPSILON: f64 = 1e-12;

/// Display formatting parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Character used as the decimal separator.
    pub decimal_separator: char,
    /// Maximum display length before scientific fallback engages.
    pub max_length: usize,
    /// Significant digits of the general numeric format.
    pub significant_digits: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            max_length: 64,
            significant_digits: 12,
        }
    }
}

/// Format a number for the calculator display.
///
/// Non-finite values become [`ERROR_DISPLAY`]; near-zero magnitudes become
/// `"0"`. Finite values use a general format with
/// `config.significant_digits` significant digits, trailing zeros trimmed,
/// falling back to scientific notation with six fractional digits whenever
/// the text would exceed `config.max_length`.
pub fn format_number(value: f64, config: &FormatConfig) -> String {
    if !value.is_finite() {
        return ERROR_DISPLAY.to_string();
    }
    if value.abs() < ZERO_EPSILON {
        return "0".to_string();
    }

    let text = format_general(value, config.significant_digits);

    if text.contains('e') {
        let text = if text.len() > config.max_length {
            format!("{:.6e}", value)
        } else {
            text
        };
        return with_separator(text, config);
    }

    // Only fractional text gets trimmed; integer zeros are significant.
    let trimmed = if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text.as_str()
    };
    let mut text = if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    };
    if text == "-0" {
        text = "0".to_string();
    }
    if text.len() > config.max_length {
        text = format!("{:.6e}", value);
    }
    with_separator(text, config)
}

/// General numeric format: fixed notation while the exponent is moderate,
/// scientific otherwise.
fn format_general(value: f64, significant: usize) -> String {
    let significant = significant.max(1);
    let exponent = value.abs().log10().floor() as i32;
    if exponent >= significant as i32 || exponent < -5 {
        format!("{:.*e}", significant - 1, value)
    } else {
        let decimals = (significant as i32 - 1 - exponent).max(0) as usize;
        format!("{:.*}", decimals, value)
    }
}

fn with_separator(text: String, config: &FormatConfig) -> String {
    if config.decimal_separator == '.' {
        text
    } else {
        text.replace('.', &config.decimal_separator.to_string())
    }
}
