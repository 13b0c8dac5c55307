//! Voice command mapping.
//!
//! Translates recognized utterances into engine actions. A confidence gate
//! rejects low-quality recognitions before any mapping happens; beyond
//! that the mapper is a fixed phrase table, one action per utterance.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, warn};

use crate::engine::{Action, Operator, UnaryFunction};

/// Phrases understood by the mapper, matched against the normalized
/// transcript.
const PHRASES: &[(&str, Action)] = &[
    ("zero", Action::Digit(0)),
    ("one", Action::Digit(1)),
    ("two", Action::Digit(2)),
    ("three", Action::Digit(3)),
    ("four", Action::Digit(4)),
    ("five", Action::Digit(5)),
    ("six", Action::Digit(6)),
    ("seven", Action::Digit(7)),
    ("eight", Action::Digit(8)),
    ("nine", Action::Digit(9)),
    ("point", Action::Decimal),
    ("decimal", Action::Decimal),
    ("plus", Action::Operator(Operator::Add)),
    ("add", Action::Operator(Operator::Add)),
    ("minus", Action::Operator(Operator::Subtract)),
    ("subtract", Action::Operator(Operator::Subtract)),
    ("times", Action::Operator(Operator::Multiply)),
    ("multiplied by", Action::Operator(Operator::Multiply)),
    ("divided by", Action::Operator(Operator::Divide)),
    ("over", Action::Operator(Operator::Divide)),
    ("to the power of", Action::Operator(Operator::Power)),
    ("power", Action::Operator(Operator::Power)),
    ("equals", Action::Equals),
    ("result", Action::Equals),
    ("percent", Action::Percent),
    ("negate", Action::Sign),
    ("sign", Action::Sign),
    ("sine", Action::Unary(UnaryFunction::Sin)),
    ("cosine", Action::Unary(UnaryFunction::Cos)),
    ("tangent", Action::Unary(UnaryFunction::Tan)),
    ("square root", Action::Unary(UnaryFunction::Sqrt)),
    ("factorial", Action::Unary(UnaryFunction::Factorial)),
    ("memory add", Action::MemoryAdd),
    ("memory plus", Action::MemoryAdd),
    ("memory subtract", Action::MemorySubtract),
    ("memory minus", Action::MemorySubtract),
    ("memory recall", Action::MemoryRecall),
    ("memory clear", Action::MemoryClear),
    ("clear", Action::Clear),
    ("delete", Action::Delete),
    ("backspace", Action::Delete),
];

lazy_static! {
    /// Everything that is not a word character collapses to a space.
    static ref NON_WORD: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
}

/// A recognized utterance with its recognition confidence in `0.0..=1.0`.
#[derive(Clone, Debug)]
pub struct VoiceCommand {
    pub transcript: String,
    pub confidence: f32,
}

/// Maps voice commands to engine actions behind a confidence gate.
#[derive(Clone, Copy, Debug)]
pub struct VoiceMapper {
    threshold: f32,
}

impl VoiceMapper {
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    /// Map a recognized utterance to an engine action.
    ///
    /// Returns `None` for recognitions below the confidence threshold and
    /// for phrases the calculator does not understand.
    pub fn map(&self, command: &VoiceCommand) -> Option<Action> {
        if command.confidence < self.threshold {
            warn!(
                transcript = %command.transcript,
                confidence = command.confidence,
                "rejected low-confidence voice command"
            );
            return None;
        }
        let normalized = normalize(&command.transcript);
        // Recognizers emit bare numerals as often as digit words.
        if normalized.len() == 1
            && let Some(digit) = normalized.chars().next().and_then(|c| c.to_digit(10))
        {
            return Some(Action::Digit(digit as u8));
        }
        let action = PHRASES
            .iter()
            .find(|(phrase, _)| *phrase == normalized)
            .map(|(_, action)| *action);
        if action.is_none() {
            debug!(%normalized, "unrecognized voice command");
        }
        action
    }
}

/// Lowercase, strip punctuation, collapse whitespace.
fn normalize(transcript: &str) -> String {
    let lower = transcript.to_lowercase();
    let cleaned = NON_WORD.replace_all(&lower, " ");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(transcript: &str, confidence: f32) -> VoiceCommand {
        VoiceCommand {
            transcript: transcript.to_string(),
            confidence,
        }
    }

    #[test]
    fn test_low_confidence_is_rejected() {
        let mapper = VoiceMapper::new(0.6);
        assert_eq!(mapper.map(&command("seven", 0.3)), None);
        assert_eq!(mapper.map(&command("seven", 0.9)), Some(Action::Digit(7)));
    }

    #[test]
    fn test_digit_words_and_numerals() {
        let mapper = VoiceMapper::new(0.5);
        assert_eq!(mapper.map(&command("three", 0.9)), Some(Action::Digit(3)));
        assert_eq!(mapper.map(&command("3", 0.9)), Some(Action::Digit(3)));
    }

    #[test]
    fn test_phrases_are_normalized() {
        let mapper = VoiceMapper::new(0.5);
        assert_eq!(
            mapper.map(&command("  Divided By!", 0.9)),
            Some(Action::Operator(Operator::Divide))
        );
        assert_eq!(
            mapper.map(&command("Square Root", 0.9)),
            Some(Action::Unary(UnaryFunction::Sqrt))
        );
    }

    #[test]
    fn test_memory_phrases_do_not_shadow_clear() {
        let mapper = VoiceMapper::new(0.5);
        assert_eq!(
            mapper.map(&command("memory clear", 0.9)),
            Some(Action::MemoryClear)
        );
        assert_eq!(mapper.map(&command("clear", 0.9)), Some(Action::Clear));
    }

    #[test]
    fn test_unknown_phrases_map_to_none() {
        let mapper = VoiceMapper::new(0.5);
        assert_eq!(mapper.map(&command("open firefox", 0.9)), None);
        assert_eq!(mapper.map(&command("", 0.9)), None);
    }
}
