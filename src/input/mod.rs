//! Input adapters that translate user gestures into engine actions.
//!
//! Adapters carry no calculator logic: each recognized gesture maps onto
//! at most one [`Action`](crate::engine::Action), and the host serializes
//! calls from multiple adapters into the engine.

pub mod keyboard;
pub mod voice;

pub use keyboard::action_for_key;
pub use voice::{VoiceCommand, VoiceMapper};
