//! Capability traits implemented by the firmware layer

pub mod keyboard;

pub use keyboard::{Keyboard, NullKeyboard};
