//! Board-agnostic application logic for the Vernier caliper reader
//!
//! This crate contains everything between the wire protocol and the
//! hardware tasks that does not depend on a specific chip:
//!
//! - Single-slot packet mailbox (interrupt-to-main handoff, latest value wins)
//! - Duplicate-suppressing decoder front-end
//! - Replay trigger debounce
//! - Capability traits for the keystroke sink

#![no_std]
#![deny(unsafe_code)]

pub mod debounce;
pub mod decoder;
pub mod mailbox;
pub mod traits;

pub use debounce::{Debounce, REPLAY_DEBOUNCE_MS};
pub use decoder::Decoder;
pub use mailbox::PacketMailbox;
pub use traits::{Keyboard, NullKeyboard};
