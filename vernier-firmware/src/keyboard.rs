//! Keystroke sink implementations.
//!
//! The keystroke-capable variant writes the replay text to UART1, where a
//! HID bridge (or a developer's terminal) turns it into keystrokes. The
//! variant is chosen once in `main()`; the button task only ever sees the
//! [`Keyboard`] capability.

use defmt::*;
use embassy_rp::uart::{Blocking, UartTx};

use vernier_core::{Keyboard, NullKeyboard};

/// UART-backed keystroke sink
pub struct UartKeyboard {
    tx: UartTx<'static, Blocking>,
}

impl UartKeyboard {
    pub fn new(tx: UartTx<'static, Blocking>) -> Self {
        Self { tx }
    }
}

impl Keyboard for UartKeyboard {
    fn type_text(&mut self, text: &str) {
        // Best-effort: a stuck bridge must not stall the replay path
        if self.tx.blocking_write(text.as_bytes()).is_err() {
            warn!("keyboard UART write failed");
        }
    }
}

/// Keystroke sink selected at startup
pub enum KeyboardSink {
    Uart(UartKeyboard),
    Null(NullKeyboard),
}

impl Keyboard for KeyboardSink {
    fn type_text(&mut self, text: &str) {
        match self {
            KeyboardSink::Uart(kbd) => kbd.type_text(text),
            KeyboardSink::Null(kbd) => kbd.type_text(text),
        }
    }
}
