//! Keystroke emission capability.
//!
//! Not every board has a path to type text at a host (USB-HID, a bridge
//! UART, nothing at all). The firmware picks one implementation at startup
//! and the replay path stays identical either way - no conditional
//! compilation at the call sites.

/// A sink that can reproduce text as keystrokes at the connected host.
///
/// Emission is best-effort: implementations must swallow their own I/O
/// failures rather than propagate them, so a missing or wedged host can
/// never block the decode loop.
pub trait Keyboard {
    /// Type the given text at the host
    fn type_text(&mut self, text: &str);
}

/// The no-op variant for boards without a keystroke path
#[derive(Debug, Default, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NullKeyboard;

impl Keyboard for NullKeyboard {
    fn type_text(&mut self, _text: &str) {}
}
