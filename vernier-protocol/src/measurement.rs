//! Decoded measurement values and line formatting.
//!
//! Values are fixed-point `i32` in 1e-4 units (tenths of a micrometer /
//! ten-thousandths of an inch) because both device resolutions are integral
//! in that base: 0.01 mm/count = 100, 0.0005 in/count = 5. Formatting is
//! plain integer arithmetic, so the 4-decimal output is exact on every
//! target.

use core::fmt::Write;

use heapless::String;

/// Capacity of a formatted reading line. The widest possible line is
/// `-214748.3647mm\n` (15 bytes), so 16 always fits.
pub const LINE_CAPACITY: usize = 16;

/// One formatted reading: `<sign><digits>.<4 digits><unit>\n`
pub type Line = String<LINE_CAPACITY>;

/// Measurement unit reported by the device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Unit {
    Millimeters,
    Inches,
}

impl Unit {
    /// Device resolution in 1e-4 units per count
    pub fn resolution_e4(self) -> i32 {
        match self {
            Unit::Millimeters => 100, // 0.01 mm/count
            Unit::Inches => 5,        // 0.0005 in/count
        }
    }

    /// Unit suffix appended to a formatted line
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Millimeters => "mm",
            Unit::Inches => "\"",
        }
    }
}

/// A decoded, signed measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Measurement {
    /// Signed value in 1e-4 units
    pub value_e4: i32,
    /// Unit the device was displaying
    pub unit: Unit,
}

impl Measurement {
    /// The value as a float, for consumers that want arithmetic over exact
    /// formatting
    pub fn value(&self) -> f32 {
        self.value_e4 as f32 / 10_000.0
    }

    /// Format as fixed 4-decimal-place text with unit suffix and trailing
    /// newline, e.g. `25.4000mm\n` or `-1.0000"\n`.
    pub fn to_line(&self) -> Line {
        let mut line = Line::new();
        let abs = self.value_e4.unsigned_abs();
        let sign = if self.value_e4 < 0 { "-" } else { "" };
        // Cannot overflow LINE_CAPACITY, see its doc comment
        let _ = write!(
            line,
            "{}{}.{:04}{}\n",
            sign,
            abs / 10_000,
            abs % 10_000,
            self.unit.suffix()
        );
        line
    }
}
