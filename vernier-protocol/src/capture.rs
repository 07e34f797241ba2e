//! Bit capture engine and timing-based framing policy.
//!
//! The device gives us nothing but clock edges and a data level. One bit is
//! shifted into an accumulator per falling clock edge; a frame ends when the
//! next edge arrives after more than [`INTER_PACKET_GAP_MS`] of silence,
//! which simultaneously starts the next frame.
//!
//! The framing decision is a pure function of two timestamps so it can be
//! unit-tested without real interrupts. Timestamps are unsigned milliseconds
//! compared with wrapping subtraction, so counter wraparound is handled
//! explicitly.

use crate::frame::Packet;

/// Minimum idle time between clock edges that marks a frame boundary.
///
/// The device clocks the bits of one frame out back-to-back and then idles
/// well past this threshold before the next frame.
pub const INTER_PACKET_GAP_MS: u32 = 100;

/// Framing decision for one clock edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameBoundary {
    /// Edge arrived mid-frame: shift the new bit into the current frame
    ContinueFrame,
    /// The device went idle since the previous edge: the accumulated frame
    /// is complete and this edge starts a new one
    StartNewFrame,
}

/// Classify a clock edge against the inter-packet gap threshold.
///
/// Pure function of (previous timestamp, current timestamp, threshold).
/// Wrapping subtraction keeps the comparison correct across `u32`
/// millisecond counter wraparound.
pub fn classify_edge(prev_ms: u32, now_ms: u32, gap_ms: u32) -> FrameBoundary {
    if now_ms.wrapping_sub(prev_ms) > gap_ms {
        FrameBoundary::StartNewFrame
    } else {
        FrameBoundary::ContinueFrame
    }
}

/// Accumulates one bit per clock edge and emits completed frames.
///
/// Runs in interrupt context on the hardware side, so each invocation does
/// bounded, minimal work: one sample inversion, one timestamp comparison,
/// one shift-or or one snapshot.
///
/// There is deliberately no bounds check on the shift count. Past 24 bits
/// the oldest bits fall off the top of the 32-bit accumulator; only the low
/// 24 bits are ever decoded, and under normal device cadence the framing gap
/// resets the accumulator long before that matters.
#[derive(Debug, Clone)]
pub struct BitCapture {
    /// Accumulating frame, most recently read bit in the LSB
    packet: u32,
    /// Timestamp of the previous edge; `None` until the first edge is seen
    last_edge_ms: Option<u32>,
    /// Gap threshold, configurable for tests
    gap_ms: u32,
}

impl Default for BitCapture {
    fn default() -> Self {
        Self::new()
    }
}

impl BitCapture {
    /// Create a capture engine with the standard gap threshold
    pub const fn new() -> Self {
        Self::with_gap(INTER_PACKET_GAP_MS)
    }

    /// Create a capture engine with a custom gap threshold
    pub const fn with_gap(gap_ms: u32) -> Self {
        Self {
            packet: 0,
            last_edge_ms: None,
            gap_ms,
        }
    }

    /// Process one falling clock edge.
    ///
    /// `data_level_high` is the logic level sampled on the data line at the
    /// edge; the hardware convention is inverted, logic-low means data bit 1.
    ///
    /// Returns the completed frame when this edge was classified as the
    /// start of a new one. The very first edge after construction starts a
    /// frame silently - there is nothing accumulated worth publishing.
    pub fn on_clock_edge(&mut self, data_level_high: bool, now_ms: u32) -> Option<Packet> {
        let bit = u32::from(!data_level_high);

        let completed = match self.last_edge_ms {
            None => {
                self.packet = bit;
                None
            }
            Some(prev_ms) => match classify_edge(prev_ms, now_ms, self.gap_ms) {
                FrameBoundary::StartNewFrame => {
                    let done = Packet(self.packet);
                    self.packet = bit;
                    Some(done)
                }
                FrameBoundary::ContinueFrame => {
                    self.packet = (self.packet << 1) | bit;
                    None
                }
            },
        };

        self.last_edge_ms = Some(now_ms);
        completed
    }

    /// The frame currently being accumulated (for diagnostics)
    pub fn pending(&self) -> u32 {
        self.packet
    }
}
