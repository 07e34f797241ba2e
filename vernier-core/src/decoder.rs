//! Duplicate-suppressing decoder front-end.
//!
//! The device keeps reporting an unchanged reading several times per second.
//! Decoding and re-broadcasting those duplicates is pure waste, so the
//! decoder tracks the last packet it consumed and skips identical ones.
//! This is a throughput optimization, not a correctness mechanism - there is
//! no checksum, and a corrupt frame decodes like any other.

use vernier_protocol::{Measurement, Packet};

/// Stateful decode front-end for the poll loop
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Decoder {
    /// Raw value of the last accepted packet
    last_packet: Option<u32>,
}

impl Decoder {
    /// Create a decoder that will accept the first packet it sees
    pub const fn new() -> Self {
        Self { last_packet: None }
    }

    /// Decode a frame snapshot, unless it duplicates the previous one.
    ///
    /// Returns `None` for duplicates; decode work is skipped entirely in
    /// that case.
    pub fn accept(&mut self, packet: Packet) -> Option<Measurement> {
        if self.last_packet == Some(packet.0) {
            return None;
        }
        self.last_packet = Some(packet.0);
        Some(packet.decode())
    }
}
