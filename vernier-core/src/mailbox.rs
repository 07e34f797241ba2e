//! Single-slot packet mailbox between capture and decode contexts.
//!
//! The capture side runs effectively in interrupt context and must never
//! wait; the decode side polls from a cooperative loop. The relationship is
//! strictly single-producer/single-consumer with latest-value-wins
//! semantics: if the consumer is slow, intermediate frames are overwritten,
//! never queued.
//!
//! The slot is a single atomic word, so the consumer can never observe a
//! torn frame: a publish racing with [`PacketMailbox::take`] yields either
//! the previous or the new frame in full. The ready flag is published with
//! release ordering after the slot and consumed with an acquire swap, which
//! also makes acknowledgement ("considered new exactly once") atomic.

use portable_atomic::{AtomicBool, AtomicU32, Ordering};

use vernier_protocol::Packet;

/// Lock-free single-slot mailbox carrying completed frames
#[derive(Debug)]
pub struct PacketMailbox {
    slot: AtomicU32,
    ready: AtomicBool,
}

impl Default for PacketMailbox {
    fn default() -> Self {
        Self::new()
    }
}

impl PacketMailbox {
    /// Create an empty mailbox (const, suitable for statics)
    pub const fn new() -> Self {
        Self {
            slot: AtomicU32::new(0),
            ready: AtomicBool::new(false),
        }
    }

    /// Publish a completed frame, unconditionally replacing any unconsumed
    /// previous one. Producer side; wait-free.
    pub fn publish(&self, packet: Packet) {
        self.slot.store(packet.0, Ordering::Release);
        self.ready.store(true, Ordering::Release);
    }

    /// Take the pending frame, if any, acknowledging it in the same step.
    /// Consumer side; a frame is returned at most once per publish.
    pub fn take(&self) -> Option<Packet> {
        if self.ready.swap(false, Ordering::Acquire) {
            Some(Packet(self.slot.load(Ordering::Acquire)))
        } else {
            None
        }
    }

    /// Whether a frame is pending, without consuming it
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Relaxed)
    }
}
