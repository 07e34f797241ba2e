//! Inter-task communication state
//!
//! Defines the static mailbox, watch, and mutex shared between Embassy
//! tasks. Uses embassy-sync primitives plus the lock-free packet mailbox
//! from vernier-core.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use embassy_sync::watch::Watch;

use vernier_core::PacketMailbox;
use vernier_protocol::Line;

/// Maximum number of concurrent stream listeners on [`READING_WATCH`]
pub const STREAM_LISTENERS: usize = 2;

/// One formatted reading pushed to stream listeners
#[derive(Debug, Clone)]
pub struct Broadcast {
    /// The formatted line, e.g. `25.4000mm\n`
    pub line: Line,
    /// True for a user-triggered replay; streamed with a `*` prefix so
    /// listeners can tell manual captures from automatic updates
    pub replay: bool,
}

/// Completed frames from the capture task to the decode poll loop.
/// Single slot, latest value wins - intermediate frames are dropped,
/// never queued.
pub static PACKET_MAILBOX: PacketMailbox = PacketMailbox::new();

/// Broadcast fan-out of decoded readings to all stream listeners
pub static READING_WATCH: Watch<CriticalSectionRawMutex, Broadcast, STREAM_LISTENERS> =
    Watch::new();

/// Last decoded line, retained for keystroke replay only
pub static LAST_READING: Mutex<CriticalSectionRawMutex, Option<Line>> = Mutex::new(None);
