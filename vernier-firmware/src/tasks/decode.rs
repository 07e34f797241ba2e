//! Decode poll loop
//!
//! Cooperative counterpart to the capture task: polls the packet mailbox on
//! a ticker, runs the duplicate-suppressing decoder, and fans the formatted
//! reading out to the stream listeners and the replay slot.

use defmt::*;
use embassy_time::{Duration, Ticker};

use vernier_core::Decoder;

use crate::channels::{Broadcast, LAST_READING, PACKET_MAILBOX, READING_WATCH};

/// Mailbox poll interval. The device sends a handful of frames per second;
/// 5 ms keeps worst-case decode latency well under one frame period.
const POLL_INTERVAL_MS: u64 = 5;

/// Decode task - turns completed frames into broadcast readings
#[embassy_executor::task]
pub async fn decode_task() {
    info!("Decode task started");

    let mut decoder = Decoder::new();
    let sender = READING_WATCH.sender();
    let mut ticker = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS));

    loop {
        ticker.next().await;

        let Some(packet) = PACKET_MAILBOX.take() else {
            continue;
        };

        // Duplicate frames are acknowledged but not re-decoded
        let Some(measurement) = decoder.accept(packet) else {
            continue;
        };

        let line = measurement.to_line();
        info!("reading: {=str}", line.as_str().trim_end());

        *LAST_READING.lock().await = Some(line.clone());
        sender.send(Broadcast {
            line,
            replay: false,
        });
    }
}
