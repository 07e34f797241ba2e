//! Bit capture task
//!
//! Runs the capture engine off falling edges on the caliper's clock line.
//! The loop body is the firmware's hot path: one data-line sample, one
//! timestamp, one engine step, at most one mailbox publish. Everything else
//! lives downstream of the mailbox.

use defmt::*;
use embassy_rp::gpio::{Input, Output};
use embassy_time::Instant;

use vernier_protocol::BitCapture;

use crate::channels::PACKET_MAILBOX;

/// Capture task - shifts one bit per falling clock edge, publishes
/// completed frames
#[embassy_executor::task]
pub async fn capture_task(
    mut clock: Input<'static>,
    data: Input<'static>,
    mut led: Output<'static>,
) {
    info!("Capture task started");

    let mut capture = BitCapture::new();

    loop {
        clock.wait_for_falling_edge().await;

        // Sample the data line exactly once per edge
        let level = data.is_high();
        let now_ms = Instant::now().as_millis() as u32;

        if let Some(packet) = capture.on_clock_edge(level, now_ms) {
            trace!("frame complete: {=u32:x}", packet.0);
            PACKET_MAILBOX.publish(packet);
            led.toggle();
        }
    }
}
