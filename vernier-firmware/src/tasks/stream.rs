//! Reading stream task
//!
//! Writes every broadcast reading to the buffered UART - the boundary to
//! the web/WebSocket collaborator that fans readings out to browsers.
//! Replays are prefixed with `*` so listeners can tell manual captures from
//! automatic updates. Write failures are logged and dropped; a disconnected
//! listener never blocks the decode path.

use defmt::*;
use embassy_rp::uart::BufferedUartTx;
use embedded_io_async::Write;

use crate::channels::READING_WATCH;

/// Stream task - forwards readings to the external listener bridge
#[embassy_executor::task]
pub async fn stream_task(mut tx: BufferedUartTx) {
    info!("Stream task started");

    let mut readings = READING_WATCH.receiver().unwrap();

    loop {
        let broadcast = readings.changed().await;

        if broadcast.replay {
            if let Err(e) = tx.write_all(b"*").await {
                warn!("stream write failed: {:?}", e);
                continue;
            }
        }
        if let Err(e) = tx.write_all(broadcast.line.as_bytes()).await {
            warn!("stream write failed: {:?}", e);
        }
    }
}
