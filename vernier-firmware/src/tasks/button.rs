//! Capture button task
//!
//! A physical button replays the last decoded reading: once as keystrokes
//! through whatever keyboard sink was selected at startup, and once on the
//! stream with the replay flag set. Triggers are rate-limited to one per
//! 500 ms.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::Instant;

use vernier_core::{Debounce, Keyboard};

use crate::channels::{Broadcast, LAST_READING, READING_WATCH};
use crate::keyboard::KeyboardSink;

/// Button task - debounced replay of the last reading
#[embassy_executor::task]
pub async fn button_task(mut button: Input<'static>, mut keyboard: KeyboardSink) {
    info!("Button task started");

    let mut debounce = Debounce::default();
    let sender = READING_WATCH.sender();

    loop {
        button.wait_for_falling_edge().await;

        let now_ms = Instant::now().as_millis() as u32;
        if !debounce.try_trigger(now_ms) {
            continue;
        }

        // Nothing decoded yet - nothing to replay
        let Some(line) = LAST_READING.lock().await.clone() else {
            debug!("replay requested before first reading");
            continue;
        };

        debug!("replaying {=str}", line.as_str().trim_end());
        keyboard.type_text(line.as_str());
        sender.send(Broadcast { line, replay: true });
    }
}
